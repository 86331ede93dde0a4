// src/core/models/task.rs

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::StoreError;
use crate::core::models::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "to-do",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-do" => Ok(TaskStatus::ToDo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(StoreError::validation(
                "status",
                format!("'{}' is not one of to-do, in-progress, done", other),
            )),
        }
    }
}

/// A single task, as persisted in the task list file. Timestamps are naive
/// ISO-8601 so files written by older versions of the tool stay readable.
/// Records missing `status` or a timestamp get the documented defaults
/// (`to-do`, time of load) instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default = "now_stamp")]
    pub created_on: NaiveDateTime,
    #[serde(default = "now_stamp")]
    pub updated_on: NaiveDateTime,
}

fn now_stamp() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl Task {
    pub fn new(id: u64, name: String) -> Result<Self, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::validation("name", "task name cannot be empty"));
        }

        let now = now_stamp();
        Ok(Task {
            id,
            name,
            status: TaskStatus::ToDo,
            created_on: now,
            updated_on: now,
        })
    }

    pub fn rename(&mut self, name: String) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::validation("name", "task name cannot be empty"));
        }
        self.name = name;
        self.updated_on = now_stamp();
        Ok(())
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_on = now_stamp();
    }
}

impl Record for Task {
    fn id(&self) -> u64 {
        self.id
    }
}
