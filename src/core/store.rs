// src/core/store.rs

use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use std::path::{Path, PathBuf};

use crate::core::errors::StoreError;
use crate::core::file_system::FileSystem;
use crate::core::models::{next_id, Expense, Task, TaskStatus};

/// The task collection for one command invocation: loaded in full, mutated
/// in memory, written back in full by `save`. Nothing else touches the file
/// in between (the caller holds the lock around the whole unit).
pub struct TaskStore {
    file: PathBuf,
    records: Vec<Task>,
}

impl TaskStore {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let records = FileSystem::load_records(path)?;
        Ok(Self {
            file: path.to_path_buf(),
            records,
        })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        FileSystem::save_records(&self.records, &self.file)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.records
    }

    pub fn next_id(&self) -> u64 {
        next_id(&self.records)
    }

    pub fn find(&self, id: u64) -> Option<&Task> {
        self.records.iter().find(|task| task.id == id)
    }

    /// Adds a new task with the next free id and a default `to-do` status.
    /// Validation happens before the collection is touched; returns the
    /// newly created record.
    pub fn add(&mut self, name: String) -> Result<Task, StoreError> {
        let task = Task::new(self.next_id(), name)?;
        debug!("Adding task {} '{}'", task.id, task.name);
        self.records.push(task.clone());
        Ok(task)
    }

    /// Renames a task. The status is deliberately untouched here, status
    /// changes go through `set_status` so each path refreshes `updated_on`
    /// for exactly one reason.
    pub fn update_name(&mut self, id: u64, name: String) -> Result<&Task, StoreError> {
        let task = self
            .records
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound { id })?;
        task.rename(name)?;
        Ok(task)
    }

    pub fn set_status(&mut self, id: u64, status: TaskStatus) -> Result<&Task, StoreError> {
        let task = self
            .records
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound { id })?;
        task.set_status(status);
        Ok(task)
    }

    /// Removes the task and returns it. Deletion is final, there are no
    /// tombstones and the id is never reassigned.
    pub fn remove(&mut self, id: u64) -> Result<Task, StoreError> {
        let position = self
            .records
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound { id })?;
        Ok(self.records.remove(position))
    }

    pub fn filtered(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.records.iter().filter(move |task| task.status == status)
    }
}

/// The expense collection, same load–mutate–save shape as `TaskStore`.
pub struct ExpenseStore {
    file: PathBuf,
    records: Vec<Expense>,
}

impl ExpenseStore {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let records = FileSystem::load_records(path)?;
        Ok(Self {
            file: path.to_path_buf(),
            records,
        })
    }

    pub fn save(&self) -> Result<(), StoreError> {
        FileSystem::save_records(&self.records, &self.file)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.records
    }

    pub fn next_id(&self) -> u64 {
        next_id(&self.records)
    }

    pub fn find(&self, id: u64) -> Option<&Expense> {
        self.records.iter().find(|expense| expense.id == id)
    }

    /// Adds an expense stamped with today's date.
    pub fn add(&mut self, description: String, amount: f64) -> Result<Expense, StoreError> {
        self.add_on(Local::now().date_naive(), description, amount)
    }

    pub fn add_on(
        &mut self,
        date: NaiveDate,
        description: String,
        amount: f64,
    ) -> Result<Expense, StoreError> {
        let expense = Expense::new(self.next_id(), date, description, amount)?;
        debug!("Adding expense {} '{}'", expense.id, expense.description);
        self.records.push(expense.clone());
        Ok(expense)
    }

    pub fn remove(&mut self, id: u64) -> Result<Expense, StoreError> {
        let position = self
            .records
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(StoreError::NotFound { id })?;
        Ok(self.records.remove(position))
    }

    /// Total amount across all expenses, or across the given month number
    /// (matched in every year, as the tool has always done). An empty or
    /// no-match result is a total of zero, not an error.
    pub fn summarize(&self, month: Option<u32>) -> Result<f64, StoreError> {
        if let Some(month) = month {
            if !(1..=12).contains(&month) {
                return Err(StoreError::validation(
                    "month",
                    format!("month must be between 1 and 12, got {}", month),
                ));
            }
        }

        let total = self
            .records
            .iter()
            .filter(|expense| month.map_or(true, |m| expense.date.month() == m))
            .map(|expense| expense.amount)
            .sum();
        Ok(total)
    }
}
