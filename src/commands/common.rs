// src/commands/common.rs

use crate::core::models::TaskStatus;

/// One parsed invocation of the task CLI. Renaming and status changes are
/// deliberately separate commands: `update` refreshes the timestamp for a
/// name change, `mark-*` for a status change, never both at once.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskCommand {
    Add { name: String },
    Delete { id: u64 },
    Update { id: u64, name: String },
    List { status: Option<TaskStatus> },
    MarkInProgress { id: u64 },
    MarkDone { id: u64 },
}

/// One parsed invocation of the expense CLI.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseCommand {
    Add { description: String, amount: f64 },
    Delete { id: u64 },
    List,
    Summary { month: Option<u32> },
}
