// src/commands/cli.rs

use clap::Parser;
use std::error::Error;
use std::io::Write;

use super::common::{ExpenseCommand, TaskCommand};
use crate::core::models::TaskStatus;
use crate::core::store::{ExpenseStore, TaskStore};

/// Parses the task CLI surface:
///   add <name> | delete <id> | update <id> <name> | list [status]
///   | mark-in-progress <id> | mark-done <id>
pub fn parse_task_args(args: &[String]) -> Result<TaskCommand, Box<dyn Error>> {
    if args.len() < 2 {
        return Err("Usage: pockettrack_tasks <command> [args...]".into());
    }

    let command = &args[1];
    let args = &args[2..];

    match command.as_str() {
        "add" => {
            if args.len() != 1 {
                return Err("Usage: pockettrack_tasks add <name>".into());
            }
            Ok(TaskCommand::Add {
                name: args[0].clone(),
            })
        }
        "delete" => {
            if args.len() != 1 {
                return Err("Usage: pockettrack_tasks delete <id>".into());
            }
            Ok(TaskCommand::Delete {
                id: parse_task_id(&args[0])?,
            })
        }
        "update" => {
            if args.len() != 2 {
                return Err("Usage: pockettrack_tasks update <id> <name>".into());
            }
            Ok(TaskCommand::Update {
                id: parse_task_id(&args[0])?,
                name: args[1].clone(),
            })
        }
        "list" => match args {
            [] => Ok(TaskCommand::List { status: None }),
            [status] => Ok(TaskCommand::List {
                status: Some(status.parse()?),
            }),
            _ => Err("Usage: pockettrack_tasks list [to-do|in-progress|done]".into()),
        },
        "mark-in-progress" => {
            if args.len() != 1 {
                return Err("Usage: pockettrack_tasks mark-in-progress <id>".into());
            }
            Ok(TaskCommand::MarkInProgress {
                id: parse_task_id(&args[0])?,
            })
        }
        "mark-done" => {
            if args.len() != 1 {
                return Err("Usage: pockettrack_tasks mark-done <id>".into());
            }
            Ok(TaskCommand::MarkDone {
                id: parse_task_id(&args[0])?,
            })
        }
        unknown => Err(format!(
            "Unknown command: {}. Usage: pockettrack_tasks <add|delete|update|list|mark-in-progress|mark-done>",
            unknown
        )
        .into()),
    }
}

fn parse_task_id(value: &str) -> Result<u64, String> {
    let id: u64 = value
        .parse()
        .map_err(|_| format!("Invalid id: {}", value))?;
    if id == 0 {
        return Err("ID must be a positive integer".into());
    }
    Ok(id)
}

#[derive(Parser, Debug)]
#[command(name = "pockettrack_expenses", about = "Track expenses in a local JSON file")]
struct ExpenseArgs {
    /// Command to run: add, delete, list, summary
    command: String,

    /// Description of the expense (used with 'add')
    #[arg(long)]
    description: Option<String>,

    /// Amount of the expense (used with 'add')
    #[arg(long, value_parser = parse_positive_amount)]
    amount: Option<f64>,

    /// ID of the expense (used with 'delete')
    #[arg(long, value_parser = parse_positive_id)]
    id: Option<u64>,

    /// Month number (1-12) for the monthly summary (used with 'summary')
    #[arg(long, value_parser = parse_month)]
    month: Option<u32>,
}

fn parse_positive_amount(value: &str) -> Result<f64, String> {
    let amount: f64 = value
        .parse()
        .map_err(|_| format!("Invalid amount: {}", value))?;
    if amount <= 0.0 {
        return Err("Amount must be a positive number".into());
    }
    Ok(amount)
}

fn parse_positive_id(value: &str) -> Result<u64, String> {
    let id: u64 = value
        .parse()
        .map_err(|_| format!("Invalid id: {}", value))?;
    if id == 0 {
        return Err("ID must be a positive integer".into());
    }
    Ok(id)
}

fn parse_month(value: &str) -> Result<u32, String> {
    let month: u32 = value
        .parse()
        .map_err(|_| format!("Invalid month: {}", value))?;
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12".into());
    }
    Ok(month)
}

/// Parses the expense CLI surface. Each command accepts only its own flags,
/// anything else is rejected up front before the store is touched.
pub fn parse_expense_args(args: &[String]) -> Result<ExpenseCommand, Box<dyn Error>> {
    let parsed = ExpenseArgs::try_parse_from(args)?;

    match parsed.command.as_str() {
        "add" => {
            if parsed.id.is_some() || parsed.month.is_some() {
                return Err("For 'add', only --description and --amount are allowed".into());
            }
            let description = parsed
                .description
                .ok_or("For 'add', both --description and --amount must be provided")?;
            let amount = parsed
                .amount
                .ok_or("For 'add', both --description and --amount must be provided")?;
            Ok(ExpenseCommand::Add {
                description,
                amount,
            })
        }
        "delete" => {
            if parsed.description.is_some() || parsed.amount.is_some() || parsed.month.is_some() {
                return Err("For 'delete', only --id is allowed".into());
            }
            let id = parsed.id.ok_or("For 'delete', --id must be provided")?;
            Ok(ExpenseCommand::Delete { id })
        }
        "list" => {
            if parsed.description.is_some()
                || parsed.amount.is_some()
                || parsed.id.is_some()
                || parsed.month.is_some()
            {
                return Err("For 'list', no options are allowed".into());
            }
            Ok(ExpenseCommand::List)
        }
        "summary" => {
            if parsed.description.is_some() || parsed.amount.is_some() || parsed.id.is_some() {
                return Err("For 'summary', only --month is allowed".into());
            }
            Ok(ExpenseCommand::Summary {
                month: parsed.month,
            })
        }
        unknown => Err(format!(
            "Unknown command: {}. Usage: pockettrack_expenses <add|delete|list|summary>",
            unknown
        )
        .into()),
    }
}

/// Applies one task command to the loaded collection and writes the
/// human-readable result. The caller persists the collection afterwards.
pub fn execute_task_command<W: Write>(
    store: &mut TaskStore,
    command: TaskCommand,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    match command {
        TaskCommand::Add { name } => {
            let task = store.add(name)?;
            writeln!(output, "Task added successfully ID({})", task.id)?;
        }
        TaskCommand::Delete { id } => {
            store.remove(id)?;
            writeln!(output, "Task deleted successfully ID({})", id)?;
        }
        TaskCommand::Update { id, name } => {
            store.update_name(id, name)?;
            writeln!(output, "Task updated successfully ID({})", id)?;
        }
        TaskCommand::List { status } => {
            let tasks: Vec<_> = match status {
                Some(status) => store.filtered(status).collect(),
                None => store.tasks().iter().collect(),
            };
            if tasks.is_empty() {
                match status {
                    Some(status) => {
                        writeln!(output, "No tasks found with status '{}'.", status)?
                    }
                    None => writeln!(output, "No tasks found.")?,
                }
                return Ok(());
            }
            writeln!(output, "{:<5}{:<14}{}", "ID", "Status", "Name")?;
            writeln!(output, "{}", "-".repeat(50))?;
            for task in tasks {
                writeln!(output, "{:<5}{:<14}{}", task.id, task.status.to_string(), task.name)?;
            }
        }
        TaskCommand::MarkInProgress { id } => {
            let task = store.set_status(id, TaskStatus::InProgress)?;
            writeln!(output, "Task is marked as {} ID({})", task.status, id)?;
        }
        TaskCommand::MarkDone { id } => {
            let task = store.set_status(id, TaskStatus::Done)?;
            writeln!(output, "Task is marked as {} ID({})", task.status, id)?;
        }
    }
    Ok(())
}

/// Applies one expense command to the loaded collection, same contract as
/// `execute_task_command`.
pub fn execute_expense_command<W: Write>(
    store: &mut ExpenseStore,
    command: ExpenseCommand,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    match command {
        ExpenseCommand::Add {
            description,
            amount,
        } => {
            let expense = store.add(description, amount)?;
            writeln!(output, "Expense added successfully ID({})", expense.id)?;
        }
        ExpenseCommand::Delete { id } => {
            store.remove(id)?;
            writeln!(output, "Expense deleted successfully ID({})", id)?;
        }
        ExpenseCommand::List => {
            if store.expenses().is_empty() {
                writeln!(output, "No expenses recorded yet.")?;
                return Ok(());
            }
            writeln!(
                output,
                "{:<5}{:<15}{:<30}{:>10}",
                "ID", "Date", "Description", "Amount"
            )?;
            writeln!(output, "{}", "-".repeat(60))?;
            for expense in store.expenses() {
                let description = if expense.description.chars().count() > 27 {
                    let truncated: String = expense.description.chars().take(27).collect();
                    format!("{}...", truncated)
                } else {
                    expense.description.clone()
                };
                writeln!(
                    output,
                    "{:<5}{:<15}{:<30}{:>10.2}",
                    expense.id,
                    expense.date.to_string(),
                    description,
                    expense.amount
                )?;
            }
        }
        ExpenseCommand::Summary { month } => {
            let total = store.summarize(month)?;
            match month {
                Some(month) => writeln!(
                    output,
                    "Total expenses for month {}: ${:.2}",
                    month, total
                )?,
                None => writeln!(output, "Total expenses: ${:.2}", total)?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TaskStatus;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_task_add() {
        let command = parse_task_args(&args(&["tasks", "add", "Buy milk"])).unwrap();
        assert_eq!(
            command,
            TaskCommand::Add {
                name: "Buy milk".to_string()
            }
        );
    }

    #[test]
    fn test_parse_task_add_requires_exactly_one_name() {
        assert!(parse_task_args(&args(&["tasks", "add"])).is_err());
        assert!(parse_task_args(&args(&["tasks", "add", "a", "b"])).is_err());
    }

    #[test]
    fn test_parse_task_update() {
        let command = parse_task_args(&args(&["tasks", "update", "3", "New name"])).unwrap();
        assert_eq!(
            command,
            TaskCommand::Update {
                id: 3,
                name: "New name".to_string()
            }
        );
    }

    #[test]
    fn test_parse_task_list_with_status_filter() {
        let command = parse_task_args(&args(&["tasks", "list"])).unwrap();
        assert_eq!(command, TaskCommand::List { status: None });

        let command = parse_task_args(&args(&["tasks", "list", "in-progress"])).unwrap();
        assert_eq!(
            command,
            TaskCommand::List {
                status: Some(TaskStatus::InProgress)
            }
        );

        assert!(parse_task_args(&args(&["tasks", "list", "paused"])).is_err());
    }

    #[test]
    fn test_parse_task_mark_commands() {
        assert_eq!(
            parse_task_args(&args(&["tasks", "mark-in-progress", "2"])).unwrap(),
            TaskCommand::MarkInProgress { id: 2 }
        );
        assert_eq!(
            parse_task_args(&args(&["tasks", "mark-done", "2"])).unwrap(),
            TaskCommand::MarkDone { id: 2 }
        );
    }

    #[test]
    fn test_parse_task_rejects_bad_ids() {
        assert!(parse_task_args(&args(&["tasks", "delete", "abc"])).is_err());
        assert!(parse_task_args(&args(&["tasks", "delete", "0"])).is_err());
    }

    #[test]
    fn test_parse_task_unknown_command() {
        assert!(parse_task_args(&args(&["tasks", "archive", "1"])).is_err());
        assert!(parse_task_args(&args(&["tasks"])).is_err());
    }

    #[test]
    fn test_parse_expense_add() {
        let command = parse_expense_args(&args(&[
            "expenses",
            "add",
            "--description",
            "Lunch",
            "--amount",
            "12.5",
        ]))
        .unwrap();
        assert_eq!(
            command,
            ExpenseCommand::Add {
                description: "Lunch".to_string(),
                amount: 12.5
            }
        );
    }

    #[test]
    fn test_parse_expense_add_requires_both_flags() {
        assert!(parse_expense_args(&args(&["expenses", "add", "--description", "Lunch"])).is_err());
        assert!(parse_expense_args(&args(&["expenses", "add", "--amount", "12.5"])).is_err());
    }

    #[test]
    fn test_parse_expense_rejects_non_positive_amount() {
        assert!(parse_expense_args(&args(&[
            "expenses", "add", "--description", "Lunch", "--amount", "0"
        ]))
        .is_err());
        assert!(parse_expense_args(&args(&[
            "expenses", "add", "--description", "Lunch", "--amount", "-3"
        ]))
        .is_err());
    }

    #[test]
    fn test_parse_expense_list_allows_no_flags() {
        assert_eq!(
            parse_expense_args(&args(&["expenses", "list"])).unwrap(),
            ExpenseCommand::List
        );
        assert!(parse_expense_args(&args(&["expenses", "list", "--id", "1"])).is_err());
    }

    #[test]
    fn test_parse_expense_delete_allows_only_id() {
        assert_eq!(
            parse_expense_args(&args(&["expenses", "delete", "--id", "4"])).unwrap(),
            ExpenseCommand::Delete { id: 4 }
        );
        assert!(parse_expense_args(&args(&["expenses", "delete"])).is_err());
        assert!(parse_expense_args(&args(&[
            "expenses", "delete", "--id", "4", "--month", "3"
        ]))
        .is_err());
    }

    #[test]
    fn test_parse_expense_summary_month_bounds() {
        assert_eq!(
            parse_expense_args(&args(&["expenses", "summary"])).unwrap(),
            ExpenseCommand::Summary { month: None }
        );
        assert_eq!(
            parse_expense_args(&args(&["expenses", "summary", "--month", "3"])).unwrap(),
            ExpenseCommand::Summary { month: Some(3) }
        );
        assert!(parse_expense_args(&args(&["expenses", "summary", "--month", "13"])).is_err());
        assert!(parse_expense_args(&args(&["expenses", "summary", "--month", "0"])).is_err());
    }

    #[test]
    fn test_execute_task_add_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TaskStore::load(&temp_dir.path().join("tasklist.json")).unwrap();
        let mut output = Vec::new();

        execute_task_command(
            &mut store,
            TaskCommand::Add {
                name: "Buy milk".to_string(),
            },
            &mut output,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Task added successfully ID(1)\n"
        );

        let mut output = Vec::new();
        execute_task_command(&mut store, TaskCommand::List { status: None }, &mut output).unwrap();
        let listing = String::from_utf8(output).unwrap();
        assert!(listing.contains("Buy milk"));
        assert!(listing.contains("to-do"));
    }

    #[test]
    fn test_execute_task_list_empty_status_filter() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TaskStore::load(&temp_dir.path().join("tasklist.json")).unwrap();
        let mut output = Vec::new();

        execute_task_command(
            &mut store,
            TaskCommand::List {
                status: Some(TaskStatus::Done),
            },
            &mut output,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "No tasks found with status 'done'.\n"
        );
    }

    #[test]
    fn test_execute_task_mark_done_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TaskStore::load(&temp_dir.path().join("tasklist.json")).unwrap();
        store.add("Buy milk".to_string()).unwrap();

        let mut output = Vec::new();
        execute_task_command(&mut store, TaskCommand::MarkDone { id: 1 }, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Task is marked as done ID(1)\n"
        );
    }

    #[test]
    fn test_execute_task_delete_missing_id_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = TaskStore::load(&temp_dir.path().join("tasklist.json")).unwrap();

        let mut output = Vec::new();
        let result = execute_task_command(&mut store, TaskCommand::Delete { id: 7 }, &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ID(7)"));
    }

    #[test]
    fn test_execute_expense_summary_output() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(&temp_dir.path().join("expensetracker.json")).unwrap();
        store.add("Lunch".to_string(), 120.0).unwrap();
        store.add("Groceries".to_string(), 80.0).unwrap();

        let mut output = Vec::new();
        execute_expense_command(
            &mut store,
            ExpenseCommand::Summary { month: None },
            &mut output,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Total expenses: $200.00\n"
        );
    }

    #[test]
    fn test_execute_expense_list_truncates_long_descriptions() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(&temp_dir.path().join("expensetracker.json")).unwrap();
        store
            .add("A very long description that keeps going on".to_string(), 9.99)
            .unwrap();

        let mut output = Vec::new();
        execute_expense_command(&mut store, ExpenseCommand::List, &mut output).unwrap();
        let listing = String::from_utf8(output).unwrap();
        assert!(listing.contains("A very long description tha..."));
        assert!(listing.contains("9.99"));
    }

    #[test]
    fn test_execute_expense_list_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ExpenseStore::load(&temp_dir.path().join("expensetracker.json")).unwrap();

        let mut output = Vec::new();
        execute_expense_command(&mut store, ExpenseCommand::List, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "No expenses recorded yet.\n"
        );
    }
}
