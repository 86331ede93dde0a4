use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::app_config::AppConfig;
use crate::commands::common::{ExpenseCommand, TaskCommand};
use crate::core::store::{ExpenseStore, TaskStore};
use crate::lock::{lock_path_for, FileLock};
use dotenvy::dotenv;

pub mod app_config;
pub mod commands;
pub mod core;
pub mod lock;

pub fn initialize_environment() {
    pretty_env_logger::init();
    dotenv().ok();
}

pub fn run_task_command(command: TaskCommand) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::new()?;
    let mut stdout = std::io::stdout();
    run_task_command_at(Path::new(&config.task_file), command, &mut stdout)
}

pub fn run_expense_command(command: ExpenseCommand) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::new()?;
    let mut stdout = std::io::stdout();
    run_expense_command_at(Path::new(&config.expense_file), command, &mut stdout)
}

/// One full invocation against the task file: take the lock, load the
/// collection, apply the command, persist, release the lock. Nothing is
/// written if the command fails, so the prior file stays as it was.
pub fn run_task_command_at<W: Write>(
    path: &Path,
    command: TaskCommand,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let _lock = FileLock::acquire(&lock_path_for(path))?;

    let mut store = TaskStore::load(path)?;
    commands::cli::execute_task_command(&mut store, command, output)?;
    store.save()?;

    Ok(())
}

/// Same unit as `run_task_command_at`, for the expense file.
pub fn run_expense_command_at<W: Write>(
    path: &Path,
    command: ExpenseCommand,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    let _lock = FileLock::acquire(&lock_path_for(path))?;

    let mut store = ExpenseStore::load(path)?;
    commands::cli::execute_expense_command(&mut store, command, output)?;
    store.save()?;

    Ok(())
}
