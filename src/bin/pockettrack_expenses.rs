// src/bin/pockettrack_expenses.rs

use pockettrack::commands::cli::parse_expense_args;
use pockettrack::{initialize_environment, run_expense_command};
use std::env;
use std::process;

fn main() {
    initialize_environment();

    let args: Vec<String> = env::args().collect();
    let result = parse_expense_args(&args).and_then(run_expense_command);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
