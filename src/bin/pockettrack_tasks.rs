// src/bin/pockettrack_tasks.rs

use pockettrack::commands::cli::parse_task_args;
use pockettrack::{initialize_environment, run_task_command};
use std::env;
use std::process;

fn main() {
    initialize_environment();

    let args: Vec<String> = env::args().collect();
    let result = parse_task_args(&args).and_then(run_task_command);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
