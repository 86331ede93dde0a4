// src/app_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub task_file: String,
    pub expense_file: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Start off with default values
            .set_default("task_file", "tasklist.json")?
            .set_default("expense_file", "expensetracker.json")?
            // Add in an optional local config file
            .add_source(File::with_name("config").required(false))
            // Add in settings from environment variables (with a prefix of APP)
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        settings.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            task_file: "tasklist.json".to_string(),
            expense_file: "expensetracker.json".to_string(),
        }
    }
}
