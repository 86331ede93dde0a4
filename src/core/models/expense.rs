// src/core/models/expense.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::errors::StoreError;
use crate::core::models::Record;

/// A single expense, as persisted in the expense file. Dates serialize as
/// `YYYY-MM-DD`, the same format the file has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(id: u64, date: NaiveDate, description: String, amount: f64) -> Result<Self, StoreError> {
        if description.trim().is_empty() {
            return Err(StoreError::validation(
                "description",
                "expense description cannot be empty",
            ));
        }
        if amount <= 0.0 {
            return Err(StoreError::validation(
                "amount",
                format!("amount must be a positive number, got {}", amount),
            ));
        }

        Ok(Expense {
            id,
            date,
            description,
            amount,
        })
    }
}

impl Record for Expense {
    fn id(&self) -> u64 {
        self.id
    }
}
