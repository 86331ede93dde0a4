// src/core/errors.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the record store. Everything is surfaced to the CLI
/// boundary, turned into a message on stderr, and exits non-zero.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A caller-supplied field failed a documented constraint. No mutation
    /// has been performed when this is returned.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The referenced id does not exist in the collection.
    #[error("no record found with ID({id})")]
    NotFound { id: u64 },

    /// The persisted file exists but cannot be parsed into the expected
    /// record shape. The file is left untouched so no data is lost.
    #[error("stored data in {path} is corrupt, refusing to overwrite it: {source}")]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            reason: reason.into(),
        }
    }
}
