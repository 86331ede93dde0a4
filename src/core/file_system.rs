// src/core/file_system.rs

use crate::core::errors::StoreError;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub struct FileSystem;

impl FileSystem {
    /// Overwrites the collection file with the full serialized collection.
    /// Writes to a temp file and renames it into place so the old file
    /// stays intact if the process dies mid-write.
    pub fn save_records<T: Serialize>(records: &[T], path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_file = path.with_extension("json.temp");
        fs::write(&temp_file, &json)?;
        fs::rename(&temp_file, path)?;

        debug!("Saved {} records to {}", records.len(), path.display());
        Ok(())
    }

    /// Reads the collection file. A missing file means first run and yields
    /// an empty collection; a file that exists but does not parse is
    /// reported as corrupt and left alone rather than reset.
    pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            info!("No collection file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|source| StoreError::StorageCorrupt {
            path: path.to_path_buf(),
            source,
        })
    }
}
