// src/lock.rs

use std::fs::OpenOptions;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// Lock file guarding one data file: the data file path with `.lock`
/// appended, so each collection is locked independently.
pub fn lock_path_for(data_file: &Path) -> PathBuf {
    let mut name = data_file.as_os_str().to_os_string();
    name.push(".lock");
    PathBuf::from(name)
}

/// Advisory lock held for the duration of one load–mutate–save unit.
/// Acquiring fails if another invocation already holds the lock; the file
/// is removed when the guard drops, on every exit path.
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
}

impl FileLock {
    pub fn acquire(path: &Path) -> Result<Self, Error> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(Self {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::new(
                ErrorKind::AlreadyExists,
                format!(
                    "another invocation is already running (lock file {} exists)",
                    path.display()
                ),
            )),
            Err(e) => Err(e),
        }
    }

    pub fn is_held(path: &Path) -> bool {
        path.exists()
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::error!("Failed to remove lock file {}: {}", self.path.display(), e);
        }
    }
}
