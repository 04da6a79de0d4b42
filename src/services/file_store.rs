use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use crate::config::StorageConfig;
use crate::errors::{StorageError, StorageResult};
use crate::models::{Job, User};

/// Reads and writes the two persisted collections as JSON arrays.
#[derive(Debug, Clone)]
pub struct FileStore {
    users_path: PathBuf,
    jobs_path: PathBuf,
}

impl FileStore {
    pub fn new(users_path: impl Into<PathBuf>, jobs_path: impl Into<PathBuf>) -> Self {
        Self {
            users_path: users_path.into(),
            jobs_path: jobs_path.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.users_file, &config.jobs_file)
    }

    pub fn load_users(&self) -> StorageResult<Vec<User>> {
        load_records(&self.users_path)
    }

    pub fn load_jobs(&self) -> StorageResult<Vec<Job>> {
        load_records(&self.jobs_path)
    }

    pub fn save_users(&self, users: &[User]) -> StorageResult<()> {
        save_records(&self.users_path, users)
    }

    pub fn save_jobs(&self, jobs: &[Job]) -> StorageResult<()> {
        save_records(&self.jobs_path, jobs)
    }

    pub fn load_users_or_empty(&self) -> Vec<User> {
        or_empty(self.load_users(), "users")
    }

    pub fn load_jobs_or_empty(&self) -> Vec<Job> {
        or_empty(self.load_jobs(), "jobs")
    }
}

// Startup never fails on a bad artifact, the collection just starts empty
fn or_empty<T>(result: StorageResult<Vec<T>>, kind: &str) -> Vec<T> {
    match result {
        Ok(records) => {
            tracing::debug!("Loaded {} {}", records.len(), kind);
            records
        }
        Err(e) => {
            tracing::warn!(
                path = %e.path().display(),
                "Failed to load {}, starting with an empty collection: {}",
                kind,
                e
            );
            Vec::new()
        }
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<T>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No data file at {}, using empty collection", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    serde_json::from_str(&data).map_err(|e| StorageError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

// Whole-file overwrite, no temp file and rename
fn save_records<T: Serialize>(path: &Path, records: &[T]) -> StorageResult<()> {
    let io_err = |e| StorageError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let data = serde_json::to_string_pretty(records).map_err(|e| StorageError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, data).map_err(io_err)?;

    tracing::debug!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
