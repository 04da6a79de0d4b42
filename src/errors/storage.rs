use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt data in {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::Io { path, .. } | StorageError::Corrupt { path, .. } => path,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
