// Error types for the job board, built on thiserror.
use thiserror::Error;

pub mod storage;

pub use storage::{StorageError, StorageResult};

use crate::services::RecordId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Invalid username or email")]
    AccountNotFound,

    #[error("No user is currently logged in")]
    NoActiveSession,

    #[error("No user record at {0}")]
    UserNotFound(RecordId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Console error: {0}")]
    Input(#[from] std::io::Error),

    // Standard input reached end of file
    #[error("Input closed")]
    InputClosed,
}

pub type AppResult<T> = Result<T, AppError>;
