//! Error types for the freetime schedule.

use thiserror::Error;

/// Errors that can occur in schedule operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid slot range: {0}")]
    InvalidRange(String),

    #[error("Could not write schedule: {0}")]
    StorageWrite(String),

    #[error("Could not read schedule: {0}")]
    StorageRead(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
