//! Errors raised while performing.
//!
//! Tuning and playing never fail. Only handing a finished line to a
//! [`Stage`](crate::stage::Stage) can.

/// Result type for performance operations
pub type Result<T> = std::result::Result<T, PerformError>;

#[derive(thiserror::Error, Debug)]
pub enum PerformError {
    #[error("could not write to stage: {0}")]
    Io(#[from] std::io::Error),
    #[error("stage is full, dropped line `{line}`")]
    StageFull { line: String },
}
