//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling a hierarchy or loading settings.
/// The domain itself is total and never fails.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid inventory {path}: {message}")]
    Inventory { path: PathBuf, message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
