//! Application-wide error types using thiserror
//!
//! Feed failures stay inside the poll loop (they become `last_error`);
//! `AppError` covers what can stop the process from starting.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
