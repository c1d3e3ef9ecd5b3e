//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid tenor value.
    #[error("Invalid tenor: {0}. Must be a non-negative number of years.")]
    InvalidTenor(String),

    /// Invalid parameter list.
    #[error("Invalid parameters: {0}. Expected six comma-separated numbers b1,b2,b3,b4,l1,l2.")]
    InvalidParams(String),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
