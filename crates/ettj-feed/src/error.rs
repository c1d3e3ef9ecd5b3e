//! Error types for feed loading.
//!
//! Every variant is a load-time hard failure; the feed never degrades a
//! row silently. Underlying I/O and CSV errors are carried as rendered
//! strings so the error type stays cheap to clone and pass around.

use thiserror::Error;

use ettj_math::MathError;

/// A specialized Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while loading the parameter feed.
#[derive(Error, Debug, Clone)]
pub enum FeedError {
    /// HTTP fetch failed (connection, status, or body read).
    #[error("Failed to fetch parameter feed from {url}: {reason}")]
    Fetch {
        /// The URL that was requested.
        url: String,
        /// Description of the failure.
        reason: String,
    },

    /// Local file could not be read.
    #[error("Failed to read parameter file {path}: {reason}")]
    Io {
        /// The path that was opened.
        path: String,
        /// Description of the failure.
        reason: String,
    },

    /// CSV structure or field could not be parsed.
    #[error("Malformed parameter file: {reason}")]
    Parse {
        /// Description of the malformed content.
        reason: String,
    },

    /// A required column is absent from the header.
    #[error("Missing expected column '{column}' in parameter file")]
    MissingColumn {
        /// The absent column name.
        column: String,
    },

    /// A date field is neither an ISO date nor an epoch timestamp.
    #[error("Unrecognized date value '{value}'")]
    InvalidDate {
        /// The raw field content.
        value: String,
    },

    /// A row's parameters failed model validation.
    #[error("Invalid parameters for '{curve_type}' on {date}: {source}")]
    InvalidParams {
        /// The row's curve-type tag.
        curve_type: String,
        /// The row's estimation date.
        date: String,
        /// The underlying model error.
        source: MathError,
    },
}
