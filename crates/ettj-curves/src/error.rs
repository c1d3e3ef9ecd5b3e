//! Error types for curve-layer operations.
//!
//! The grid layer deliberately recovers instead of erroring (unparseable
//! tenor input falls back to the default grid), so the error surface here
//! stays small.

use thiserror::Error;

/// A specialized Result type for curve-layer operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve-layer operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// A curve-type tag did not match any known curve family.
    #[error("Unknown curve type '{tag}' (expected one of: pre, ipca)")]
    UnknownCurveType {
        /// The tag that failed to resolve.
        tag: String,
    },

    /// A grid preset name did not match any known preset.
    #[error("Unknown grid preset '{name}' (expected one of: smooth, classic, brazil)")]
    UnknownGridPreset {
        /// The name that failed to resolve.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::UnknownCurveType {
            tag: "usd".to_string(),
        };
        assert!(err.to_string().contains("usd"));
    }
}
