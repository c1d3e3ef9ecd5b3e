//! CLI command implementations.

pub mod curve;
pub mod feed;
pub mod params;

// Re-export submodules for convenience
pub use curve::CurveArgs;
pub use feed::FeedArgs;
pub use params::ParamsArgs;

use ettj_math::Svensson;

use crate::error::{CliError, CliResult};

/// Parses six comma-separated values into a validated model.
pub fn parse_params(s: &str) -> CliResult<Svensson> {
    let values: Vec<f64> = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidParams(s.to_string()))
        })
        .collect::<CliResult<Vec<_>>>()?;

    let [b1, b2, b3, b4, l1, l2]: [f64; 6] = values
        .try_into()
        .map_err(|_| CliError::InvalidParams(s.to_string()))?;

    Svensson::new(b1, b2, b3, b4, l1, l2).map_err(|e| CliError::Calculation(e.to_string()))
}

/// Validates a tenor value.
pub fn validate_tenor(tenor: f64) -> CliResult<f64> {
    if !tenor.is_finite() || tenor < 0.0 {
        return Err(CliError::InvalidTenor(tenor.to_string()));
    }
    Ok(tenor)
}
