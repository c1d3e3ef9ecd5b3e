//! Sampling an NSS model over a maturity grid.

use serde::{Deserialize, Serialize};

use ettj_math::Svensson;

/// A sampled curve: three aligned vectors of equal length.
///
/// `tenors` holds the input grid exactly as given (a tenor of 0 stays 0
/// even though evaluation substitutes an epsilon internally); `spot` and
/// `forward` hold the continuously-compounded spot yield and the
/// instantaneous forward rate at each tenor. Produced fresh on every
/// sampling call; never cached or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    /// The maturity grid, in years, as supplied by the caller.
    pub tenors: Vec<f64>,
    /// Spot yield at each tenor.
    pub spot: Vec<f64>,
    /// Instantaneous forward rate at each tenor.
    pub forward: Vec<f64>,
}

impl CurveSeries {
    /// Returns the number of sampled points.
    pub fn len(&self) -> usize {
        self.tenors.len()
    }

    /// Returns true if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.tenors.is_empty()
    }
}

/// Samples spot and forward curves over a maturity grid.
///
/// Each point is evaluated independently; duplicate or unsorted tenors are
/// legal and map one-to-one onto the output. An empty grid produces an
/// empty series. Non-finite outputs (e.g. from non-finite parameters) are
/// propagated, not filtered; presentation layers skip them when drawing.
pub fn sample(curve: &Svensson, tenors: &[f64]) -> CurveSeries {
    let spot = tenors.iter().map(|&t| curve.spot_rate(t)).collect();
    let forward = tenors.iter().map(|&t| curve.forward_rate(t)).collect();

    CurveSeries {
        tenors: tenors.to_vec(),
        spot,
        forward,
    }
}
