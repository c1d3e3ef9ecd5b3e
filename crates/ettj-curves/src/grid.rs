//! Maturity grid construction.
//!
//! Grids are ordered sequences of non-negative tenors in years. Three
//! sources exist: fixed presets, dense evenly-spaced grids, and free-text
//! parsing of comma-separated values. Parsing never errors; an input that
//! yields no usable tenors falls back to [`default_grid`], since silently
//! recovering beats blocking an interactive caller.

use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;

/// The compact Brazil-flavored preset, matching the liquid DI vertices.
pub fn brazil() -> Vec<f64> {
    vec![0.25, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 10.0]
}

/// The classic textbook preset spanning one month to thirty years.
pub fn classic() -> Vec<f64> {
    vec![
        0.08, 0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 15.0, 20.0, 30.0,
    ]
}

/// A dense grid of `points_per_year * max_years` evenly spaced tenors.
///
/// Points are generated by index (`i / points_per_year` for `i = 1..=n`)
/// rather than by accumulating a step, so the count is exact: the first
/// point is one step above zero and the last is exactly `max_years`.
pub fn dense(max_years: u32, points_per_year: u32) -> Vec<f64> {
    let n = points_per_year * max_years;
    (1..=n)
        .map(|i| f64::from(i) / f64::from(points_per_year))
        .collect()
}

/// The default grid: ten years at 52 points per year.
pub fn default_grid() -> Vec<f64> {
    dense(10, 52)
}

/// Parses free text into a deduplicated ascending grid.
///
/// Entries are comma-separated; non-numeric, non-finite and negative
/// entries are dropped. An empty result falls back to [`default_grid`].
pub fn parse(text: &str) -> Vec<f64> {
    let mut tenors: Vec<f64> = text
        .split(',')
        .filter_map(|entry| entry.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite() && *t >= 0.0)
        .collect();

    tenors.sort_by(f64::total_cmp);
    tenors.dedup();

    if tenors.is_empty() {
        log::debug!("tenor input parsed to an empty grid, using default");
        default_grid()
    } else {
        tenors
    }
}

/// Named grid presets, as offered by interactive frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPreset {
    /// Dense 52 points/year over ten years.
    Smooth,
    /// Classic textbook vertices out to thirty years.
    Classic,
    /// Compact Brazil-flavored vertices out to ten years.
    Brazil,
}

impl GridPreset {
    /// Resolves the preset into its tenor grid.
    pub fn tenors(self) -> Vec<f64> {
        match self {
            Self::Smooth => default_grid(),
            Self::Classic => classic(),
            Self::Brazil => brazil(),
        }
    }
}

impl fmt::Display for GridPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Smooth => "smooth",
            Self::Classic => "classic",
            Self::Brazil => "brazil",
        };
        write!(f, "{name}")
    }
}

impl FromStr for GridPreset {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "smooth" => Ok(Self::Smooth),
            "classic" => Ok(Self::Classic),
            "brazil" => Ok(Self::Brazil),
            _ => Err(CurveError::UnknownGridPreset {
                name: s.to_string(),
            }),
        }
    }
}
