//! # ETTJ Curves
//!
//! Curve sampling, maturity grids and default parameter snapshots for the
//! ETTJ term structure toolkit.
//!
//! This crate provides:
//!
//! - **Sampling**: [`sample`] maps an NSS model over a maturity grid into a
//!   [`CurveSeries`] of aligned tenor/spot/forward vectors
//! - **Grids**: preset and dense maturity grids plus free-text parsing with
//!   a default fallback
//! - **Snapshots**: dated default parameter sets keyed by curve type,
//!   immutable after load
//!
//! ## Quick Start
//!
//! ```rust
//! use ettj_curves::prelude::*;
//!
//! let snap = snapshot::latest(CurveType::Pre);
//! let tenors = grid::dense(10, 52);
//! let series = sample(&snap.params, &tenors);
//!
//! assert_eq!(series.len(), tenors.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod grid;
pub mod series;
pub mod snapshot;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::grid::{self, GridPreset};
    pub use crate::series::{sample, CurveSeries};
    pub use crate::snapshot::{self, CurveType, ParamSnapshot};
}

pub use error::{CurveError, CurveResult};
pub use series::{sample, CurveSeries};
pub use snapshot::{CurveType, ParamSnapshot};
