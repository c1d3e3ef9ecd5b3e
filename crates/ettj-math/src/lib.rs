//! # ETTJ Math
//!
//! Numerical core for the ETTJ term structure toolkit.
//!
//! This crate provides the Nelson-Siegel-Svensson (NSS) model: six curve
//! parameters mapped to a continuously-compounded spot yield and an
//! instantaneous forward rate at any maturity.
//!
//! ## Design Philosophy
//!
//! - **Purity**: evaluation is a side-effect-free function of the
//!   parameters and the tenor; no state, no I/O, no caching
//! - **Numerical Stability**: the rate formulas have removable
//!   singularities at zero maturity that are handled explicitly rather
//!   than left to produce NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod svensson;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::svensson::Svensson;
}

pub use error::{MathError, MathResult};
pub use svensson::Svensson;
