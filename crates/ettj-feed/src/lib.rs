//! # ETTJ Feed
//!
//! Historical NSS parameter rows for the ETTJ term structure toolkit.
//!
//! The upstream scraper publishes one row per curve type per estimation
//! date with columns `type, date, b1, b2, b3, b4, l1, l2`. This crate
//! loads that table from a local file or an HTTP URL, validates the
//! header, normalizes dates (ISO strings or epoch timestamps both become
//! `YYYY-MM-DD`) and converts rows into validated model parameters.
//!
//! Failures here are hard errors: a frontend that cannot load parameter
//! history falls back to the static default snapshots, which live in
//! `ettj-curves` precisely so that nothing depends on this crate being
//! reachable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod row;
pub mod source;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FeedError, FeedResult};
    pub use crate::row::NssRow;
    pub use crate::source::{from_reader, latest_by_type, load_path, load_url};
}

pub use error::{FeedError, FeedResult};
pub use row::NssRow;
pub use source::{from_reader, latest_by_type, load_path, load_url};
