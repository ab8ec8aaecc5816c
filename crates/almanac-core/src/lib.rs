//! # almanac-core
//!
//! Error definitions and guard clauses shared by the almanac crates.
//!
//! Every public boundary in `almanac-time` validates its arguments with the
//! helpers in [`guard`] and reports failure as an [`Error`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `ensure_in_range!` macros.
pub mod errors;

/// Argument validation helpers.
pub mod guard;

pub use errors::{Error, Result};
