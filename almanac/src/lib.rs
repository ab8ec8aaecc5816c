//! # almanac
//!
//! Calendar arithmetic for the proleptic Gregorian calendar, years 1–9999.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than on
//! `almanac-core` / `almanac-time` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! almanac = "0.1"
//! ```
//!
//! ```rust
//! use almanac::time::{Date, QuarterDefinition, Weekday, WeekendDefinition};
//!
//! let d = Date::from_ymd(2024, 5, 17).unwrap();
//! assert_eq!(d.weekday(), Weekday::Friday);
//!
//! let next = WeekendDefinition::SaturdaySunday.next_workday(d).unwrap();
//! assert_eq!(next, Date::from_ymd(2024, 5, 20).unwrap());
//!
//! let fq = QuarterDefinition::UkTaxYear.fiscal_quarter(d).unwrap();
//! assert_eq!(fq.to_string(), "FY2024 Q1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and guard clauses.
pub use almanac_core as core;

/// Dates, weeks, quarters, and weekends.
pub use almanac_time as time;
