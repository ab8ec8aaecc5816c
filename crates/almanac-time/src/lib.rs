//! # almanac-time
//!
//! Proleptic Gregorian calendar arithmetic over years 1–9999: dates and
//! tick-based date-times, weekdays, ISO and culture-style week numbering,
//! configurable weekends and fiscal quarter systems.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Application-level calendar configuration.
pub mod config;

/// `Date` — a day number since 0001-01-01.
pub mod date;

/// `DateTime` — a date plus time of day in 100 ns ticks.
pub mod date_time;

/// ISO-8601 week dates.
pub mod iso_week;

/// `Month` — month of the year.
pub mod month;

/// Quarter and fiscal-year systems.
pub mod quarter;

/// `TimeUnit` — days, weeks, months, quarters, years.
pub mod time_unit;

/// Culture-style week-of-year numbering.
pub mod week_of_year;

/// `Weekday` — day of the week.
pub mod weekday;

/// Weekend definitions and workday navigation.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::CalendarConfig;
pub use date::{
    date_parts, day_number, day_of_week, days_in_month, is_leap_year, Date, MAX_YEAR, MIN_YEAR,
};
pub use date_time::DateTime;
pub use iso_week::{first_date_of_iso_week, iso_weeks_in_year, last_date_of_iso_week, IsoWeek};
pub use month::Month;
pub use quarter::{FiscalQuarter, QuarterAnchor, QuarterDefinition, QuarterKind, QuarterProvider};
pub use time_unit::TimeUnit;
pub use week_of_year::{week_of_year, WeekRule, WeekRuleConfig};
pub use weekday::Weekday;
pub use weekend::{WeekendDefinition, WeekendKind, WeekendProvider};
