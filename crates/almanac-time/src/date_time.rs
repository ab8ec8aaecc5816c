//! `DateTime` — a date plus time of day, stored as a tick count.
//!
//! A tick is 100 nanoseconds.  Tick 0 is midnight at the start of
//! 0001-01-01, so `ticks / TICKS_PER_DAY` is the [`Date`] day number and the
//! remainder is the time of day.

use crate::date::{Date, MAX_DAY_NUMBER};
use crate::weekday::Weekday;
use almanac_core::ensure_in_range;
use almanac_core::errors::{Error, Result};
use almanac_core::guard::check_in_range;

/// Ticks in one millisecond.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
/// Ticks in one second.
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1_000;
/// Ticks in one minute.
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
/// Ticks in one hour.
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
/// Ticks in one day.
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

/// The last tick of 9999-12-31.
pub const MAX_TICKS: i64 = (MAX_DAY_NUMBER as i64 + 1) * TICKS_PER_DAY - 1;

/// Day number of 1970-01-01.
const UNIX_EPOCH_DAYS: i64 = 719_162;

/// A point in time with 100 ns resolution, no time zone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateTime(i64);

impl DateTime {
    /// 0001-01-01T00:00:00.
    pub const MIN: DateTime = DateTime(0);

    /// 9999-12-31T23:59:59.9999999.
    pub const MAX: DateTime = DateTime(MAX_TICKS);

    /// 1970-01-01T00:00:00.
    pub const UNIX_EPOCH: DateTime = DateTime(UNIX_EPOCH_DAYS * TICKS_PER_DAY);

    /// Create from a raw tick count.
    pub fn from_ticks(ticks: i64) -> Result<Self> {
        check_in_range("ticks", ticks, 0, MAX_TICKS)?;
        Ok(DateTime(ticks))
    }

    /// Create from a date and a wall-clock time.
    pub fn new(date: Date, hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self> {
        ensure_in_range!(hour, 0, 23);
        ensure_in_range!(minute, 0, 59);
        ensure_in_range!(second, 0, 59);
        ensure_in_range!(millisecond, 0, 999);
        let time = i64::from(hour) * TICKS_PER_HOUR
            + i64::from(minute) * TICKS_PER_MINUTE
            + i64::from(second) * TICKS_PER_SECOND
            + i64::from(millisecond) * TICKS_PER_MILLISECOND;
        Ok(DateTime(i64::from(date.day_number()) * TICKS_PER_DAY + time))
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: Date) -> Self {
        DateTime(i64::from(date.day_number()) * TICKS_PER_DAY)
    }

    /// Create from seconds since 1970-01-01T00:00:00.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self> {
        let min = -UNIX_EPOCH_DAYS * 86_400;
        let max = MAX_TICKS / TICKS_PER_SECOND - UNIX_EPOCH_DAYS * 86_400;
        check_in_range("seconds", seconds, min, max)?;
        Ok(DateTime((seconds + UNIX_EPOCH_DAYS * 86_400) * TICKS_PER_SECOND))
    }

    /// Return the raw tick count.
    pub fn ticks(self) -> i64 {
        self.0
    }

    /// The calendar date.
    pub fn date(self) -> Date {
        Date::from_day_number_unchecked((self.0 / TICKS_PER_DAY) as i32)
    }

    /// Ticks elapsed since midnight.
    pub fn time_of_day(self) -> i64 {
        self.0 % TICKS_PER_DAY
    }

    /// The weekday of the date.
    pub fn weekday(self) -> Weekday {
        self.date().weekday()
    }

    /// Hour (0–23).
    pub fn hour(self) -> u8 {
        (self.time_of_day() / TICKS_PER_HOUR) as u8
    }

    /// Minute (0–59).
    pub fn minute(self) -> u8 {
        (self.0 / TICKS_PER_MINUTE % 60) as u8
    }

    /// Second (0–59).
    pub fn second(self) -> u8 {
        (self.0 / TICKS_PER_SECOND % 60) as u8
    }

    /// Millisecond (0–999).
    pub fn millisecond(self) -> u16 {
        (self.0 / TICKS_PER_MILLISECOND % 1_000) as u16
    }

    /// Whole seconds since 1970-01-01T00:00:00, rounded toward negative
    /// infinity.
    pub fn unix_seconds(self) -> i64 {
        self.0.div_euclid(TICKS_PER_SECOND) - UNIX_EPOCH_DAYS * 86_400
    }

    /// Add a (possibly negative) number of ticks.
    pub fn add_ticks(self, ticks: i64) -> Result<Self> {
        let target = self
            .0
            .checked_add(ticks)
            .ok_or_else(|| Error::InvalidArgument(format!("{self} + {ticks} ticks overflows")))?;
        Self::from_ticks(target)
    }

    /// Add a (possibly negative) number of days, keeping the time of day.
    pub fn add_days(self, days: i32) -> Result<Self> {
        self.add_ticks(i64::from(days) * TICKS_PER_DAY)
    }

    /// Ticks elapsed from `earlier` to `self` (negative if `earlier` is later).
    pub fn ticks_since(self, earlier: DateTime) -> i64 {
        self.0 - earlier.0
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        DateTime::at_midnight(date)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let frac = self.0 % TICKS_PER_SECOND;
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date(),
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if frac != 0 {
            write!(f, ".{frac:07}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateTime({self})")
    }
}
