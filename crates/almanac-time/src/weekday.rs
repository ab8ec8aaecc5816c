//! `Weekday` — day-of-week enum.

use almanac_core::errors::{Error, Result};
use almanac_core::guard::check_defined;

/// Day of the week.
///
/// Variants are numbered 0–6 starting from Sunday, so that
/// `(day_number + 1) % 7` of a [`Date`](crate::Date) is the ordinal directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the ordinal (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_days_since_sunday(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the ordinal (0 = Sunday … 6 = Saturday).
    pub fn days_since_sunday(self) -> u8 {
        self as u8
    }

    /// Return the ISO-8601 number (1 = Monday … 7 = Sunday).
    pub fn iso_number(self) -> u8 {
        match self {
            Weekday::Sunday => 7,
            other => other as u8,
        }
    }

    /// The following day.
    pub fn succ(self) -> Self {
        Self::ALL[(self as usize + 1) % 7]
    }

    /// The preceding day.
    pub fn pred(self) -> Self {
        Self::ALL[(self as usize + 6) % 7]
    }

    /// Number of days (0–6) from `self` forward to the next `other`.
    ///
    /// `Monday.days_until(Monday) == 0`, `Saturday.days_until(Monday) == 2`.
    pub fn days_until(self, other: Weekday) -> u8 {
        (other as u8 + 7 - self as u8) % 7
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        check_defined("weekday", Self::from_days_since_sunday(n), n.into(), 6)
    }
}

impl From<Weekday> for u8 {
    fn from(w: Weekday) -> u8 {
        w as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{name}")
    }
}
