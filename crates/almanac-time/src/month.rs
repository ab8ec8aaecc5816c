//! `Month` — month of the year, numbered 1–12.

use crate::date::{month_length, MAX_YEAR, MIN_YEAR};
use almanac_core::errors::{Error, Result};
use almanac_core::guard::check_in_range;
use std::str::FromStr;

/// Month of the year (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// All months, January first.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month numbered `n`, or `None` outside 1–12.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The 1-based month number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The month `n` months after this one, wrapping around December.
    pub fn plus(self, n: i32) -> Self {
        Self::ALL[(self as i32 - 1 + n).rem_euclid(12) as usize]
    }

    /// Calendar quarter (1–4) this month falls in.
    pub fn calendar_quarter(self) -> u8 {
        (self as u8 - 1) / 3 + 1
    }

    /// Number of days in this month of `year`.
    pub fn days_in(self, year: u16) -> Result<u8> {
        check_in_range("year", year, MIN_YEAR, MAX_YEAR)?;
        Ok(month_length(year, self as u8))
    }

    /// Three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Full English name.
    pub fn long_name(self) -> &'static str {
        NAMES[self as usize - 1]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parse a full or three-letter English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| s.eq_ignore_ascii_case(m.long_name()) || s.eq_ignore_ascii_case(m.short_name()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown month `{s}`")))
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Self::from_number(n).ok_or_else(|| Error::out_of_range("month", n.into(), 1, 12))
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}
