//! `TimeUnit` — calendar units accepted by [`Date::advance`](crate::Date::advance).

use almanac_core::errors::{Error, Result};
use std::str::FromStr;

/// A calendar unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Seven days.
    Weeks,
    /// Calendar months, clamping the day of month.
    Months,
    /// Three calendar months.
    Quarters,
    /// Twelve calendar months.
    Years,
}

impl TimeUnit {
    /// One-letter tenor suffix (`D`, `W`, `M`, `Q`, `Y`).
    pub fn suffix(self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Quarters => 'Q',
            TimeUnit::Years => 'Y',
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Quarters => "quarters",
            TimeUnit::Years => "years",
        };
        f.write_str(name)
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    /// Accepts the tenor suffix or the plural name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        [
            TimeUnit::Days,
            TimeUnit::Weeks,
            TimeUnit::Months,
            TimeUnit::Quarters,
            TimeUnit::Years,
        ]
        .into_iter()
        .find(|u| {
            s.eq_ignore_ascii_case(&u.to_string())
                || s.len() == 1 && s.eq_ignore_ascii_case(u.suffix().encode_utf8(&mut [0; 4]))
        })
        .ok_or_else(|| Error::InvalidArgument(format!("unknown time unit `{s}`")))
    }
}
