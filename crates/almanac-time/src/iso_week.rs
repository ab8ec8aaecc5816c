//! ISO-8601 week dates.
//!
//! ISO weeks start on Monday and week 1 is the week containing January 4
//! (equivalently, the first week with a Thursday).  The ISO year of a date is
//! the calendar year of the Thursday in its week, so the first and last few
//! days of a calendar year can belong to a neighbouring ISO year.

use crate::date::{day_number_unchecked, weekday_of, Date, MAX_YEAR, MIN_YEAR};
use crate::weekday::Weekday;
use almanac_core::errors::Result;
use almanac_core::guard::check_in_range;
use std::fmt;

/// An ISO-8601 (year, week) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeek {
    year: u16,
    week: u8,
}

impl IsoWeek {
    /// Create an ISO week, validating `week` against the length of `year`.
    pub fn new(year: u16, week: u8) -> Result<Self> {
        let weeks = iso_weeks_in_year(year)?;
        check_in_range("week", week, 1, weeks)?;
        Ok(Self { year, week })
    }

    /// The ISO year, which may differ from the calendar year.
    pub fn year(self) -> u16 {
        self.year
    }

    /// The week number, 1–53.
    pub fn week(self) -> u8 {
        self.week
    }

    /// Monday of this week.
    pub fn first_day(self) -> Result<Date> {
        first_date_of_iso_week(self.year, self.week)
    }

    /// Sunday of this week.
    pub fn last_day(self) -> Result<Date> {
        last_date_of_iso_week(self.year, self.week)
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl Date {
    /// The ISO week containing this date.
    ///
    /// # Example
    /// ```
    /// use almanac_time::Date;
    /// let d = Date::from_ymd(2021, 1, 3).unwrap();
    /// assert_eq!(d.iso_week().to_string(), "2020-W53");
    /// ```
    pub fn iso_week(self) -> IsoWeek {
        let thursday = Date::from_day_number_unchecked(thursday_of_week(self.day_number()));
        IsoWeek {
            year: thursday.year(),
            week: ((thursday.day_of_year() - 1) / 7 + 1) as u8,
        }
    }

    /// The ISO year of this date.
    pub fn iso_year(self) -> u16 {
        Date::from_day_number_unchecked(thursday_of_week(self.day_number())).year()
    }
}

/// Number of ISO weeks (52 or 53) in `year`.
///
/// A year has 53 weeks when it starts or ends on a Thursday.
pub fn iso_weeks_in_year(year: u16) -> Result<u8> {
    check_in_range("year", year, MIN_YEAR, MAX_YEAR)?;
    let y = i32::from(year);
    if dec31_weekday(y) == 4 || dec31_weekday(y - 1) == 3 {
        Ok(53)
    } else {
        Ok(52)
    }
}

/// Monday of ISO week `week` of ISO year `year`.
pub fn first_date_of_iso_week(year: u16, week: u8) -> Result<Date> {
    week_monday(year, week).and_then(Date::from_day_number)
}

/// Sunday of ISO week `week` of ISO year `year`.
pub fn last_date_of_iso_week(year: u16, week: u8) -> Result<Date> {
    week_monday(year, week).and_then(|monday| Date::from_day_number(monday + 6))
}

fn week_monday(year: u16, week: u8) -> Result<i32> {
    check_in_range("week", week, 1, iso_weeks_in_year(year)?)?;
    let jan4 = day_number_unchecked(year, 1, 4);
    let monday = jan4 - i32::from(weekday_of(jan4).iso_number()) + 1;
    Ok(monday + (i32::from(week) - 1) * 7)
}

/// Day number of the Thursday in the ISO week containing `day_number`.
fn thursday_of_week(day_number: i32) -> i32 {
    let iso = i32::from(weekday_of(day_number).iso_number());
    day_number + i32::from(Weekday::Thursday.iso_number()) - iso
}

/// Weekday ordinal (0 = Sunday) of December 31 of `year`.
fn dec31_weekday(year: i32) -> i32 {
    (year + year / 4 - year / 100 + year / 400) % 7
}
