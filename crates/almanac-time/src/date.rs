//! `Date` type and the day-number arithmetic everything else is built on.
//!
//! A date is stored as a day number counted from 0001-01-01 of the proleptic
//! Gregorian calendar, which is day 0.  The valid range is 0001-01-01 to
//! 9999-12-31.
//!
//! Conversion between day numbers and (year, month, day) is closed form: the
//! day count is split into 400-, 100-, 4- and 1-year blocks and the month is
//! found in a cumulative days-to-month table.  No loops over years, no
//! allocation.

use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use almanac_core::errors::{Error, Result};
use almanac_core::guard::check_in_range;
use std::str::FromStr;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Earliest supported year.
pub const MIN_YEAR: u16 = 1;

/// Latest supported year.
pub const MAX_YEAR: u16 = 9999;

const DAYS_PER_YEAR: i32 = 365;
const DAYS_PER_4_YEARS: i32 = DAYS_PER_YEAR * 4 + 1;
const DAYS_PER_100_YEARS: i32 = DAYS_PER_4_YEARS * 25 - 1;
const DAYS_PER_400_YEARS: i32 = DAYS_PER_100_YEARS * 4 + 1;

/// Day number of 9999-12-31.
pub(crate) const MAX_DAY_NUMBER: i32 = DAYS_PER_400_YEARS * 25 - 367;

/// Cumulative days before each month, non-leap year (index 0 = January).
const DAYS_TO_MONTH_365: [i32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Cumulative days before each month, leap year.
const DAYS_TO_MONTH_366: [i32; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// A calendar date represented as a day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// 0001-01-01.
    pub const MIN: Date = Date(0);

    /// 9999-12-31.
    pub const MAX: Date = Date(MAX_DAY_NUMBER);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a day number (0 = 0001-01-01).
    pub fn from_day_number(n: i32) -> Result<Self> {
        check_in_range("day_number", n, 0, MAX_DAY_NUMBER)?;
        Ok(Date(n))
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    ///
    /// # Example
    /// ```
    /// use almanac_time::Date;
    /// assert!(Date::from_ymd(2000, 2, 29).is_ok());
    /// assert!(Date::from_ymd(1900, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        day_number(year, month, day).map(Date)
    }

    pub(crate) fn from_day_number_unchecked(n: i32) -> Self {
        debug_assert!((0..=MAX_DAY_NUMBER).contains(&n), "invalid day number {n}");
        Date(n)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the day number (days since 0001-01-01).
    pub fn day_number(self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(self) -> (u16, u8, u8) {
        let (y, m, d, _) = decompose(self.0);
        (y, m, d)
    }

    /// Return the year (1–9999).
    pub fn year(self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(self) -> u8 {
        self.ymd().1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(self) -> Month {
        Month::ALL[usize::from(self.month()) - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day(self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(self) -> u16 {
        decompose(self.0).3
    }

    /// Return the weekday.
    pub fn weekday(self) -> Weekday {
        weekday_of(self.0)
    }

    /// Whether this date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year())
    }

    /// Number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        let (y, m, _) = self.ymd();
        month_length(y, m)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let target = self.0.checked_add(n).ok_or_else(|| {
            Error::out_of_range(
                "day_number",
                i64::from(self.0) + i64::from(n),
                0,
                MAX_DAY_NUMBER.into(),
            )
        })?;
        Self::from_day_number(target)
    }

    /// Advance by `n` units.
    ///
    /// Month, quarter and year steps keep the day of month, clamped to the
    /// length of the target month (Jan 31 + 1 month = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n.saturating_mul(7)),
            TimeUnit::Months => self.add_months(n),
            TimeUnit::Quarters => self.add_months(n.saturating_mul(3)),
            TimeUnit::Years => self.add_months(n.saturating_mul(12)),
        }
    }

    fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let total = i64::from(y) * 12 + i64::from(m) - 1 + i64::from(n);
        let new_y = total.div_euclid(12);
        if new_y < i64::from(MIN_YEAR) || new_y > i64::from(MAX_YEAR) {
            return Err(Error::out_of_range(
                "year",
                new_y,
                MIN_YEAR.into(),
                MAX_YEAR.into(),
            ));
        }
        let new_y = new_y as u16;
        let new_m = total.rem_euclid(12) as u8 + 1;
        let new_d = d.min(month_length(new_y, new_m));
        Ok(Date(day_number_unchecked(new_y, new_m, new_d)))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Month / year boundaries ───────────────────────────────────────────────

    /// First day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        Date(self.0 - i32::from(self.day()) + 1)
    }

    /// Last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, d) = self.ymd();
        Date(self.0 + i32::from(month_length(y, m) - d))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// January 1 of this date's year.
    pub fn start_of_year(self) -> Self {
        Date(self.0 - i32::from(self.day_of_year()) + 1)
    }

    /// December 31 of this date's year.
    pub fn end_of_year(self) -> Self {
        Date(day_number_unchecked(self.year(), 12, 31))
    }

    // ── Weekday resolution ────────────────────────────────────────────────────

    /// The closest date falling on `weekday`; `self` if it already does.
    ///
    /// The search window is three days back to three days forward.
    pub fn nearest_day_of_week(self, weekday: Weekday) -> Result<Self> {
        let mut delta = self.weekday().days_until(weekday) as i32;
        if delta > 3 {
            delta -= 7;
        }
        self.add_days(delta)
    }

    /// The first date strictly after `self` that falls on `weekday`.
    pub fn next_day_of_week(self, weekday: Weekday) -> Result<Self> {
        let delta = match self.weekday().days_until(weekday) {
            0 => 7,
            d => d as i32,
        };
        self.add_days(delta)
    }

    /// The last date strictly before `self` that falls on `weekday`.
    pub fn previous_day_of_week(self, weekday: Weekday) -> Result<Self> {
        let delta = match weekday.days_until(self.weekday()) {
            0 => 7,
            d => d as i32,
        };
        self.add_days(-delta)
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// Returns an error if `year`/`month` are invalid or if `n` is zero or
    /// larger than the number of such weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        check_in_range("n", n, 1, 5)?;
        let first = Date::from_ymd(year, month, 1)?;
        let skip = first.weekday().days_until(weekday);
        let day = 1 + skip + 7 * (n - 1);
        let last = month_length(year, month);
        if day > last {
            return Err(Error::InvalidArgument(format!(
                "there is no {n}-th {weekday} in {year:04}-{month:02}"
            )));
        }
        Ok(Date(first.0 + i32::from(day) - 1))
    }

    /// The first `weekday` of the given month.
    pub fn first_weekday_in_month(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        Self::nth_weekday(1, weekday, year, month)
    }

    /// The last `weekday` of the given month.
    pub fn last_weekday_in_month(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, 1)?.end_of_month();
        let back = weekday.days_until(last.weekday());
        Ok(Date(last.0 - i32::from(back)))
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing / display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`, digits only).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument(format!("cannot parse `{s}` as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let mut field = |width: usize| {
            parts
                .next()
                .filter(|p| p.len() == width && p.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|p| p.parse::<u16>().ok())
                .ok_or_else(|| invalid())
        };
        let year = field(4)?;
        let month = field(2)? as u8;
        let day = field(2)? as u8;
        Date::from_ymd(year, month, day)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Day-number arithmetic ─────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: u16, month: u8) -> Result<u8> {
    check_in_range("year", year, MIN_YEAR, MAX_YEAR)?;
    check_in_range("month", month, 1, 12)?;
    Ok(month_length(year, month))
}

/// Convert (year, month, day) to a day number (0 = 0001-01-01).
pub fn day_number(year: u16, month: u8, day: u8) -> Result<i32> {
    check_in_range("year", year, MIN_YEAR, MAX_YEAR)?;
    check_in_range("month", month, 1, 12)?;
    check_in_range("day", day, 1, month_length(year, month))?;
    Ok(day_number_unchecked(year, month, day))
}

/// Decompose a day number into (year, month, day).
pub fn date_parts(day_number: i32) -> Result<(u16, u8, u8)> {
    Date::from_day_number(day_number).map(Date::ymd)
}

/// Weekday of a day number.
pub fn day_of_week(day_number: i32) -> Result<Weekday> {
    check_in_range("day_number", day_number, 0, MAX_DAY_NUMBER)?;
    Ok(weekday_of(day_number))
}

pub(crate) fn weekday_of(day_number: i32) -> Weekday {
    // 0001-01-01 is a Monday.
    Weekday::ALL[((day_number + 1) % 7) as usize]
}

fn month_table(leap: bool) -> &'static [i32; 13] {
    if leap {
        &DAYS_TO_MONTH_366
    } else {
        &DAYS_TO_MONTH_365
    }
}

pub(crate) fn month_length(year: u16, month: u8) -> u8 {
    let t = month_table(is_leap_year(year));
    (t[month as usize] - t[month as usize - 1]) as u8
}

pub(crate) fn day_number_unchecked(year: u16, month: u8, day: u8) -> i32 {
    let t = month_table(is_leap_year(year));
    let y = i32::from(year) - 1;
    y * 365 + y / 4 - y / 100 + y / 400 + t[month as usize - 1] + i32::from(day) - 1
}

/// Split a day number into (year, month, day, day-of-year).
fn decompose(day_number: i32) -> (u16, u8, u8, u16) {
    let mut n = day_number;
    let y400 = n / DAYS_PER_400_YEARS;
    n -= y400 * DAYS_PER_400_YEARS;
    // The last day of a 400-year block would yield 4; it belongs to block 3.
    let y100 = (n / DAYS_PER_100_YEARS).min(3);
    n -= y100 * DAYS_PER_100_YEARS;
    let y4 = n / DAYS_PER_4_YEARS;
    n -= y4 * DAYS_PER_4_YEARS;
    let y1 = (n / DAYS_PER_YEAR).min(3);
    n -= y1 * DAYS_PER_YEAR;

    let year = y400 * 400 + y100 * 100 + y4 * 4 + y1 + 1;
    let leap = y1 == 3 && (y4 != 24 || y100 == 3);
    let t = month_table(leap);
    // n / 32 never overshoots the month; walk forward from there.
    let mut m = (n >> 5) as usize + 1;
    while n >= t[m] {
        m += 1;
    }
    let day = n - t[m - 1] + 1;
    (year as u16, m as u8, day as u8, (n + 1) as u16)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1, 1, 1).day_number(), 0);
        assert_eq!(date(1, 1, 1), Date::MIN);
        assert_eq!(date(9999, 12, 31), Date::MAX);
        assert_eq!(Date::MAX.day_number(), 3_652_058);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1, 12, 31),
            (4, 12, 31),
            (100, 12, 31),
            (400, 12, 31),
            (1900, 2, 28),
            (2000, 2, 29),
            (2100, 2, 28),
            (2023, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = date(y, m, d);
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_known_day_numbers() {
        // 1970-01-01 is 719,162 days after 0001-01-01.
        assert_eq!(day_number(1970, 1, 1), Ok(719_162));
        assert_eq!(date_parts(719_162), Ok((1970, 1, 1)));
    }

    #[test]
    fn test_leap_years() {
        assert!(day_number(2000, 2, 29).is_ok());
        assert!(day_number(1900, 2, 29).unwrap_err().is_out_of_range());
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2100));
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
        assert_eq!(date(2023, 12, 31).day_of_year(), 365);
    }

    #[test]
    fn test_invalid_components() {
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(10000, 1, 1).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 4, 0).is_err());
        assert!(Date::from_day_number(-1).is_err());
        assert!(Date::from_day_number(3_652_059).is_err());
        assert!(days_in_month(2024, 0).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Date::MIN.weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(date(9999, 12, 31).weekday(), Weekday::Friday);
        assert_eq!(day_of_week(719_162), Ok(Weekday::Thursday));
        assert!(day_of_week(-1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_add_days_bounds() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MIN.add_days(i32::MAX).is_err());
        assert_eq!(date(2023, 1, 31).add_days(1).unwrap(), date(2023, 2, 1));
    }

    #[test]
    fn test_advance_months() {
        let d = date(2023, 1, 31);
        assert_eq!(d.advance(1, TimeUnit::Months).unwrap(), date(2023, 2, 28));
        assert_eq!(d.advance(13, TimeUnit::Months).unwrap(), date(2024, 2, 29));
        assert_eq!(d.advance(-1, TimeUnit::Months).unwrap(), date(2022, 12, 31));
        assert_eq!(d.advance(1, TimeUnit::Quarters).unwrap(), date(2023, 4, 30));
        assert_eq!(d.advance(2, TimeUnit::Weeks).unwrap(), date(2023, 2, 14));
        assert!(date(9999, 6, 1).advance(1, TimeUnit::Years).is_err());
    }

    #[test]
    fn test_month_and_year_boundaries() {
        let d = date(2024, 2, 15);
        assert_eq!(d.start_of_month(), date(2024, 2, 1));
        assert_eq!(d.end_of_month(), date(2024, 2, 29));
        assert!(date(2024, 2, 29).is_end_of_month());
        assert_eq!(d.start_of_year(), date(2024, 1, 1));
        assert_eq!(d.end_of_year(), date(2024, 12, 31));
        assert_eq!(d.days_in_month(), 29);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(d.days_between(date(2022, 12, 25)), -7);
    }

    #[test]
    fn test_day_of_week_search() {
        let wed = date(2024, 5, 15);
        assert_eq!(wed.next_day_of_week(Weekday::Wednesday).unwrap(), date(2024, 5, 22));
        assert_eq!(wed.next_day_of_week(Weekday::Friday).unwrap(), date(2024, 5, 17));
        assert_eq!(wed.previous_day_of_week(Weekday::Wednesday).unwrap(), date(2024, 5, 8));
        assert_eq!(wed.previous_day_of_week(Weekday::Monday).unwrap(), date(2024, 5, 13));
        assert_eq!(wed.nearest_day_of_week(Weekday::Wednesday).unwrap(), wed);
        assert_eq!(wed.nearest_day_of_week(Weekday::Saturday).unwrap(), date(2024, 5, 18));
        assert_eq!(wed.nearest_day_of_week(Weekday::Sunday).unwrap(), date(2024, 5, 12));
        assert!(Date::MAX.next_day_of_week(Weekday::Monday).is_err());
    }

    #[test]
    fn test_nth_weekday() {
        assert_eq!(
            Date::nth_weekday(3, Weekday::Wednesday, 2024, 3).unwrap(),
            date(2024, 3, 20)
        );
        assert_eq!(
            Date::first_weekday_in_month(Weekday::Monday, 2024, 1).unwrap(),
            date(2024, 1, 1)
        );
        assert_eq!(
            Date::nth_weekday(5, Weekday::Monday, 2024, 1).unwrap(),
            date(2024, 1, 29)
        );
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_last_weekday_in_month() {
        assert_eq!(
            Date::last_weekday_in_month(Weekday::Friday, 2024, 5).unwrap(),
            date(2024, 5, 31)
        );
        assert_eq!(
            Date::last_weekday_in_month(Weekday::Monday, 2024, 5).unwrap(),
            date(2024, 5, 27)
        );
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2024-03-09".parse().unwrap();
        assert_eq!(d, date(2024, 3, 9));
        assert_eq!(d.to_string(), "2024-03-09");
        assert_eq!(format!("{:?}", date(7, 1, 2)), "Date(0007-01-02)");
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!(matches!("2024/01/01".parse::<Date>(), Err(Error::InvalidArgument(_))));
        assert!("+2024-+1-+1".parse::<Date>().is_err());
        assert!("2024-01-+1".parse::<Date>().is_err());
        assert!("2024-1-01".parse::<Date>().is_err());
        assert!("2024-01-".parse::<Date>().is_err());
        assert_eq!(" 0007-01-02 ".parse::<Date>().unwrap(), date(7, 1, 2));
    }

    #[test]
    fn test_month_of_year() {
        assert_eq!(date(2024, 1, 31).month_of_year(), Month::January);
        assert_eq!(date(2024, 12, 1).month_of_year(), Month::December);
        assert_eq!(Date::MIN.month_of_year(), Month::January);
        assert_eq!(Date::MAX.month_of_year(), Month::December);
    }
}
