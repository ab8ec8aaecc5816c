//! Culture-style week-of-year numbering.
//!
//! Unlike ISO weeks, these week numbers always belong to the calendar year
//! of the date (or, for the two "full week" rules, to the previous year's
//! last week when the date sits in a short leading stub).

use crate::date::Date;
use crate::weekday::Weekday;
use almanac_core::errors::{Error, Result};
use almanac_core::guard::check_defined;

/// Which partial week at the start of a year counts as week 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WeekRule {
    /// Week 1 is the week containing January 1, however short.
    #[default]
    FirstDay = 0,
    /// Week 1 is the first week lying entirely in the year.
    FirstFullWeek = 1,
    /// Week 1 is the first week with at least four days in the year.
    FirstFourDayWeek = 2,
}

impl WeekRule {
    /// Days a leading partial week needs to count as week 1.
    fn min_days(self) -> i32 {
        match self {
            WeekRule::FirstDay => 1,
            WeekRule::FirstFullWeek => 7,
            WeekRule::FirstFourDayWeek => 4,
        }
    }
}

impl TryFrom<u8> for WeekRule {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        let rule = match n {
            0 => Some(WeekRule::FirstDay),
            1 => Some(WeekRule::FirstFullWeek),
            2 => Some(WeekRule::FirstFourDayWeek),
            _ => None,
        };
        check_defined("week_rule", rule, n.into(), 2)
    }
}

/// A first-day-of-week plus numbering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeekRuleConfig {
    /// Day on which weeks start.
    pub first_day_of_week: Weekday,
    /// Numbering rule for the first week.
    pub rule: WeekRule,
}

impl WeekRuleConfig {
    /// Sunday-start weeks, week 1 contains January 1.
    pub const SUNDAY_FIRST_DAY: WeekRuleConfig = WeekRuleConfig {
        first_day_of_week: Weekday::Sunday,
        rule: WeekRule::FirstDay,
    };

    /// Monday-start weeks with the four-day rule, which numbers weeks like ISO
    /// within a calendar year.
    pub const MONDAY_FOUR_DAY: WeekRuleConfig = WeekRuleConfig {
        first_day_of_week: Weekday::Monday,
        rule: WeekRule::FirstFourDayWeek,
    };

    /// Week number of `date` under this configuration.
    pub fn week_of_year(&self, date: Date) -> u8 {
        week_of_year(date, self.rule, self.first_day_of_week)
    }
}

impl Default for WeekRuleConfig {
    fn default() -> Self {
        Self::SUNDAY_FIRST_DAY
    }
}

/// Week number (1–54) of `date` under `rule`, with weeks starting on
/// `first_day_of_week`.
///
/// # Example
/// ```
/// use almanac_time::{week_of_year, Date, WeekRule, Weekday};
/// let d = Date::from_ymd(2024, 12, 31).unwrap();
/// assert_eq!(week_of_year(d, WeekRule::FirstDay, Weekday::Sunday), 53);
/// ```
pub fn week_of_year(date: Date, rule: WeekRule, first_day_of_week: Weekday) -> u8 {
    match rule {
        WeekRule::FirstDay => first_day_week(date, first_day_of_week),
        WeekRule::FirstFullWeek | WeekRule::FirstFourDayWeek => {
            full_days_week(date, first_day_of_week, rule.min_days())
        }
    }
}

/// Weekday ordinal of January 1 of `date`'s year, plus the 0-based day of
/// year of `date`.
fn jan1_and_day_of_year(date: Date) -> (i32, i32) {
    let day_of_year = i32::from(date.day_of_year()) - 1;
    let weekday = i32::from(date.weekday().days_since_sunday());
    ((weekday - day_of_year % 7 + 7) % 7, day_of_year)
}

fn first_day_week(date: Date, first_day_of_week: Weekday) -> u8 {
    let (jan1, day_of_year) = jan1_and_day_of_year(date);
    // Days between the start of Jan 1's week and Jan 1 itself.
    let offset = (jan1 - i32::from(first_day_of_week.days_since_sunday()) + 14) % 7;
    ((day_of_year + offset) / 7 + 1) as u8
}

fn full_days_week(date: Date, first_day_of_week: Weekday, min_days: i32) -> u8 {
    let (jan1, day_of_year) = jan1_and_day_of_year(date);
    // Days from Jan 1 to the first week start on or after it.
    let mut offset = (i32::from(first_day_of_week.days_since_sunday()) - jan1 + 14) % 7;
    if offset != 0 && offset >= min_days {
        // The leading stub is long enough to be week 1.
        offset -= 7;
    }
    let day = day_of_year - offset;
    if day >= 0 {
        return (day / 7 + 1) as u8;
    }
    // Leading stub: the date belongs to the last week of the previous year.
    match date.add_days(-(day_of_year + 1)) {
        Ok(dec31) => full_days_week(dec31, first_day_of_week, min_days),
        Err(_) => {
            log::trace!("{date} precedes the first numbered week of year 1");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn first_day_2024_sunday_start() {
        let wk = |m, d| week_of_year(date(2024, m, d), WeekRule::FirstDay, Weekday::Sunday);
        assert_eq!(wk(1, 1), 1);
        assert_eq!(wk(1, 6), 1);
        assert_eq!(wk(1, 7), 2);
        assert_eq!(wk(12, 31), 53);
    }

    #[test]
    fn first_full_week_2022() {
        // 2022-01-01 is a Saturday: with Sunday starts, week 1 begins Jan 2.
        let wk = |y, m, d| week_of_year(date(y, m, d), WeekRule::FirstFullWeek, Weekday::Sunday);
        assert_eq!(wk(2022, 1, 1), wk(2021, 12, 31));
        assert_eq!(wk(2021, 12, 31), 52);
        assert_eq!(wk(2022, 1, 2), 1);
        assert_eq!(wk(2022, 1, 9), 2);
    }

    #[test]
    fn first_four_day_week_matches_iso_within_year() {
        let cfg = WeekRuleConfig::MONDAY_FOUR_DAY;
        for (y, m, d) in [(2020, 6, 15), (2024, 1, 1), (2015, 12, 31), (2026, 1, 1)] {
            let dt = date(y, m, d);
            assert_eq!(cfg.week_of_year(dt), dt.iso_week().week(), "{dt}");
        }
        // 2021-01-01 (Friday) falls in the last week of 2020.
        assert_eq!(cfg.week_of_year(date(2021, 1, 1)), 53);
    }

    #[test]
    fn year_one_stub_falls_back_to_week_one() {
        // 0001-01-01 is a Monday; with Tuesday starts it is a 1-day stub.
        let d = Date::MIN;
        assert_eq!(week_of_year(d, WeekRule::FirstFullWeek, Weekday::Tuesday), 1);
        assert_eq!(week_of_year(d, WeekRule::FirstFourDayWeek, Weekday::Tuesday), 1);
        assert_eq!(week_of_year(d, WeekRule::FirstDay, Weekday::Tuesday), 1);
    }

    #[test]
    fn rule_ordinals() {
        assert_eq!(WeekRule::try_from(2).unwrap(), WeekRule::FirstFourDayWeek);
        let err = WeekRule::try_from(3).unwrap_err();
        assert_eq!(err, Error::out_of_range("week_rule", 3, 0, 2));
    }

    #[test]
    fn default_config() {
        let cfg = WeekRuleConfig::default();
        assert_eq!(cfg.first_day_of_week, Weekday::Sunday);
        assert_eq!(cfg.rule, WeekRule::FirstDay);
    }
}
