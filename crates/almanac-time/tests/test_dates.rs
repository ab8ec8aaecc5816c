//! Integration tests for `Date`, `DateTime`, and the free calendar functions.

use std::collections::HashSet;

use almanac_time::date::{date_parts, day_number, days_in_month, is_leap_year};
use almanac_time::{Date, DateTime, Month, TimeUnit, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Full-range consistency ───────────────────────────────────────────────────

#[test]
fn test_consistency() {
    // Walk every day from 0001-01-02 to 9999-12-31 and check each step.
    let prev = Date::MIN;
    let mut dy_old = i32::from(prev.day_of_year());
    let (mut y_old, mut m_old, mut d_old) = prev.ymd();
    let mut wd_old = prev.weekday();

    for i in 1..=Date::MAX.day_number() {
        let t = Date::from_day_number(i).unwrap();
        assert_eq!(t.day_number(), i, "inconsistent day number for {t}");

        let dy = i32::from(t.day_of_year());
        assert!(
            (dy == dy_old + 1)
                || (dy == 1 && dy_old == 365 && !is_leap_year(y_old))
                || (dy == 1 && dy_old == 366 && is_leap_year(y_old)),
            "wrong day of year increment: date={t}, dy={dy}, prev={dy_old}"
        );
        dy_old = dy;

        let (y, m, d) = t.ymd();
        assert!(
            (d == d_old + 1 && m == m_old && y == y_old)
                || (d == 1 && m == m_old + 1 && y == y_old)
                || (d == 1 && m == 1 && y == y_old + 1),
            "wrong day/month/year increment: date={t}, prev={y_old}-{m_old}-{d_old}"
        );
        (y_old, m_old, d_old) = (y, m, d);

        assert!(d >= 1 && d <= days_in_month(y, m).unwrap(), "invalid day: {t}");

        let wd = t.weekday();
        assert_eq!(wd, wd_old.succ(), "invalid weekday increment at {t}");
        wd_old = wd;

        assert_eq!(day_number(y, m, d).unwrap(), i, "round trip failed for {t}");
    }
}

#[test]
fn range_limits() {
    assert_eq!(Date::MIN.ymd(), (1, 1, 1));
    assert_eq!(Date::MAX.ymd(), (9999, 12, 31));
    assert_eq!(Date::MAX.day_number(), 3_652_058);
    assert_eq!(Date::MIN.weekday(), Weekday::Monday);
    assert!(Date::from_day_number(-1).unwrap_err().is_out_of_range());
    assert!(Date::from_day_number(3_652_059).unwrap_err().is_out_of_range());
    assert!(date_parts(3_652_059).is_err());
    assert!(Date::from_ymd(0, 1, 1).is_err());
    assert!(Date::from_ymd(2023, 2, 29).is_err());
    assert!(Date::from_ymd(2023, 13, 1).is_err());
}

// ─── Hash test ────────────────────────────────────────────────────────────────

#[test]
fn can_hash() {
    let start = date(2020, 1, 1);
    let set: HashSet<Date> = (0..500).map(|i| start.add_days(i).unwrap()).collect();
    assert_eq!(set.len(), 500);
    assert!(set.contains(&date(2020, 6, 1)));
    assert!(!set.contains(&date(2019, 12, 31)));
}

// ─── Parsing and display ──────────────────────────────────────────────────────

#[test]
fn iso_dates() {
    let d: Date = "2006-01-15".parse().unwrap();
    assert_eq!(d, date(2006, 1, 15));
    assert_eq!(d.to_string(), "2006-01-15");
    assert_eq!(date(7, 3, 9).to_string(), "0007-03-09");
    assert!("2006-02-30".parse::<Date>().is_err());
    assert!("2006/01/15".parse::<Date>().is_err());
    assert!("".parse::<Date>().is_err());
}

// ─── Leap year tests ─────────────────────────────────────────────────────────

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2004));
    assert!(!is_leap_year(2001));
    assert!(is_leap_year(2400));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(days_in_month(2100, 2).unwrap(), 28);
}

// ─── End of month tests ──────────────────────────────────────────────────────

#[test]
fn end_of_month() {
    assert!(date(2024, 2, 29).is_end_of_month());
    assert!(!date(2024, 2, 28).is_end_of_month());
    assert!(date(2023, 2, 28).is_end_of_month());
    assert!(date(2023, 12, 31).is_end_of_month());
    assert_eq!(date(2023, 4, 10).end_of_month(), date(2023, 4, 30));
    assert_eq!(date(2023, 4, 10).start_of_month(), date(2023, 4, 1));
}

// ─── Date arithmetic tests ──────────────────────────────────────────────────

#[test]
fn date_arithmetic() {
    let d = date(2024, 1, 15);
    let d2 = d.add_days(10).unwrap();
    assert_eq!(d2, date(2024, 1, 25));
    let d3 = d.add_days(-15).unwrap();
    assert_eq!(d3, date(2023, 12, 31));
    assert_eq!(d2 - d3, 25);
    assert_eq!(d3.days_between(d2), 25);

    assert_eq!(date(2024, 1, 31).advance(1, TimeUnit::Months).unwrap(), date(2024, 2, 29));
    assert_eq!(date(2024, 2, 29).advance(1, TimeUnit::Years).unwrap(), date(2025, 2, 28));
    assert_eq!(date(2024, 11, 30).advance(1, TimeUnit::Quarters).unwrap(), date(2025, 2, 28));
    assert!(Date::MAX.advance(1, TimeUnit::Days).is_err());
}

// ─── Weekday tests ──────────────────────────────────────────────────────────

#[test]
fn weekday_consistency() {
    assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 1, 7).weekday(), Weekday::Sunday);
    assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
}

#[test]
fn weekday_in_month() {
    let third_wed = Date::nth_weekday(3, Weekday::Wednesday, 2024, 3).unwrap();
    assert_eq!(third_wed, date(2024, 3, 20));
    assert!(Date::nth_weekday(5, Weekday::Monday, 2024, 2).is_err());
    assert_eq!(
        Date::last_weekday_in_month(Weekday::Monday, 2024, 5).unwrap(),
        date(2024, 5, 27)
    );
    assert_eq!(date(2024, 5, 27).month_of_year(), Month::May);
}

// ─── DateTime ─────────────────────────────────────────────────────────────────

#[test]
fn date_time_round_trip() {
    let d = date(2000, 2, 29);
    let dt = DateTime::new(d, 6, 30, 0, 0).unwrap();
    assert_eq!(dt.date(), d);
    assert_eq!(DateTime::from(d).ticks() % 864_000_000_000, 0);
    assert_eq!(DateTime::from_ticks(dt.ticks()).unwrap(), dt);
}
