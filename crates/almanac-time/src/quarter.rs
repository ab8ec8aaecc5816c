//! Quarter definitions: calendar quarters, anchored fiscal quarters, and
//! caller-supplied quarter systems.
//!
//! A standard quarter system is fully described by its [`QuarterAnchor`],
//! the (month, day) on which fiscal Q1 begins.  Each later quarter begins
//! three months after the previous one on the same day of month (clamped to
//! the length of short months).  A fiscal year is named after the calendar
//! year in which its Q1 begins.

use crate::date::{day_number_unchecked, month_length, Date, MAX_YEAR, MIN_YEAR};
use crate::month::Month;
use almanac_core::errors::{Error, Result};
use almanac_core::guard::{check_in_range, require};
use std::fmt;
use std::sync::Arc;

// ── Anchor ────────────────────────────────────────────────────────────────────

/// The (month, day) on which fiscal Q1 begins.
///
/// Encoded compactly as `month * 100 + day`, e.g. `406` for April 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuarterAnchor {
    month: Month,
    day: u8,
}

impl QuarterAnchor {
    /// January 1 — calendar quarters.
    pub const CALENDAR: QuarterAnchor = QuarterAnchor {
        month: Month::January,
        day: 1,
    };

    /// Create an anchor.  `day` must exist in `month` of a leap year.
    pub fn new(month: Month, day: u8) -> Result<Self> {
        // 2000 is a leap year, so February 29 is accepted.
        check_in_range("day", day, 1, month_length(2000, month.number()))?;
        Ok(Self { month, day })
    }

    /// Decode from the `MMDD` form (`month * 100 + day`).
    ///
    /// # Example
    /// ```
    /// use almanac_time::quarter::QuarterAnchor;
    /// let a = QuarterAnchor::from_code(406).unwrap();
    /// assert_eq!(a.month().number(), 4);
    /// assert_eq!(a.day(), 6);
    /// assert!(QuarterAnchor::from_code(1301).is_err());
    /// ```
    pub fn from_code(code: u16) -> Result<Self> {
        check_in_range("code", code, 101, 1231)?;
        let month = Month::try_from((code / 100) as u8)?;
        Self::new(month, (code % 100) as u8)
    }

    /// Encode as `month * 100 + day`.
    pub fn code(self) -> u16 {
        u16::from(self.month.number()) * 100 + u16::from(self.day)
    }

    /// Month in which Q1 begins.
    pub fn month(self) -> Month {
        self.month
    }

    /// Day of month on which Q1 begins.
    pub fn day(self) -> u8 {
        self.day
    }

    fn start_month(self, quarter: u8) -> u8 {
        self.month.plus(3 * (i32::from(quarter) - 1)).number()
    }

    /// (calendar year, month, day) on which `quarter` of `fiscal_year` begins.
    ///
    /// The year may fall outside the supported range; callers check.
    fn start_parts(self, fiscal_year: i32, quarter: u8) -> (i32, u8, u8) {
        let month = self.start_month(quarter);
        let year = if month < self.month.number() {
            fiscal_year.saturating_add(1)
        } else {
            fiscal_year
        };
        let len = month_length(year.clamp(0, i32::from(u16::MAX)) as u16, month);
        (year, month, self.day.min(len))
    }

    fn quarter_of(self, date: Date) -> u8 {
        let (y, m, d) = date.ymd();
        let offset = (m + 12 - self.month.number()) % 12;
        let mut quarter = offset / 3 + 1;
        if m == self.start_month(quarter) && d < self.day.min(month_length(y, m)) {
            quarter = if quarter == 1 { 4 } else { quarter - 1 };
        }
        quarter
    }

    fn fiscal_quarter_of(self, date: Date) -> FiscalQuarter {
        let quarter = self.quarter_of(date);
        let (y, m, d) = date.ymd();
        let mut fiscal_year = i32::from(y);
        if self.start_parts(fiscal_year, quarter) > (fiscal_year, m, d) {
            fiscal_year -= 1;
        }
        FiscalQuarter {
            fiscal_year,
            quarter,
        }
    }

    fn quarter_start(self, fiscal_year: i32, quarter: u8) -> Result<Date> {
        let (year, month, day) = self.start_parts(fiscal_year, quarter);
        let year = check_in_range("year", year, MIN_YEAR.into(), MAX_YEAR.into())?;
        Date::from_ymd(year as u16, month, day)
    }

    /// Day before the next quarter starts.  The next start may lie in year
    /// 10000 when the quarter ends on the last supported day.
    fn quarter_end(self, fiscal_year: i32, quarter: u8) -> Result<Date> {
        let next = FiscalQuarter {
            fiscal_year,
            quarter,
        }
        .next();
        let (year, month, day) = self.start_parts(next.fiscal_year, next.quarter);
        let year = check_in_range("year", year, MIN_YEAR.into(), i32::from(MAX_YEAR) + 1)?;
        Date::from_day_number(day_number_unchecked(year as u16, month, day) - 1)
    }
}

impl fmt::Display for QuarterAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.short_name(), self.day)
    }
}

// ── Fiscal quarter ────────────────────────────────────────────────────────────

/// A quarter of a named fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalQuarter {
    /// The calendar year in which the fiscal year's Q1 begins.
    pub fiscal_year: i32,
    /// Quarter number, 1–4.
    pub quarter: u8,
}

impl FiscalQuarter {
    /// The quarter that follows this one.
    pub fn next(self) -> Self {
        if self.quarter == 4 {
            Self {
                fiscal_year: self.fiscal_year + 1,
                quarter: 1,
            }
        } else {
            Self {
                fiscal_year: self.fiscal_year,
                quarter: self.quarter + 1,
            }
        }
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{} Q{}", self.fiscal_year, self.quarter)
    }
}

// ── Provider ──────────────────────────────────────────────────────────────────

/// A caller-supplied quarter system.
///
/// Used through [`QuarterDefinition::Custom`] when no anchor describes the
/// quarters (e.g. 4-4-5 retail calendars).
pub trait QuarterProvider: fmt::Debug + Send + Sync {
    /// Quarter number (1–4) containing `date`.
    fn quarter(&self, date: Date) -> u8;

    /// First day of `quarter` in `fiscal_year`.
    fn quarter_start(&self, fiscal_year: i32, quarter: u8) -> Result<Date>;

    /// Last day of `quarter` in `fiscal_year`.
    ///
    /// Defaults to the day before the next quarter starts.  A provider whose
    /// last quarter ends on 9999-12-31 has no next start to derive it from
    /// and must override this.
    fn quarter_end(&self, fiscal_year: i32, quarter: u8) -> Result<Date> {
        let next = FiscalQuarter {
            fiscal_year,
            quarter,
        }
        .next();
        self.quarter_start(next.fiscal_year, next.quarter)?
            .add_days(-1)
    }
}

// ── Definition ────────────────────────────────────────────────────────────────

/// Serialisable selector for a [`QuarterDefinition`].
///
/// `Anchored` and `Custom` need extra data supplied at resolution time; see
/// [`QuarterDefinition::from_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuarterKind {
    /// Quarters start Jan 1, Apr 1, Jul 1, Oct 1.
    #[default]
    Calendar,
    /// Fiscal year starting April 1.
    FiscalApril,
    /// Fiscal year starting July 1.
    FiscalJuly,
    /// Fiscal year starting October 1.
    FiscalOctober,
    /// UK tax year, starting April 6.
    UkTaxYear,
    /// Fiscal year starting on an arbitrary anchor.
    Anchored,
    /// Caller-supplied quarter system.
    Custom,
}

/// How a year is divided into quarters.
#[derive(Debug, Clone, Default)]
pub enum QuarterDefinition {
    /// Quarters start Jan 1, Apr 1, Jul 1, Oct 1.
    #[default]
    Calendar,
    /// Fiscal year starting April 1.
    FiscalApril,
    /// Fiscal year starting July 1.
    FiscalJuly,
    /// Fiscal year starting October 1.
    FiscalOctober,
    /// UK tax year, starting April 6.
    UkTaxYear,
    /// Fiscal year starting on an arbitrary anchor.
    Anchored(QuarterAnchor),
    /// Caller-supplied quarter system.
    Custom(Arc<dyn QuarterProvider>),
}

impl QuarterDefinition {
    /// Resolve a [`QuarterKind`].
    ///
    /// `anchor_code` (`MMDD`) is required for `Anchored`; `provider` is
    /// required for `Custom`.  Both are ignored otherwise.
    pub fn from_kind(
        kind: QuarterKind,
        anchor_code: Option<u16>,
        provider: Option<Arc<dyn QuarterProvider>>,
    ) -> Result<Self> {
        Ok(match kind {
            QuarterKind::Calendar => QuarterDefinition::Calendar,
            QuarterKind::FiscalApril => QuarterDefinition::FiscalApril,
            QuarterKind::FiscalJuly => QuarterDefinition::FiscalJuly,
            QuarterKind::FiscalOctober => QuarterDefinition::FiscalOctober,
            QuarterKind::UkTaxYear => QuarterDefinition::UkTaxYear,
            QuarterKind::Anchored => {
                let code = require("anchor_code", anchor_code)?;
                QuarterDefinition::Anchored(QuarterAnchor::from_code(code)?)
            }
            QuarterKind::Custom => {
                let provider = provider.ok_or_else(|| {
                    Error::MissingCapability(
                        "custom quarter definition requires a QuarterProvider".into(),
                    )
                })?;
                QuarterDefinition::Custom(provider)
            }
        })
    }

    /// The selector this definition was built from.
    pub fn kind(&self) -> QuarterKind {
        match self {
            QuarterDefinition::Calendar => QuarterKind::Calendar,
            QuarterDefinition::FiscalApril => QuarterKind::FiscalApril,
            QuarterDefinition::FiscalJuly => QuarterKind::FiscalJuly,
            QuarterDefinition::FiscalOctober => QuarterKind::FiscalOctober,
            QuarterDefinition::UkTaxYear => QuarterKind::UkTaxYear,
            QuarterDefinition::Anchored(_) => QuarterKind::Anchored,
            QuarterDefinition::Custom(_) => QuarterKind::Custom,
        }
    }

    /// The anchor, or `None` for a custom provider.
    pub fn anchor(&self) -> Option<QuarterAnchor> {
        let (month, day) = match self {
            QuarterDefinition::Calendar => (Month::January, 1),
            QuarterDefinition::FiscalApril => (Month::April, 1),
            QuarterDefinition::FiscalJuly => (Month::July, 1),
            QuarterDefinition::FiscalOctober => (Month::October, 1),
            QuarterDefinition::UkTaxYear => (Month::April, 6),
            QuarterDefinition::Anchored(a) => return Some(*a),
            QuarterDefinition::Custom(_) => return None,
        };
        Some(QuarterAnchor { month, day })
    }

    /// Quarter number (1–4) containing `date`.
    pub fn quarter(&self, date: Date) -> Result<u8> {
        match self {
            QuarterDefinition::Custom(provider) => provider_quarter(provider.as_ref(), date),
            _ => Ok(self.anchor_or_calendar().quarter_of(date)),
        }
    }

    /// Fiscal year and quarter containing `date`.
    ///
    /// # Example
    /// ```
    /// use almanac_time::quarter::{QuarterAnchor, QuarterDefinition};
    /// use almanac_time::Date;
    ///
    /// let tax_year = QuarterDefinition::Anchored(QuarterAnchor::from_code(406).unwrap());
    /// let fq = tax_year
    ///     .fiscal_quarter(Date::from_ymd(2024, 4, 5).unwrap())
    ///     .unwrap();
    /// assert_eq!((fq.fiscal_year, fq.quarter), (2023, 4));
    /// ```
    pub fn fiscal_quarter(&self, date: Date) -> Result<FiscalQuarter> {
        match self {
            QuarterDefinition::Custom(provider) => {
                let quarter = provider_quarter(provider.as_ref(), date)?;
                let mut fiscal_year = i32::from(date.year());
                if provider.quarter_start(fiscal_year, quarter)? > date {
                    fiscal_year -= 1;
                }
                Ok(FiscalQuarter {
                    fiscal_year,
                    quarter,
                })
            }
            _ => Ok(self.anchor_or_calendar().fiscal_quarter_of(date)),
        }
    }

    /// First day of `quarter` in `fiscal_year`.
    pub fn quarter_start(&self, fiscal_year: i32, quarter: u8) -> Result<Date> {
        check_in_range("quarter", quarter, 1, 4)?;
        match self {
            QuarterDefinition::Custom(provider) => provider.quarter_start(fiscal_year, quarter),
            _ => self.anchor_or_calendar().quarter_start(fiscal_year, quarter),
        }
    }

    /// Last day of `quarter` in `fiscal_year`.
    pub fn quarter_end(&self, fiscal_year: i32, quarter: u8) -> Result<Date> {
        check_in_range("quarter", quarter, 1, 4)?;
        match self {
            QuarterDefinition::Custom(provider) => provider.quarter_end(fiscal_year, quarter),
            _ => self.anchor_or_calendar().quarter_end(fiscal_year, quarter),
        }
    }

    /// First day of the quarter containing `date`.
    pub fn start_of_quarter(&self, date: Date) -> Result<Date> {
        let fq = self.fiscal_quarter(date)?;
        self.quarter_start(fq.fiscal_year, fq.quarter)
    }

    /// Last day of the quarter containing `date`.
    pub fn end_of_quarter(&self, date: Date) -> Result<Date> {
        let fq = self.fiscal_quarter(date)?;
        self.quarter_end(fq.fiscal_year, fq.quarter)
    }

    fn anchor_or_calendar(&self) -> QuarterAnchor {
        self.anchor().unwrap_or(QuarterAnchor::CALENDAR)
    }
}

fn provider_quarter(provider: &dyn QuarterProvider, date: Date) -> Result<u8> {
    log::trace!("resolving quarter of {date} through {provider:?}");
    check_in_range("quarter", provider.quarter(date), 1, 4)
}
