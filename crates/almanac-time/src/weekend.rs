//! Weekend definitions and workday navigation.
//!
//! Which days form the weekend varies by region.  [`WeekendDefinition`]
//! covers the common fixed patterns and accepts a caller-supplied
//! [`WeekendProvider`] for anything else.

use crate::date::Date;
use crate::weekday::Weekday;
use almanac_core::ensure;
use almanac_core::errors::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// A caller-supplied weekend rule.
pub trait WeekendProvider: fmt::Debug + Send + Sync {
    /// Whether `weekday` is a weekend day.
    fn is_weekend(&self, weekday: Weekday) -> bool;

    /// The day on which a week starts.
    ///
    /// Defaults to the first working day that follows a weekend day,
    /// scanning from Monday; Monday if no such day exists.
    fn week_start_day(&self) -> Weekday {
        let mut day = Weekday::Monday;
        for _ in 0..7 {
            if !self.is_weekend(day) && self.is_weekend(day.pred()) {
                return day;
            }
            day = day.succ();
        }
        Weekday::Monday
    }
}

/// Serialisable selector for a [`WeekendDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeekendKind {
    /// Saturday and Sunday.
    #[default]
    SaturdaySunday,
    /// Friday and Saturday.
    FridaySaturday,
    /// Thursday and Friday.
    ThursdayFriday,
    /// Friday only.
    FridayOnly,
    /// Sunday only.
    SundayOnly,
    /// No weekend.
    None,
    /// Caller-supplied rule.
    Custom,
}

/// Which weekdays form the weekend.
#[derive(Debug, Clone, Default)]
pub enum WeekendDefinition {
    /// Saturday and Sunday.
    #[default]
    SaturdaySunday,
    /// Friday and Saturday.
    FridaySaturday,
    /// Thursday and Friday.
    ThursdayFriday,
    /// Friday only.
    FridayOnly,
    /// Sunday only.
    SundayOnly,
    /// No weekend.
    None,
    /// Caller-supplied rule.
    Custom(Arc<dyn WeekendProvider>),
}

impl WeekendDefinition {
    /// Resolve a [`WeekendKind`]; `provider` is required for `Custom`.
    ///
    /// # Example
    /// ```
    /// use almanac_time::weekend::{WeekendDefinition, WeekendKind};
    /// assert!(WeekendDefinition::from_kind(WeekendKind::Custom, None).is_err());
    /// ```
    pub fn from_kind(kind: WeekendKind, provider: Option<Arc<dyn WeekendProvider>>) -> Result<Self> {
        Ok(match kind {
            WeekendKind::SaturdaySunday => WeekendDefinition::SaturdaySunday,
            WeekendKind::FridaySaturday => WeekendDefinition::FridaySaturday,
            WeekendKind::ThursdayFriday => WeekendDefinition::ThursdayFriday,
            WeekendKind::FridayOnly => WeekendDefinition::FridayOnly,
            WeekendKind::SundayOnly => WeekendDefinition::SundayOnly,
            WeekendKind::None => WeekendDefinition::None,
            WeekendKind::Custom => {
                let provider = provider.ok_or_else(|| {
                    Error::MissingCapability(
                        "custom weekend definition requires a WeekendProvider".into(),
                    )
                })?;
                WeekendDefinition::Custom(provider)
            }
        })
    }

    /// The selector this definition was built from.
    pub fn kind(&self) -> WeekendKind {
        match self {
            WeekendDefinition::SaturdaySunday => WeekendKind::SaturdaySunday,
            WeekendDefinition::FridaySaturday => WeekendKind::FridaySaturday,
            WeekendDefinition::ThursdayFriday => WeekendKind::ThursdayFriday,
            WeekendDefinition::FridayOnly => WeekendKind::FridayOnly,
            WeekendDefinition::SundayOnly => WeekendKind::SundayOnly,
            WeekendDefinition::None => WeekendKind::None,
            WeekendDefinition::Custom(_) => WeekendKind::Custom,
        }
    }

    /// Whether `weekday` is a weekend day.
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        use Weekday::*;
        match self {
            WeekendDefinition::SaturdaySunday => matches!(weekday, Saturday | Sunday),
            WeekendDefinition::FridaySaturday => matches!(weekday, Friday | Saturday),
            WeekendDefinition::ThursdayFriday => matches!(weekday, Thursday | Friday),
            WeekendDefinition::FridayOnly => weekday == Friday,
            WeekendDefinition::SundayOnly => weekday == Sunday,
            WeekendDefinition::None => false,
            WeekendDefinition::Custom(provider) => provider.is_weekend(weekday),
        }
    }

    /// Whether `weekday` is a working day.
    pub fn is_weekday(&self, weekday: Weekday) -> bool {
        !self.is_weekend(weekday)
    }

    /// The day on which a week starts under this definition.
    pub fn week_start_day(&self) -> Weekday {
        match self {
            WeekendDefinition::SaturdaySunday
            | WeekendDefinition::SundayOnly
            | WeekendDefinition::None => Weekday::Monday,
            WeekendDefinition::FridaySaturday => Weekday::Sunday,
            WeekendDefinition::ThursdayFriday | WeekendDefinition::FridayOnly => {
                Weekday::Saturday
            }
            WeekendDefinition::Custom(provider) => {
                log::trace!("week start taken from {provider:?}");
                provider.week_start_day()
            }
        }
    }

    /// Number of weekend days in a week.
    pub fn weekend_days(&self) -> usize {
        Weekday::ALL.iter().filter(|w| self.is_weekend(**w)).count()
    }

    /// The first working day strictly after `date`.
    pub fn next_workday(&self, date: Date) -> Result<Date> {
        self.step_to_workday(date, 1)
    }

    /// The last working day strictly before `date`.
    pub fn previous_workday(&self, date: Date) -> Result<Date> {
        self.step_to_workday(date, -1)
    }

    /// The start of the week containing `date`.
    pub fn start_of_week(&self, date: Date) -> Result<Date> {
        let back = self.week_start_day().days_until(date.weekday());
        date.add_days(-i32::from(back))
    }

    /// The last day of the week containing `date`.
    pub fn end_of_week(&self, date: Date) -> Result<Date> {
        self.start_of_week(date)?.add_days(6)
    }

    fn step_to_workday(&self, date: Date, step: i32) -> Result<Date> {
        ensure!(
            self.weekend_days() < 7,
            "weekend definition {:?} has no working days",
            self.kind()
        );
        let mut d = date.add_days(step)?;
        while self.is_weekend(d.weekday()) {
            d = d.add_days(step)?;
        }
        Ok(d)
    }
}

impl Date {
    /// Whether this date falls on a weekend under `definition`.
    pub fn is_weekend(self, definition: &WeekendDefinition) -> bool {
        definition.is_weekend(self.weekday())
    }

    /// Whether this date is a working day under `definition`.
    pub fn is_weekday(self, definition: &WeekendDefinition) -> bool {
        definition.is_weekday(self.weekday())
    }
}
