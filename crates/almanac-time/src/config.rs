//! Calendar configuration.
//!
//! [`CalendarConfig`] is a plain value bundling the week, weekend and quarter
//! choices an application makes once.  Custom rules cannot be serialised, so
//! the config stores kinds and resolves them into definitions on demand.

use crate::date::Date;
use crate::quarter::{QuarterDefinition, QuarterKind, QuarterProvider};
use crate::week_of_year::WeekRuleConfig;
use crate::weekend::{WeekendDefinition, WeekendKind, WeekendProvider};
use almanac_core::errors::Result;
use std::sync::Arc;

/// Application-level calendar choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarConfig {
    /// Week-of-year numbering.
    pub week: WeekRuleConfig,
    /// Weekend selector.
    pub weekend: WeekendKind,
    /// Quarter system selector.
    pub quarter: QuarterKind,
    /// `MMDD` anchor, used when `quarter` is `Anchored`.
    pub quarter_anchor: Option<u16>,
}

impl CalendarConfig {
    /// Resolve the weekend selector.
    ///
    /// `provider` is required when the selector is `Custom`.
    pub fn weekend_definition(
        &self,
        provider: Option<Arc<dyn WeekendProvider>>,
    ) -> Result<WeekendDefinition> {
        WeekendDefinition::from_kind(self.weekend, provider)
    }

    /// Resolve the quarter selector.
    ///
    /// `provider` is required when the selector is `Custom`.
    pub fn quarter_definition(
        &self,
        provider: Option<Arc<dyn QuarterProvider>>,
    ) -> Result<QuarterDefinition> {
        QuarterDefinition::from_kind(self.quarter, self.quarter_anchor, provider)
    }

    /// Week number of `date` under the configured week rule.
    pub fn week_of_year(&self, date: Date) -> u8 {
        self.week.week_of_year(date)
    }
}
