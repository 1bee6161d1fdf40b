//! Declarative recurrence rules attached to a meeting.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};
use crate::weekday;

/// How a meeting repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    /// The meeting happens once, at its anchor.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    /// Any type value this engine does not understand.
    ///
    /// Expands to no occurrences at all rather than to the single anchor.
    #[serde(other)]
    Unrecognized,
}

/// A recurrence rule in the encoding used by stored meeting records.
///
/// Weekday ordinals are 1-based starting on Sunday (`1 = Sunday` ..
/// `7 = Saturday`); see [`crate::weekday`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceRule {
    #[serde(rename = "type")]
    pub kind: RecurrenceType,
    /// Days, weeks or months between repetitions depending on `kind`.
    pub repeat_interval: u32,
    /// Weekly only. Empty means the anchor's own weekday.
    pub weekly_days: Vec<u8>,
    /// Monthly by day-of-month (1..=31), clamped to short months.
    pub monthly_day: Option<u32>,
    /// Monthly by nth weekday: 1..=4, or -1 for the last one.
    pub monthly_week: Option<i32>,
    /// Weekday ordinal paired with `monthly_week`.
    pub monthly_week_day: Option<u8>,
    /// Exclusive upper bound on generated start times.
    pub end_date_time: Option<DateTime<Utc>>,
    /// Maximum number of occurrences returned; zero means unbounded.
    pub end_times: Option<u32>,
}

impl RecurrenceRule {
    /// Every `interval` days.
    pub fn daily(interval: u32) -> Self {
        Self {
            kind: RecurrenceType::Daily,
            repeat_interval: interval,
            ..Self::default()
        }
    }

    /// Every `interval` weeks on the given weekdays (empty = anchor's weekday).
    pub fn weekly(interval: u32, days: &[Weekday]) -> Self {
        Self {
            kind: RecurrenceType::Weekly,
            repeat_interval: interval,
            weekly_days: days.iter().copied().map(weekday::to_ordinal).collect(),
            ..Self::default()
        }
    }

    /// Every `interval` months on day `day`, clamped to the month's length.
    pub fn monthly_by_day(interval: u32, day: u32) -> Self {
        Self {
            kind: RecurrenceType::Monthly,
            repeat_interval: interval,
            monthly_day: Some(day),
            ..Self::default()
        }
    }

    /// Every `interval` months on the `week`-th `day` (`week == -1` for the last).
    pub fn monthly_by_weekday(interval: u32, week: i32, day: Weekday) -> Self {
        Self {
            kind: RecurrenceType::Monthly,
            repeat_interval: interval,
            monthly_week: Some(week),
            monthly_week_day: Some(weekday::to_ordinal(day)),
            ..Self::default()
        }
    }

    /// Stop generating at `end` (exclusive).
    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end_date_time = Some(end);
        self
    }

    /// Return at most `times` occurrences.
    pub fn times(mut self, times: u32) -> Self {
        self.end_times = Some(times);
        self
    }

    /// Interval actually used for expansion. A zero interval is treated as 1.
    pub fn effective_interval(&self) -> u32 {
        self.repeat_interval.max(1)
    }

    /// The `end_times` cap, if one is in force.
    pub fn max_occurrences(&self) -> Option<usize> {
        self.end_times
            .filter(|&times| times > 0)
            .map(|times| times as usize)
    }

    /// Check the rule for values the engine would otherwise ignore or clamp.
    ///
    /// # Errors
    /// Returns the first problem found, in field order.
    pub fn validate(&self) -> Result<()> {
        if self.kind == RecurrenceType::Unrecognized {
            return Err(RuleError::UnrecognizedType);
        }
        if self.kind == RecurrenceType::None {
            return Ok(());
        }
        if self.repeat_interval == 0 {
            return Err(RuleError::InvalidInterval(self.repeat_interval));
        }

        if self.kind == RecurrenceType::Weekly {
            if let Some(&bad) = self
                .weekly_days
                .iter()
                .find(|&&d| weekday::from_ordinal(d).is_none())
            {
                return Err(RuleError::InvalidWeekday(bad));
            }
        }

        if self.kind == RecurrenceType::Monthly {
            if let Some(day) = self.monthly_day {
                if !(1..=31).contains(&day) {
                    return Err(RuleError::InvalidMonthlyDay(day));
                }
            }
            match (self.monthly_week, self.monthly_week_day) {
                (None, None) => {}
                (Some(week), Some(day)) => {
                    if self.monthly_day.is_some() {
                        return Err(RuleError::ConflictingMonthlyModes);
                    }
                    if !matches!(week, 1..=4 | -1) {
                        return Err(RuleError::InvalidMonthlyWeek(week));
                    }
                    if weekday::from_ordinal(day).is_none() {
                        return Err(RuleError::InvalidWeekday(day));
                    }
                }
                _ => return Err(RuleError::IncompleteMonthlyWeekday),
            }
        }

        Ok(())
    }
}
