//! Every N months, on a day-of-month or on the nth weekday of the month.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{capped_steps, Expander, Instants, LocalAnchor};
use crate::rule::RecurrenceRule;
use crate::weekday;

/// Maximum number of months examined for one expansion.
///
/// Same contract as [`super::MAX_WEEK_BLOCKS`]: expansion always terminates,
/// and hitting the cap returns the partial result.
pub const MAX_MONTH_ITERATIONS: u64 = 1000;

/// Which week of the month an nth-weekday selector targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOfMonth {
    /// 1st through 4th.
    Nth(u8),
    Last,
}

impl WeekOfMonth {
    /// Decode the rule encoding: `1..=4`, or `-1` for the last week.
    pub fn from_ordinal(week: i32) -> Option<Self> {
        match week {
            1..=4 => Some(WeekOfMonth::Nth(week as u8)),
            -1 => Some(WeekOfMonth::Last),
            _ => None,
        }
    }
}

/// Day selection within each target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlySelector {
    /// Fixed day-of-month, clamped down to the month's last day.
    DayOfMonth(u32),
    NthWeekday { week: WeekOfMonth, weekday: Weekday },
}

impl MonthlySelector {
    /// Pick the selector a rule asks for.
    ///
    /// `monthly_day` wins over the week/weekday pair. Out-of-range values are
    /// ignored (with a warning) and the anchor's own day-of-month is used.
    pub fn from_rule(rule: &RecurrenceRule, anchor_day: u32) -> Self {
        if let Some(day) = rule.monthly_day {
            if (1..=31).contains(&day) {
                return MonthlySelector::DayOfMonth(day);
            }
            tracing::warn!(day, "ignoring out-of-range monthly day");
        }

        if let (Some(week), Some(ordinal)) = (rule.monthly_week, rule.monthly_week_day) {
            match (WeekOfMonth::from_ordinal(week), weekday::from_ordinal(ordinal)) {
                (Some(week), Some(weekday)) => {
                    return MonthlySelector::NthWeekday { week, weekday };
                }
                _ => tracing::warn!(
                    week,
                    ordinal,
                    "ignoring malformed monthly weekday selector"
                ),
            }
        }

        MonthlySelector::DayOfMonth(anchor_day)
    }

    /// The selected date in `year`/`month`, if that month has one.
    pub fn resolve(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = last_day_of_month(first)?;
        match *self {
            MonthlySelector::DayOfMonth(day) => first.with_day(day.clamp(1, last.day())),
            MonthlySelector::NthWeekday {
                week: WeekOfMonth::Nth(n),
                weekday,
            } => {
                let offset = weekday::forward_offset(first.weekday(), weekday)
                    + 7 * u64::from(n.saturating_sub(1));
                first
                    .checked_add_days(Days::new(offset))
                    .filter(|date| date.month() == month)
            }
            MonthlySelector::NthWeekday {
                week: WeekOfMonth::Last,
                weekday,
            } => {
                let back = weekday::forward_offset(weekday, last.weekday());
                last.checked_sub_days(Days::new(back))
            }
        }
    }
}

/// Last calendar day of the month `first` belongs to.
pub fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if first.month() == 12 {
        (first.year().checked_add(1)?, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monthly {
    interval: u32,
    selector: MonthlySelector,
}

impl Monthly {
    pub fn new(interval: u32, selector: MonthlySelector) -> Self {
        Self {
            interval: interval.max(1),
            selector,
        }
    }

    pub fn selector(&self) -> MonthlySelector {
        self.selector
    }

    /// (year, month) reached after `count` repetitions from the anchor month.
    fn target_month(&self, anchor: &LocalAnchor, count: u64) -> Option<(i32, u32)> {
        let base = i64::from(anchor.date.year()) * 12 + i64::from(anchor.date.month0());
        let step = i64::try_from(count.checked_mul(u64::from(self.interval))?).ok()?;
        let index = base.checked_add(step)?;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month0 = u32::try_from(index.rem_euclid(12)).ok()?;
        Some((year, month0 + 1))
    }
}

impl Expander for Monthly {
    fn instants<'a>(&'a self, anchor: &'a LocalAnchor) -> Instants<'a> {
        Box::new(
            capped_steps(MAX_MONTH_ITERATIONS, "monthly")
                .map_while(move |count| self.target_month(anchor, count))
                .filter_map(move |(year, month)| self.selector.resolve(year, month))
                .filter_map(move |date| anchor.on(date)),
        )
    }
}
