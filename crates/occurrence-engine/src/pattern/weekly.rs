//! Every N weeks on a set of weekdays.
//!
//! Weeks are Sunday-based. Iteration starts at the Sunday opening the calendar
//! week that contains the anchor, then jumps `interval` weeks per block. Inside
//! a block each configured weekday is reached by a forward offset from the
//! block start, so all candidates of a block stay inside that week.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::{capped_steps, Expander, Instants, LocalAnchor};
use crate::weekday;

/// Maximum number of week blocks examined for one expansion.
///
/// Guarantees termination when no candidate can satisfy the caller's limit
/// (e.g. every candidate is before the reference date). Reaching the cap
/// returns whatever was collected so far.
pub const MAX_WEEK_BLOCKS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weekly {
    interval: u32,
    /// Distinct weekdays, Sunday first.
    days: Vec<Weekday>,
}

impl Weekly {
    /// Build from explicit weekdays; an empty slice means `anchor_day` alone.
    pub fn new(interval: u32, days: &[Weekday], anchor_day: Weekday) -> Self {
        let mut days = if days.is_empty() {
            vec![anchor_day]
        } else {
            days.to_vec()
        };
        days.sort_by_key(|d| d.num_days_from_sunday());
        days.dedup();
        Self {
            interval: interval.max(1),
            days,
        }
    }

    /// Build from rule ordinals (`1 = Sunday` .. `7 = Saturday`).
    ///
    /// Ordinals outside `1..=7` are dropped with a warning. If nothing valid
    /// remains, the anchor's weekday is used.
    pub fn from_ordinals(interval: u32, ordinals: &[u8], anchor_day: Weekday) -> Self {
        let days: Vec<Weekday> = ordinals
            .iter()
            .filter_map(|&ordinal| {
                let day = weekday::from_ordinal(ordinal);
                if day.is_none() {
                    tracing::warn!(ordinal, "ignoring invalid weekly day ordinal");
                }
                day
            })
            .collect();
        Self::new(interval, &days, anchor_day)
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    fn block_start(&self, first_week: NaiveDate, block: u64) -> Option<NaiveDate> {
        let days = block
            .checked_mul(u64::from(self.interval))?
            .checked_mul(7)?;
        first_week.checked_add_days(Days::new(days))
    }
}

impl Expander for Weekly {
    fn instants<'a>(&'a self, anchor: &'a LocalAnchor) -> Instants<'a> {
        let back = u64::from(anchor.date.weekday().num_days_from_sunday());
        let Some(first_week) = anchor.date.checked_sub_days(Days::new(back)) else {
            return Box::new(std::iter::empty());
        };

        Box::new(
            capped_steps(MAX_WEEK_BLOCKS, "weekly")
                .map_while(move |block| self.block_start(first_week, block))
                .flat_map(move |start| {
                    self.days.iter().filter_map(move |&day| {
                        let offset = weekday::forward_offset(start.weekday(), day);
                        start.checked_add_days(Days::new(offset))
                    })
                })
                .filter_map(move |date| anchor.on(date)),
        )
    }
}
