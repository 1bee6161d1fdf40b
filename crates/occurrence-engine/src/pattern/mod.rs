//! Pattern expanders: recurrence rule -> ascending stream of candidate instants.
//!
//! Each recurrence kind is one [`Pattern`] variant implementing [`Expander`].
//! Expanders know nothing about the reference date, end bound or limits; they
//! only produce raw candidates in strictly ascending order, and the
//! [`crate::bounds`] resolver decides which ones survive. Patterns that could
//! otherwise loop without producing anything useful carry an iteration cap.

pub mod daily;
pub mod monthly;
pub mod weekly;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::dst::{self, DstPolicy};
use crate::rule::{RecurrenceRule, RecurrenceType};

pub use daily::Daily;
pub use monthly::{Monthly, MonthlySelector, WeekOfMonth, MAX_MONTH_ITERATIONS};
pub use weekly::{Weekly, MAX_WEEK_BLOCKS};

/// Lazy, strictly ascending sequence of candidate start instants.
pub type Instants<'a> = Box<dyn Iterator<Item = DateTime<Utc>> + 'a>;

/// One recurrence kind's generation strategy.
pub trait Expander {
    /// Candidate instants derived from `anchor`, earliest first.
    fn instants<'a>(&'a self, anchor: &'a LocalAnchor) -> Instants<'a>;
}

/// Step indices `0..cap`, logging once if the caller drains all of them.
pub(crate) fn capped_steps(cap: u64, pattern: &'static str) -> impl Iterator<Item = u64> {
    (0..cap).chain(
        std::iter::once_with(move || {
            tracing::debug!(pattern, cap, "expansion reached iteration cap");
            None::<u64>
        })
        .flatten(),
    )
}

/// The meeting anchor expressed as wall-clock date and time in its zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalAnchor {
    pub tz: Tz,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub policy: DstPolicy,
}

impl LocalAnchor {
    pub fn new(start: DateTime<Utc>, tz: Tz, policy: DstPolicy) -> Self {
        let local = start.with_timezone(&tz).naive_local();
        Self {
            tz,
            date: local.date(),
            time: local.time(),
            policy,
        }
    }

    /// The anchor's wall-clock time on `date`, as a UTC instant.
    pub fn on(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        dst::localize(&self.tz, date.and_time(self.time), self.policy)
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// Tagged dispatch over the supported recurrence kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Daily(Daily),
    Weekly(Weekly),
    Monthly(Monthly),
}

impl Pattern {
    /// Build the pattern for a repeating rule.
    ///
    /// Returns `None` for `RecurrenceType::None` and
    /// `RecurrenceType::Unrecognized`; the facade handles both.
    pub fn from_rule(rule: &RecurrenceRule, anchor: &LocalAnchor) -> Option<Self> {
        let interval = rule.effective_interval();
        match rule.kind {
            RecurrenceType::Daily => Some(Pattern::Daily(Daily::new(interval))),
            RecurrenceType::Weekly => Some(Pattern::Weekly(Weekly::from_ordinals(
                interval,
                &rule.weekly_days,
                anchor.date.weekday(),
            ))),
            RecurrenceType::Monthly => Some(Pattern::Monthly(Monthly::new(
                interval,
                MonthlySelector::from_rule(rule, anchor.day()),
            ))),
            RecurrenceType::None | RecurrenceType::Unrecognized => None,
        }
    }
}

impl Expander for Pattern {
    fn instants<'a>(&'a self, anchor: &'a LocalAnchor) -> Instants<'a> {
        match self {
            Pattern::Daily(p) => p.instants(anchor),
            Pattern::Weekly(p) => p.instants(anchor),
            Pattern::Monthly(p) => p.instants(anchor),
        }
    }
}
