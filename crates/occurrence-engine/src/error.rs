//! Error types for recurrence rule validation.
//!
//! Occurrence calculation itself never fails: degenerate input maps to an empty
//! or partial result. These errors are only produced by the explicit
//! validation entry points ([`crate::RecurrenceRule::validate`],
//! [`crate::MeetingAnchor::validate`], [`crate::tz::parse_timezone`]).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid repeat interval: {0} (must be at least 1)")]
    InvalidInterval(u32),

    #[error("Invalid weekday ordinal: {0} (expected 1=Sunday through 7=Saturday)")]
    InvalidWeekday(u8),

    #[error("Invalid monthly day: {0} (expected 1 through 31)")]
    InvalidMonthlyDay(u32),

    #[error("Invalid monthly week: {0} (expected 1, 2, 3, 4 or -1)")]
    InvalidMonthlyWeek(i32),

    #[error("Monthly week and monthly weekday must be set together")]
    IncompleteMonthlyWeekday,

    #[error("Monthly day and monthly week/weekday are mutually exclusive")]
    ConflictingMonthlyModes,

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("End date-time must be after the meeting start time")]
    EndBeforeStart,

    #[error("Unrecognized recurrence type")]
    UnrecognizedType,
}

pub type Result<T> = std::result::Result<T, RuleError>;
