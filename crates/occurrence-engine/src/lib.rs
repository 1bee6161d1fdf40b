//! # occurrence-engine
//!
//! Deterministic expansion of recurring meetings into concrete occurrences.
//!
//! Given a meeting's start instant, IANA timezone and recurrence rule (daily,
//! weekly on chosen weekdays, monthly by day-of-month or by nth weekday), the
//! engine produces the ordered list of occurrence start times, bounded by an
//! end instant, an occurrence count and the caller's limit. Wall-clock time is
//! preserved across DST transitions via `chrono-tz`.
//!
//! Calculation is a pure function with no I/O and no error path: degenerate
//! input yields an empty or partial list.
//!
//! ```rust
//! use chrono::{TimeZone, Utc, Weekday};
//! use occurrence_engine::{calculate, MeetingAnchor, RecurrenceRule};
//!
//! let meeting = MeetingAnchor::new(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(), "UTC", 30)
//!     .with_recurrence(RecurrenceRule::weekly(1, &[Weekday::Mon, Weekday::Wed]));
//!
//! let occurrences = calculate(&meeting, 4);
//! assert_eq!(occurrences.len(), 4);
//! assert_eq!(occurrences[1].start_time, Utc.with_ymd_and_hms(2024, 1, 17, 10, 0, 0).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: public facade (`calculate`, `calculate_from`)
//! - [`pattern`]: daily / weekly / monthly expanders
//! - [`bounds`]: end bound, `end_times` and limit resolution
//! - [`occurrence`]: output records and stable ids
//! - [`rule`] / [`meeting`]: input model
//! - [`weekday`]: 1=Sunday..7=Saturday ordinal conversion
//! - [`tz`] / [`dst`]: timezone fallback and DST gap policy
//! - [`error`]: validation errors

pub mod bounds;
pub mod dst;
pub mod engine;
pub mod error;
pub mod meeting;
pub mod occurrence;
pub mod pattern;
pub mod rule;
pub mod tz;
pub mod weekday;

pub use dst::DstPolicy;
pub use engine::{calculate, calculate_from, OccurrenceEngine};
pub use error::RuleError;
pub use meeting::MeetingAnchor;
pub use occurrence::Occurrence;
pub use pattern::{MAX_MONTH_ITERATIONS, MAX_WEEK_BLOCKS};
pub use rule::{RecurrenceRule, RecurrenceType};
