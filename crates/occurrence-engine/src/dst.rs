//! DST transition policies for recurring meetings.
//!
//! Occurrences keep the anchor's wall-clock time in the meeting's timezone, so
//! the UTC offset moves with daylight saving. Two local times need a decision:
//! those that fall in a spring-forward gap (they do not exist) and those that
//! fall in a fall-back overlap (they exist twice).

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Policy for wall-clock times that fall inside a DST gap.
///
/// Overlapping (ambiguous) times always resolve to the earlier instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DstPolicy {
    /// Interpret the missing time with the offset in force before the gap
    /// (e.g., 02:30 during spring forward becomes 03:30).
    #[default]
    ShiftForward,
    /// Drop candidates whose wall-clock time does not exist.
    Skip,
}

/// Localize a wall-clock time in `tz` and convert it to UTC.
///
/// Returns `None` only when the time falls in a DST gap and the policy is
/// [`DstPolicy::Skip`].
pub fn localize(tz: &Tz, local: NaiveDateTime, policy: DstPolicy) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => match policy {
            DstPolicy::Skip => None,
            DstPolicy::ShiftForward => shift_forward(tz, local),
        },
    }
}

/// Resolve a gap time with the pre-transition offset.
///
/// Real-world gaps are at most a couple of hours, so stepping back three hours
/// lands on a valid local time that still carries the old offset; adding the
/// same span back in absolute time gives the shifted instant.
fn shift_forward(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    let lookback = Duration::hours(3);
    let before = local.checked_sub_signed(lookback)?;
    tz.from_local_datetime(&before)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc) + lookback)
}
