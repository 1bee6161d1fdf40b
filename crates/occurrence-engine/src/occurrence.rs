//! Concrete occurrences materialized from candidate instants.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::meeting::MeetingAnchor;

/// One scheduled instance of a (possibly recurring) meeting.
///
/// Built fresh on every calculation; never carries a recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Stable key for this instance: the start instant's Unix seconds.
    pub occurrence_id: String,
    pub start_time: DateTime<Utc>,
    /// Duration in minutes.
    pub duration: u32,
    pub title: String,
    pub description: String,
    pub registrant_count: u32,
    pub response_count: u32,
    /// Always `false` here; cancellations are tracked elsewhere.
    pub is_cancelled: bool,
}

impl Occurrence {
    /// Materialize the occurrence of `meeting` starting at `start`.
    pub fn materialize(meeting: &MeetingAnchor, start: DateTime<Utc>) -> Self {
        Self {
            occurrence_id: occurrence_id(start),
            start_time: start,
            duration: meeting.duration,
            title: meeting.title.clone(),
            description: meeting.description.clone(),
            registrant_count: meeting.registrant_count,
            response_count: meeting.response_count,
            is_cancelled: false,
        }
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(i64::from(self.duration))
    }
}

/// Deterministic identifier for the occurrence starting at `start`.
///
/// Identical instants always give identical ids, so ids stay valid across
/// recalculation. They are not unique across different meetings.
pub fn occurrence_id(start: DateTime<Utc>) -> String {
    start.timestamp().to_string()
}
