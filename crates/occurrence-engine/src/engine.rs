//! Public entry points: meeting + reference instant + limit -> occurrences.

use chrono::{DateTime, Utc};

use crate::bounds::EndCondition;
use crate::dst::DstPolicy;
use crate::meeting::MeetingAnchor;
use crate::occurrence::Occurrence;
use crate::pattern::{Expander, LocalAnchor, Pattern};
use crate::rule::RecurrenceType;
use crate::tz;

/// Occurrence calculation service.
///
/// Holds configuration only; every call works on its own stack state, so one
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccurrenceEngine {
    dst_policy: DstPolicy,
}

impl OccurrenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dst_policy(dst_policy: DstPolicy) -> Self {
        Self { dst_policy }
    }

    pub fn dst_policy(&self) -> DstPolicy {
        self.dst_policy
    }

    /// Occurrences of `meeting` from its own start time onward.
    ///
    /// Equivalent to [`Self::calculate_from`] with `from = meeting.start_time`.
    pub fn calculate<'a>(
        &self,
        meeting: impl Into<Option<&'a MeetingAnchor>>,
        limit: usize,
    ) -> Vec<Occurrence> {
        match meeting.into() {
            Some(meeting) => self.calculate_from(meeting, meeting.start_time, limit),
            None => Vec::new(),
        }
    }

    /// Up to `limit` occurrences of `meeting` starting at or after `from`,
    /// in ascending start order.
    ///
    /// Never fails:
    /// - an absent meeting or a zero limit gives an empty list;
    /// - a meeting without a repeating rule gives the anchor alone, if it is
    ///   not before `from`;
    /// - an unknown timezone is treated as UTC;
    /// - an unrecognized rule type gives an empty list.
    pub fn calculate_from<'a>(
        &self,
        meeting: impl Into<Option<&'a MeetingAnchor>>,
        from: DateTime<Utc>,
        limit: usize,
    ) -> Vec<Occurrence> {
        let Some(meeting) = meeting.into() else {
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        self.instants(meeting, from, limit)
            .into_iter()
            .map(|start| Occurrence::materialize(meeting, start))
            .collect()
    }

    /// The first occurrence starting at or after `after`, if any.
    pub fn next_occurrence(
        &self,
        meeting: &MeetingAnchor,
        after: DateTime<Utc>,
    ) -> Option<Occurrence> {
        self.calculate_from(meeting, after, 1).into_iter().next()
    }

    /// Start instants only, without materializing occurrence records.
    pub fn instants(
        &self,
        meeting: &MeetingAnchor,
        from: DateTime<Utc>,
        limit: usize,
    ) -> Vec<DateTime<Utc>> {
        if limit == 0 {
            return Vec::new();
        }

        let rule = match &meeting.recurrence {
            Some(rule) if rule.kind != RecurrenceType::None => rule,
            _ => {
                return if meeting.start_time >= from {
                    vec![meeting.start_time]
                } else {
                    Vec::new()
                };
            }
        };

        let zone = tz::resolve_timezone(&meeting.timezone);
        let anchor = LocalAnchor::new(meeting.start_time, zone, self.dst_policy);
        let Some(pattern) = Pattern::from_rule(rule, &anchor) else {
            tracing::debug!(kind = ?rule.kind, "no expander for recurrence type");
            return Vec::new();
        };

        let end = EndCondition::new(rule, from, limit);
        end.collect(pattern.instants(&anchor))
    }
}

/// [`OccurrenceEngine::calculate`] with the default configuration.
pub fn calculate<'a>(
    meeting: impl Into<Option<&'a MeetingAnchor>>,
    limit: usize,
) -> Vec<Occurrence> {
    OccurrenceEngine::default().calculate(meeting, limit)
}

/// [`OccurrenceEngine::calculate_from`] with the default configuration.
pub fn calculate_from<'a>(
    meeting: impl Into<Option<&'a MeetingAnchor>>,
    from: DateTime<Utc>,
    limit: usize,
) -> Vec<Occurrence> {
    OccurrenceEngine::default().calculate_from(meeting, from, limit)
}
