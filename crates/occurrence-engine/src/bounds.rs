//! End-condition resolution: which candidates survive, and when to stop.
//!
//! Precedence:
//! - the end bound (`end_date_time`) stops generation at the first candidate
//!   at or past it (exclusive);
//! - the caller's `limit` stops generation once that many are accepted;
//! - `end_times` truncates the accepted list afterwards, however generation
//!   stopped. The smaller of `limit` and `end_times` therefore binds.

use chrono::{DateTime, Utc};

use crate::rule::RecurrenceRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndCondition {
    /// Candidates before this instant are skipped.
    pub not_before: DateTime<Utc>,
    /// Exclusive upper bound on candidates.
    pub until: Option<DateTime<Utc>>,
    /// Caller-supplied cap on generation.
    pub limit: usize,
    /// Rule-supplied cap applied after generation.
    pub max_occurrences: Option<usize>,
}

impl EndCondition {
    /// Resolve the end condition for one expansion of `rule`.
    ///
    /// Only `from` bounds candidates from below. Weekly and monthly patterns
    /// may yield dates earlier than the anchor within its own week or month.
    pub fn new(rule: &RecurrenceRule, from: DateTime<Utc>, limit: usize) -> Self {
        Self {
            not_before: from,
            until: rule.end_date_time,
            limit,
            max_occurrences: rule.max_occurrences(),
        }
    }

    /// True when `candidate` is at or past the end bound.
    pub fn is_past_end(&self, candidate: DateTime<Utc>) -> bool {
        self.until.is_some_and(|until| candidate >= until)
    }

    /// Drive an ascending candidate stream to completion.
    pub fn collect<I>(&self, candidates: I) -> Vec<DateTime<Utc>>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        if self.limit == 0 {
            return Vec::new();
        }

        let mut accepted: Vec<DateTime<Utc>> = candidates
            .into_iter()
            .take_while(|&candidate| !self.is_past_end(candidate))
            .filter(|&candidate| candidate >= self.not_before)
            .take(self.limit)
            .collect();

        // Patterns are ascending by construction; this only guards the
        // no-duplicates invariant against two wall-clock times that localize
        // to the same instant.
        accepted.dedup();

        self.truncate(&mut accepted);
        accepted
    }

    /// Apply the `end_times` cap.
    pub fn truncate<T>(&self, accepted: &mut Vec<T>) {
        if let Some(max) = self.max_occurrences {
            accepted.truncate(max);
        }
    }
}
