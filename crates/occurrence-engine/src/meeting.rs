//! The meeting definition occurrences are expanded from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};
use crate::rule::{RecurrenceRule, RecurrenceType};
use crate::tz;

/// A meeting's anchor: canonical start, timezone and descriptive fields.
///
/// The engine only reads this value. Descriptive fields are copied verbatim
/// into every [`crate::Occurrence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingAnchor {
    pub start_time: DateTime<Utc>,
    /// IANA identifier, e.g. "America/Los_Angeles".
    #[serde(default)]
    pub timezone: String,
    /// Duration in minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub registrant_count: u32,
    #[serde(default)]
    pub response_count: u32,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
}

impl MeetingAnchor {
    /// A one-off meeting with empty descriptive fields.
    pub fn new(start_time: DateTime<Utc>, timezone: impl Into<String>, duration: u32) -> Self {
        Self {
            start_time,
            timezone: timezone.into(),
            duration,
            title: String::new(),
            description: String::new(),
            registrant_count: 0,
            response_count: 0,
            recurrence: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    /// True when the meeting carries a rule that repeats.
    pub fn is_recurring(&self) -> bool {
        self.recurrence
            .as_ref()
            .is_some_and(|rule| rule.kind != RecurrenceType::None)
    }

    /// Strict validation of the timezone, recurrence rule and end bound.
    ///
    /// # Errors
    /// Returns `RuleError::InvalidTimezone` for an unknown identifier, any
    /// error from [`RecurrenceRule::validate`], or `RuleError::EndBeforeStart`
    /// if the end bound does not leave room for the first occurrence.
    pub fn validate(&self) -> Result<()> {
        tz::parse_timezone(&self.timezone)?;
        if let Some(rule) = &self.recurrence {
            rule.validate()?;
            if let Some(end) = rule.end_date_time {
                if rule.kind != RecurrenceType::None && end <= self.start_time {
                    return Err(RuleError::EndBeforeStart);
                }
            }
        }
        Ok(())
    }
}
