//! IANA timezone resolution.

use chrono_tz::Tz;

use crate::error::{Result, RuleError};

/// Resolve an IANA timezone identifier, falling back to UTC.
///
/// An empty or unknown identifier is not an error for occurrence calculation:
/// the meeting is expanded in UTC and a warning is logged.
pub fn resolve_timezone(timezone: &str) -> Tz {
    match parse_timezone(timezone) {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(timezone, "unresolvable timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Parse an IANA timezone identifier strictly.
///
/// # Errors
/// Returns `RuleError::InvalidTimezone` if the identifier is not known to
/// `chrono-tz`.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse::<Tz>()
        .map_err(|_| RuleError::InvalidTimezone(timezone.to_string()))
}
