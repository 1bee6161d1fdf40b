//! Weekday ordinal conversion.
//!
//! Recurrence rules encode weekdays as 1-based ordinals starting on Sunday
//! (`1 = Sunday` .. `7 = Saturday`). Internally the engine works with
//! [`chrono::Weekday`] and counts days from Sunday, so every conversion goes
//! through the two functions here instead of inline arithmetic.

use chrono::Weekday;

/// Convert a rule ordinal (`1 = Sunday` .. `7 = Saturday`) into a [`Weekday`].
///
/// Returns `None` for anything outside `1..=7`.
pub fn from_ordinal(ordinal: u8) -> Option<Weekday> {
    match ordinal {
        1 => Some(Weekday::Sun),
        2 => Some(Weekday::Mon),
        3 => Some(Weekday::Tue),
        4 => Some(Weekday::Wed),
        5 => Some(Weekday::Thu),
        6 => Some(Weekday::Fri),
        7 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Convert a [`Weekday`] back into its rule ordinal (`1 = Sunday` .. `7 = Saturday`).
pub fn to_ordinal(weekday: Weekday) -> u8 {
    // num_days_from_sunday() is 0..=6, so this never truncates.
    weekday.num_days_from_sunday() as u8 + 1
}

/// Number of days to walk forward from `from` to reach the next `to`
/// (zero when they are the same weekday).
///
/// Always in `0..=6`, i.e. `(to - from + 7) % 7` on Sunday-based day numbers.
pub fn forward_offset(from: Weekday, to: Weekday) -> u64 {
    u64::from((to.num_days_from_sunday() + 7 - from.num_days_from_sunday()) % 7)
}
