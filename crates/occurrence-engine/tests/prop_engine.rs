//! Property-based tests for occurrence calculation using proptest.
//!
//! These verify invariants that should hold for *any* meeting and rule, not
//! just the specific vectors in `pattern_vectors.rs`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use occurrence_engine::weekday::from_ordinal;
use occurrence_engine::{
    calculate, calculate_from, MeetingAnchor, RecurrenceRule, RecurrenceType,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_timezone() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("UTC".to_string()),
        Just("America/New_York".to_string()),
        Just("America/Los_Angeles".to_string()),
        Just("Europe/London".to_string()),
        Just("Asia/Tokyo".to_string()),
        Just("Australia/Sydney".to_string()),
    ]
}

/// A start instant in 2024-2027, any minute of the day.
fn arb_start() -> impl Strategy<Value = DateTime<Utc>> {
    (2024i32..=2027, 1u32..=12, 1u32..=28, 0u32..=23, 0u32..=59)
        .prop_map(|(y, m, d, h, min)| Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
}

fn arb_weekly_days() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=7, 0..=7)
}

fn arb_rule() -> impl Strategy<Value = RecurrenceRule> {
    let daily = (1u32..=10).prop_map(RecurrenceRule::daily);
    let weekly = (1u32..=4, arb_weekly_days()).prop_map(|(interval, days)| RecurrenceRule {
        kind: RecurrenceType::Weekly,
        repeat_interval: interval,
        weekly_days: days,
        ..RecurrenceRule::default()
    });
    let by_day = (1u32..=6, 1u32..=31).prop_map(|(i, d)| RecurrenceRule::monthly_by_day(i, d));
    let by_weekday = (1u32..=6, prop_oneof![Just(-1i32), 1i32..=4], 1u8..=7).prop_map(
        |(i, week, ordinal)| {
            RecurrenceRule::monthly_by_weekday(i, week, from_ordinal(ordinal).unwrap())
        },
    );
    prop_oneof![daily, weekly, by_day, by_weekday]
}

fn arb_meeting() -> impl Strategy<Value = MeetingAnchor> {
    (arb_start(), arb_timezone(), arb_rule())
        .prop_map(|(start, tz, rule)| MeetingAnchor::new(start, tz, 30).with_recurrence(rule))
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: strictly ascending, no duplicates
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn output_is_strictly_ascending(meeting in arb_meeting(), limit in 1usize..=60) {
        let result = calculate(&meeting, limit);
        for pair in result.windows(2) {
            prop_assert!(
                pair[0].start_time < pair[1].start_time,
                "not strictly ascending: {} then {}",
                pair[0].start_time,
                pair[1].start_time
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: limit and end_times both cap the output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn output_respects_limit_and_end_times(
        meeting in arb_meeting(),
        limit in 0usize..=40,
        times in 0u32..=40,
    ) {
        let mut meeting = meeting;
        if let Some(rule) = meeting.recurrence.as_mut() {
            rule.end_times = Some(times);
        }

        let result = calculate(&meeting, limit);

        prop_assert!(result.len() <= limit);
        if times > 0 {
            prop_assert!(result.len() <= times as usize);
            // Unbounded rules always have enough candidates in range.
            prop_assert_eq!(result.len(), limit.min(times as usize));
        } else {
            prop_assert_eq!(result.len(), limit);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: everything lies in [from, end)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn output_stays_inside_window(
        meeting in arb_meeting(),
        from_offset_days in -30i64..=400,
        end_offset_days in 1i64..=800,
    ) {
        let mut meeting = meeting;
        let end = meeting.start_time + Duration::days(end_offset_days);
        if let Some(rule) = meeting.recurrence.as_mut() {
            rule.end_date_time = Some(end);
        }
        let from = meeting.start_time + Duration::days(from_offset_days);

        let result = calculate_from(&meeting, from, 50);

        for occurrence in &result {
            prop_assert!(occurrence.start_time >= from);
            prop_assert!(occurrence.start_time < end, "{} is not before {}", occurrence.start_time, end);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: idempotence
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn repeated_calculation_is_identical(
        meeting in arb_meeting(),
        from_offset_days in 0i64..=200,
        limit in 1usize..=30,
    ) {
        let from = meeting.start_time + Duration::days(from_offset_days);
        let first = calculate_from(&meeting, from, limit);
        let second = calculate_from(&meeting, from, limit);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 5: a later window is a suffix-compatible slice of an earlier one
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn later_reference_date_agrees_with_full_expansion(
        meeting in arb_meeting(),
        skip in 0usize..=10,
    ) {
        let full = calculate(&meeting, 20);
        prop_assume!(full.len() > skip);

        let pivot = full[skip].start_time;
        let tail = calculate_from(&meeting, pivot, 20 - skip);

        prop_assert_eq!(&tail[..], &full[skip..]);
    }
}

// ---------------------------------------------------------------------------
// Property 6: daily spacing is exact in wall-clock terms
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn daily_occurrences_are_interval_days_apart_locally(
        start in arb_start(),
        tz_name in arb_timezone(),
        interval in 1u32..=10,
    ) {
        let tz: Tz = tz_name.parse().unwrap();
        let local_hour = start.with_timezone(&tz).hour();
        // Transitions in these zones happen between 00:00 and 03:59 local.
        prop_assume!(local_hour >= 4);

        let meeting = MeetingAnchor::new(start, tz_name, 30)
            .with_recurrence(RecurrenceRule::daily(interval));
        let result = calculate(&meeting, 30);

        let anchor_time = start.with_timezone(&tz).time();
        for pair in result.windows(2) {
            let a = pair[0].start_time.with_timezone(&tz);
            let b = pair[1].start_time.with_timezone(&tz);
            prop_assert_eq!((b.date_naive() - a.date_naive()).num_days(), i64::from(interval));
            prop_assert_eq!(b.time(), anchor_time);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: weekly output only lands on configured weekdays
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn weekly_occurrences_land_on_configured_days(
        start in arb_start(),
        interval in 1u32..=3,
        days in prop::collection::vec(1u8..=7, 1..=7),
    ) {
        let rule = RecurrenceRule {
            kind: RecurrenceType::Weekly,
            repeat_interval: interval,
            weekly_days: days.clone(),
            ..RecurrenceRule::default()
        };
        let meeting = MeetingAnchor::new(start, "UTC", 30).with_recurrence(rule);
        let allowed: Vec<Weekday> = days.iter().filter_map(|&d| from_ordinal(d)).collect();

        for occurrence in calculate(&meeting, 40) {
            prop_assert!(allowed.contains(&occurrence.start_time.weekday()));
            prop_assert_eq!(occurrence.start_time.time(), start.time());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 8: monthly by day lands on min(day, month length)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn monthly_by_day_clamps_to_month_length(
        start in arb_start(),
        day in 1u32..=31,
        interval in 1u32..=4,
    ) {
        let meeting = MeetingAnchor::new(start, "UTC", 30)
            .with_recurrence(RecurrenceRule::monthly_by_day(interval, day));

        for occurrence in calculate(&meeting, 24) {
            let t = occurrence.start_time;
            let month_len = days_in_month(t.year(), t.month());
            prop_assert_eq!(t.day(), day.min(month_len));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 9: last-weekday selector really picks the last one
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn last_weekday_is_final_in_month(start in arb_start(), ordinal in 1u8..=7) {
        let weekday = from_ordinal(ordinal).unwrap();
        let meeting = MeetingAnchor::new(start, "UTC", 30)
            .with_recurrence(RecurrenceRule::monthly_by_weekday(1, -1, weekday));

        for occurrence in calculate(&meeting, 12) {
            let t = occurrence.start_time;
            prop_assert_eq!(t.weekday(), weekday);
            prop_assert!(t.day() + 7 > days_in_month(t.year(), t.month()));
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap()
}
