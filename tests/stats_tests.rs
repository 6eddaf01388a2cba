//! Aggregation engine tests: pure function of (events, settings, now).

use chrono::NaiveDateTime;
use contadia::core::stats::compute;
use contadia::models::event::WorkEvent;
use contadia::models::event_kind::EventKind;
use contadia::models::settings::Settings;
use contadia::utils::date::week_start;

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("test timestamp")
}

fn ev(stamp: &str, kind: EventKind, amount: f64) -> WorkEvent {
    WorkEvent::new(ts(stamp), kind, amount)
}

// 2024-03-20 is a Wednesday; the week started Sunday 2024-03-17.
const NOW: &str = "2024-03-20T12:00:00";

#[test]
fn test_one_full_one_half_totals_180() {
    let settings = Settings::default(); // last_reset_date = epoch
    let events = vec![
        ev("2024-03-20T10:00:00", EventKind::FullDay, 120.0),
        ev("2024-03-20T11:00:00", EventKind::HalfDay, 60.0),
    ];

    let s = compute(&events, &settings, ts(NOW));

    assert_eq!(s.total, 180.0);
    assert_eq!(s.full_days, 1);
    assert_eq!(s.half_days, 1);
    assert_eq!(s.days, 2);
    assert_eq!(s.weekly, 180.0);
    assert_eq!(s.monthly, 180.0);
    assert_eq!(s.yearly, 180.0);
}

#[test]
fn test_week_starts_on_sunday() {
    let settings = Settings::default();
    let events = vec![
        // Sunday 00:00 is inside the week, Saturday 23:59 is not
        ev("2024-03-17T00:00:00", EventKind::HalfDay, 60.0),
        ev("2024-03-16T23:59:00", EventKind::HalfDay, 60.0),
    ];

    let s = compute(&events, &settings, ts(NOW));

    assert_eq!(s.weekly, 60.0);
    assert_eq!(s.monthly, 120.0);
    assert_eq!(s.yearly, 120.0);
}

#[test]
fn test_week_start_of_a_sunday_is_that_sunday() {
    let sunday_noon = ts("2024-03-17T12:00:00");
    assert_eq!(week_start(sunday_noon), ts("2024-03-17T00:00:00"));
}

#[test]
fn test_monotonic_containment() {
    let settings = Settings::default();
    let events = vec![
        ev("2024-03-18T08:00:00", EventKind::FullDay, 120.0), // this week
        ev("2024-03-05T08:00:00", EventKind::HalfDay, 60.0),  // this month
        ev("2024-01-10T08:00:00", EventKind::HalfDay, 60.0),  // this year
    ];

    let s = compute(&events, &settings, ts(NOW));

    assert!(s.yearly >= s.monthly);
    assert!(s.monthly >= s.weekly);
    assert_eq!(s.weekly, 120.0);
    assert_eq!(s.monthly, 180.0);
    assert_eq!(s.yearly, 240.0);
    assert_eq!(s.total, 240.0);
}

#[test]
fn test_reset_excludes_prior_events_from_all_sums() {
    let mut settings = Settings::default();
    settings.last_reset_date = ts("2024-03-19T00:00:00");

    let events = vec![
        // Inside the current week but before the reset: suppressed everywhere
        ev("2024-03-18T08:00:00", EventKind::FullDay, 120.0),
        ev("2024-03-19T08:00:00", EventKind::HalfDay, 60.0),
    ];

    let s = compute(&events, &settings, ts(NOW));

    assert_eq!(s.total, 60.0);
    assert_eq!(s.weekly, 60.0);
    assert_eq!(s.monthly, 60.0);
    assert_eq!(s.yearly, 60.0);
    assert_eq!(s.days, 1);
}

#[test]
fn test_event_exactly_at_reset_instant_is_active() {
    let mut settings = Settings::default();
    settings.last_reset_date = ts("2024-03-19T08:00:00");

    let events = vec![ev("2024-03-19T08:00:00", EventKind::HalfDay, 60.0)];

    let s = compute(&events, &settings, ts(NOW));
    assert_eq!(s.total, 60.0);
}

#[test]
fn test_progress_is_capped_at_100() {
    let mut settings = Settings::default();
    settings.weekly_goal = 100.0;
    settings.monthly_goal = 1000.0;

    let events = vec![ev("2024-03-20T08:00:00", EventKind::FullDay, 500.0)];

    let s = compute(&events, &settings, ts(NOW));

    assert_eq!(s.weekly_progress, 100.0);
    assert_eq!(s.monthly_progress, 50.0);
}

#[test]
fn test_empty_event_list() {
    let s = compute(&[], &Settings::default(), ts(NOW));
    assert_eq!(s.total, 0.0);
    assert_eq!(s.days, 0);
    assert_eq!(s.weekly_progress, 0.0);
}
