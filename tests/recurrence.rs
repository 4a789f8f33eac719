#![forbid(unsafe_code)]
use calgen::{fires, Cadence, CadenceUnit, CalendarDate, RecurrenceError, RecurringEvent};

fn d(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn rule(start: &str, cadence: &str) -> RecurringEvent {
    RecurringEvent::new(d(start), cadence.parse().unwrap(), "rule")
}

#[test]
fn weekly_fires_every_seven_days() {
    let r = rule("2025-01-06", "1w");
    for day in ["2025-01-06", "2025-01-13", "2025-01-20", "2025-01-27", "2025-02-03"] {
        assert!(fires(&r, d(day)), "{day}");
    }
    assert!(!fires(&r, d("2025-01-07")));
    assert!(!fires(&r, d("2025-01-12")));
}

#[test]
fn weekly_stride_skips_intermediate_weeks() {
    let r = rule("2025-01-06", "2w");
    assert!(fires(&r, d("2025-01-06")));
    assert!(fires(&r, d("2025-01-20")));
    assert!(fires(&r, d("2025-02-03")));
    assert!(!fires(&r, d("2025-01-13")));
    assert!(!fires(&r, d("2025-01-27")));
}

#[test]
fn weekly_crosses_year_boundary() {
    let r = rule("2024-12-30", "1w");
    assert!(fires(&r, d("2025-01-06")));
    assert!(!fires(&r, d("2025-01-05")));
}

#[test]
fn never_fires_before_start() {
    let r = rule("2025-01-06", "1w");
    assert!(!fires(&r, d("2024-12-30")));
    assert!(!fires(&r, d("2025-01-05")));
}

#[test]
fn monthly_matches_day_of_month() {
    let r = rule("2025-01-15", "1m");
    assert!(fires(&r, d("2025-01-15")));
    assert!(fires(&r, d("2025-02-15")));
    assert!(fires(&r, d("2025-03-15")));
    assert!(fires(&r, d("2026-01-15")));
    assert!(!fires(&r, d("2025-02-14")));
    assert!(!fires(&r, d("2025-02-16")));
}

#[test]
fn monthly_stride_counts_calendar_months() {
    let r = rule("2024-11-10", "3m");
    assert!(fires(&r, d("2025-02-10")));
    assert!(fires(&r, d("2025-05-10")));
    assert!(!fires(&r, d("2024-12-10")));
    assert!(!fires(&r, d("2025-03-10")));
}

#[test]
fn monthly_end_of_month_anchor_skips_short_months() {
    let r = rule("2025-01-31", "1m");
    assert!(fires(&r, d("2025-03-31")));
    assert!(!fires(&r, d("2025-02-28")));
    assert!(!fires(&r, d("2025-04-30")));

    let thirtieth = rule("2025-01-30", "1m");
    assert!(!fires(&thirtieth, d("2025-02-28")));
    assert!(fires(&thirtieth, d("2025-04-30")));
}

#[test]
fn yearly_matches_month_and_day() {
    let r = rule("2024-02-14", "1y");
    assert!(fires(&r, d("2024-02-14")));
    assert!(fires(&r, d("2025-02-14")));
    assert!(fires(&r, d("2026-02-14")));
    assert!(!fires(&r, d("2025-02-13")));
    assert!(!fires(&r, d("2025-03-14")));
}

#[test]
fn yearly_stride_and_leap_day_anchor() {
    let r = rule("2024-02-29", "1y");
    assert!(!fires(&r, d("2025-02-28")));
    assert!(fires(&r, d("2028-02-29")));

    let every_two = rule("2020-07-04", "2y");
    assert!(fires(&every_two, d("2024-07-04")));
    assert!(!fires(&every_two, d("2025-07-04")));
}

#[test]
fn end_date_is_inclusive_bound() {
    let r = rule("2025-01-06", "1w").until(d("2025-03-31"));
    assert!(fires(&r, d("2025-03-31")));
    assert!(fires(&r, d("2025-03-24")));
    assert!(!fires(&r, d("2025-04-07")));
    assert!(!fires(&r, d("2026-03-30")));
}

#[test]
fn end_before_start_never_fires() {
    let r = rule("2025-03-01", "1m").until(d("2025-01-01"));
    assert!(!fires(&r, d("2025-03-01")));
    assert!(!fires(&r, d("2025-04-01")));
}

#[test]
fn cadence_parses_count_and_unit() {
    let c: Cadence = "12m".parse().unwrap();
    assert_eq!(c.count.get(), 12);
    assert_eq!(c.unit, CadenceUnit::Month);
    assert_eq!(c.to_string(), "12m");
    assert_eq!("1y".parse::<Cadence>().unwrap(), Cadence::yearly(1).unwrap());
    assert_eq!("007w".parse::<Cadence>().unwrap(), Cadence::weekly(7).unwrap());
}

#[test]
fn cadence_rejects_malformed_tokens() {
    for token in ["", "w", "3x", "3W", "-1w", "+1w", "1.5m", "w3", "3 w", "3wm", "99999999999y"] {
        assert_eq!(
            token.parse::<Cadence>(),
            Err(RecurrenceError::Malformed(token.to_string())),
            "{token:?}"
        );
    }
    assert_eq!(
        "0w".parse::<Cadence>(),
        Err(RecurrenceError::ZeroCount("0w".to_string()))
    );
}
