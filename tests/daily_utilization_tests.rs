mod common;
use common::{assignment, d};
use ravailability::core::calculator::calculate_timeline_utilization;
use ravailability::core::calculator::daily::utilization_rate;
use ravailability::models::TimelineWindow;
use ravailability::utils::HolidayCalendar;

fn window(start: &str, end: &str) -> TimelineWindow {
    TimelineWindow {
        start: d(start),
        end: d(end),
    }
}

#[test]
fn test_full_week_chargeable_is_fully_utilized() {
    // Mon 2025-06-02 .. Sun 2025-06-08, no holiday in range
    let assignments = vec![assignment(
        "Apollo",
        "20001",
        "2025-06-02",
        "2025-06-06",
        8.0,
        100.0,
        "C",
    )];

    let t = calculate_timeline_utilization(
        &assignments,
        &window("2025-06-02", "2025-06-08"),
        &HolidayCalendar::default(),
    );

    assert_eq!(t.daily.len(), 7);
    assert_eq!(t.working_days, 5);
    assert_eq!(t.chargeable_hours, 40.0);
    assert_eq!(t.net_available_hours, 40.0);
    assert_eq!(t.utilization_rate, 100.0);
    assert_eq!(t.available_capacity_hours, 0.0);

    for day in t.daily.iter().filter(|s| s.is_working_day) {
        assert_eq!(day.utilization_rate, 100.0);
        assert_eq!(day.available_capacity_hours, 0.0);
        assert_eq!(day.net_available_hours, 8.0);
    }
}

#[test]
fn test_single_day_loa_has_zero_rate_and_counts_as_working_day() {
    let assignments = vec![assignment(
        "Leave",
        "9999999910",
        "2025-06-04",
        "2025-06-04",
        8.0,
        0.0,
        "C",
    )];

    let t = calculate_timeline_utilization(
        &assignments,
        &window("2025-06-02", "2025-06-06"),
        &HolidayCalendar::default(),
    );

    let wed = t
        .daily
        .iter()
        .find(|s| s.date == d("2025-06-04"))
        .expect("wednesday sample");
    assert!(wed.is_working_day);
    assert_eq!(wed.absence_hours, 8.0);
    assert_eq!(wed.net_available_hours, 0.0);
    assert_eq!(wed.utilization_rate, 0.0);
    assert!(wed.utilization_rate.is_finite());

    assert_eq!(t.working_days, 5);
    assert_eq!(t.absence_hours, 8.0);
    assert_eq!(t.net_available_hours, 32.0);
    assert_eq!(t.utilization_rate, 0.0);
}

#[test]
fn test_weekend_and_holiday_have_zero_metrics() {
    // Bastille Day 2025-07-14 is a Monday; 07-12/07-13 are the weekend before
    let assignments = vec![assignment(
        "Apollo",
        "20001",
        "2025-07-10",
        "2025-07-15",
        8.0,
        100.0,
        "C",
    )];

    let t = calculate_timeline_utilization(
        &assignments,
        &window("2025-07-12", "2025-07-15"),
        &HolidayCalendar::default(),
    );

    let sat = &t.daily[0];
    assert!(sat.is_weekend);
    assert!(!sat.is_working_day);

    let holiday = &t.daily[2];
    assert_eq!(holiday.date, d("2025-07-14"));
    assert!(holiday.is_public_holiday);
    assert!(!holiday.is_weekend);

    for day in &t.daily[..3] {
        assert!(!day.is_working_day);
        assert_eq!(day.net_available_hours, 0.0);
        assert_eq!(day.utilization_rate, 0.0);
        assert_eq!(day.available_capacity_hours, 0.0);
    }

    // only Tuesday counts
    assert_eq!(t.working_days, 1);
    assert_eq!(t.chargeable_hours, 8.0);
    assert_eq!(t.utilization_rate, 100.0);
}

#[test]
fn test_net_available_is_floored_and_rate_finite() {
    // 10h of absence on one day: net is clamped at zero
    let assignments = vec![
        assignment("Holiday", "1234", "2025-06-03", "2025-06-03", 6.0, 0.0, "C"),
        assignment("Leave", "9999999911", "2025-06-03", "2025-06-03", 4.0, 0.0, "C"),
        assignment("Apollo", "20001", "2025-06-03", "2025-06-03", 2.0, 25.0, "C"),
    ];

    let t = calculate_timeline_utilization(
        &assignments,
        &window("2025-06-02", "2025-06-08"),
        &HolidayCalendar::default(),
    );

    for day in &t.daily {
        let expected_net = if day.is_working_day {
            (8.0 - day.absence_hours).max(0.0)
        } else {
            0.0
        };
        assert_eq!(day.net_available_hours, expected_net);
        assert!(day.utilization_rate.is_finite());
        if day.net_available_hours == 0.0 {
            assert_eq!(day.utilization_rate, 0.0);
        }
    }

    let tue = &t.daily[1];
    assert_eq!(tue.absence_hours, 10.0);
    assert_eq!(tue.chargeable_hours, 2.0);
    assert_eq!(tue.net_available_hours, 0.0);
    assert_eq!(tue.available_capacity_hours, 0.0);
}

#[test]
fn test_other_categories_do_not_reduce_availability() {
    let assignments = vec![assignment(
        "Course",
        "9999999980",
        "2025-06-02",
        "2025-06-02",
        4.0,
        50.0,
        "C",
    )];

    let t = calculate_timeline_utilization(
        &assignments,
        &window("2025-06-02", "2025-06-02"),
        &HolidayCalendar::default(),
    );

    let mon = &t.daily[0];
    assert_eq!(mon.other_hours, 4.0);
    assert_eq!(mon.net_available_hours, 8.0);
    assert_eq!(mon.available_capacity_hours, 8.0);
    assert_eq!(mon.utilization_rate, 0.0);
}

#[test]
fn test_empty_assignments_yield_zero_totals_and_monotonic_days() {
    let t = calculate_timeline_utilization(
        &[],
        &window("2025-05-28", "2025-06-25"),
        &HolidayCalendar::default(),
    );

    assert_eq!(t.daily.len(), 29);
    assert_eq!(t.chargeable_hours, 0.0);
    assert_eq!(t.absence_hours, 0.0);
    assert_eq!(t.utilization_rate, 0.0);
    assert_eq!(t.available_capacity_hours, t.net_available_hours);
    assert_eq!(t.net_available_hours, t.working_days as f64 * 8.0);
    assert!(t.daily.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_over_allocation_is_reported() {
    let assignments = vec![
        assignment("Apollo", "20001", "2025-06-02", "2025-06-02", 8.0, 100.0, "C"),
        assignment("Zeus", "20002", "2025-06-02", "2025-06-02", 4.0, 50.0, "C"),
    ];

    let t = calculate_timeline_utilization(
        &assignments,
        &window("2025-06-02", "2025-06-02"),
        &HolidayCalendar::default(),
    );

    assert_eq!(t.utilization_rate, 150.0);
    assert!(t.is_over_allocated());
    assert_eq!(t.available_capacity_hours, 0.0);
}

#[test]
fn test_overflowing_hours_never_produce_infinite_rates() {
    let assignments = vec![
        assignment("Apollo", "20001", "2025-06-02", "2025-06-02", 1e308, 100.0, "C"),
        assignment("Zeus", "20002", "2025-06-02", "2025-06-02", 1e308, 100.0, "C"),
    ];

    let t = calculate_timeline_utilization(
        &assignments,
        &window("2025-06-02", "2025-06-02"),
        &HolidayCalendar::default(),
    );

    assert!(t.daily[0].chargeable_hours.is_infinite());
    assert_eq!(t.daily[0].utilization_rate, 0.0);
    assert_eq!(t.utilization_rate, 0.0);
    assert!(t.daily.iter().all(|s| s.utilization_rate.is_finite()));

    assert_eq!(utilization_rate(f64::NAN, 8.0), 0.0);
    assert_eq!(utilization_rate(4.0, f64::INFINITY), 0.0);
    assert_eq!(utilization_rate(1e308, 1e-10), 0.0);
    assert_eq!(utilization_rate(4.0, 8.0), 50.0);
}
