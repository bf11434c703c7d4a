mod common;
use common::d;
use ravailability::cli::commands::selection_from_args;
use ravailability::cli::parser::WindowArgs;
use ravailability::config::Config;
use ravailability::core::timeline::{preset_window, resolve_window};
use ravailability::models::{Preset, Timeframe, TimelineSelection};
use ravailability::utils::calendar::{is_weekend, parse_month_day};
use ravailability::utils::date::normalize_date_str;
use ravailability::utils::{HolidayCalendar, days_inclusive, normalize_date};

#[test]
fn test_normalize_supported_shapes() {
    assert_eq!(normalize_date("2025-06-04"), Some(d("2025-06-04")));
    assert_eq!(normalize_date("06/04/25"), Some(d("2025-06-04")));
    assert_eq!(normalize_date("6/4/2025"), Some(d("2025-06-04")));
    assert_eq!(normalize_date("04.06.2025"), Some(d("2025-06-04")));
    assert_eq!(normalize_date("  2025-06-04 "), Some(d("2025-06-04")));
    assert_eq!(normalize_date_str("12/31/24").as_deref(), Some("2024-12-31"));
}

#[test]
fn test_normalize_rejects_garbage_and_impossible_days() {
    assert_eq!(normalize_date(""), None);
    assert_eq!(normalize_date("   "), None);
    assert_eq!(normalize_date("not a date"), None);
    assert_eq!(normalize_date("02/30/25"), None);
    assert_eq!(normalize_date("31.04.2025"), None);
    assert_eq!(normalize_date("2025-13-01"), None);
    assert_eq!(normalize_date("06-04-2025"), None);
}

#[test]
fn test_normalize_is_idempotent_on_canonical_form() {
    for raw in ["06/02/25", "2.6.2025", "2025-06-02"] {
        let canonical = normalize_date_str(raw).expect("valid");
        assert_eq!(normalize_date_str(&canonical).as_deref(), Some(canonical.as_str()));
    }
}

#[test]
fn test_days_inclusive_bounds() {
    let days: Vec<_> = days_inclusive(d("2025-02-27"), d("2025-03-02")).collect();
    assert_eq!(
        days,
        vec![d("2025-02-27"), d("2025-02-28"), d("2025-03-01"), d("2025-03-02")]
    );
    assert_eq!(days_inclusive(d("2025-03-02"), d("2025-03-01")).count(), 0);
    assert_eq!(days_inclusive(d("2025-03-02"), d("2025-03-02")).count(), 1);
}

#[test]
fn test_default_calendar_holidays_and_weekends() {
    let cal = HolidayCalendar::default();
    assert_eq!(cal.len(), 9);

    assert!(cal.is_public_holiday(d("2025-07-14")));
    assert!(cal.is_public_holiday(d("2031-12-25")));
    assert!(!cal.is_working_day(d("2025-05-01")));

    assert!(is_weekend(d("2025-06-07")));
    assert!(is_weekend(d("2025-06-08")));
    assert!(!is_weekend(d("2025-06-09")));
    // Whit Monday
    assert!(!cal.is_working_day(d("2025-06-09")));
    assert!(cal.is_working_day(d("2025-06-10")));
}

#[test]
fn test_custom_calendar_and_validation() {
    let cal = HolidayCalendar::from_month_days(["01-01", "02-29"]).expect("valid entries");
    assert!(cal.is_public_holiday(d("2024-02-29")));
    assert!(!cal.is_public_holiday(d("2025-07-14")));

    assert!(HolidayCalendar::from_month_days(["13-01"]).is_err());
    assert!(HolidayCalendar::from_month_days(["04-31"]).is_err());
    assert!(parse_month_day("0714").is_err());
    assert_eq!(parse_month_day("07-14").expect("valid"), (7, 14));
    assert!(HolidayCalendar::empty().is_empty());
}

#[test]
fn test_preset_windows_around_now() {
    let now = d("2025-06-04");

    let week = preset_window(Preset::Week, now);
    assert_eq!((week.start, week.end), (d("2025-05-28"), d("2025-06-25")));
    assert_eq!(week.days(), 29);

    let month = preset_window(Preset::Month, now);
    assert_eq!((month.start, month.end), (d("2025-05-04"), d("2025-08-04")));

    let quarter = preset_window(Preset::Quarter, now);
    assert_eq!((quarter.start, quarter.end), (d("2025-03-04"), d("2025-12-04")));
}

#[test]
fn test_month_arithmetic_clamps_to_month_end() {
    let month = preset_window(Preset::Month, d("2025-03-31"));
    assert_eq!(month.start, d("2025-02-28"));
    assert_eq!(month.end, d("2025-05-31"));
}

#[test]
fn test_custom_range_wins_when_complete() {
    let sel = TimelineSelection::custom(Preset::Week, Some(d("2025-01-01")), Some(d("2025-01-31")));
    let w = resolve_window(&sel, d("2025-06-04"));
    assert_eq!((w.start, w.end), (d("2025-01-01"), d("2025-01-31")));
}

#[test]
fn test_incomplete_or_inverted_custom_range_falls_back_to_preset() {
    let now = d("2025-06-04");
    let week = preset_window(Preset::Week, now);

    let only_start = TimelineSelection::custom(Preset::Week, Some(d("2025-01-01")), None);
    assert_eq!(resolve_window(&only_start, now), week);

    let inverted =
        TimelineSelection::custom(Preset::Week, Some(d("2025-02-01")), Some(d("2025-01-01")));
    assert_eq!(resolve_window(&inverted, now), week);

    assert_eq!(resolve_window(&TimelineSelection::preset(Preset::Week), now), week);
}

#[test]
fn test_resolved_window_is_always_ordered() {
    let now = d("2025-06-04");
    for preset in [Preset::Week, Preset::Month, Preset::Quarter] {
        let w = resolve_window(&TimelineSelection::preset(preset), now);
        assert!(w.start <= w.end);
        assert!(w.start <= now && now <= w.end);
    }
}

#[test]
fn test_cli_window_flags_to_selection() {
    let cfg = Config::default();

    let none = selection_from_args(&WindowArgs::default(), &cfg).expect("valid");
    assert_eq!(none, TimelineSelection::preset(Preset::Month));

    let quarter = WindowArgs {
        timeframe: Some(Timeframe::Quarter),
        ..Default::default()
    };
    assert_eq!(
        selection_from_args(&quarter, &cfg).expect("valid"),
        TimelineSelection::preset(Preset::Quarter)
    );

    let range = WindowArgs {
        from: Some("06/02/25".to_string()),
        to: Some("2025-06-08".to_string()),
        ..Default::default()
    };
    assert_eq!(
        selection_from_args(&range, &cfg).expect("valid"),
        TimelineSelection::custom(Preset::Month, Some(d("2025-06-02")), Some(d("2025-06-08")))
    );

    // explicit preset ignores from/to
    let preset_wins = WindowArgs {
        timeframe: Some(Timeframe::Week),
        from: Some("2025-06-02".to_string()),
        to: None,
    };
    assert_eq!(
        selection_from_args(&preset_wins, &cfg).expect("valid"),
        TimelineSelection::preset(Preset::Week)
    );

    let bad = WindowArgs {
        from: Some("yesterday".to_string()),
        ..Default::default()
    };
    assert!(selection_from_args(&bad, &cfg).is_err());
}

#[test]
fn test_config_defaults_and_check() {
    let cfg = Config::default();
    assert_eq!(cfg.default_timeframe, Preset::Month);
    assert_eq!(cfg.public_holidays.len(), 9);
    assert!(cfg.check().is_empty());
    assert_eq!(cfg.holiday_calendar().expect("valid"), HolidayCalendar::default());

    let broken = Config {
        public_holidays: vec!["02-30".to_string()],
        separator_char: String::new(),
        ..Config::default()
    };
    assert_eq!(broken.check().len(), 2);
    assert!(broken.holiday_calendar().is_err());
}

#[test]
fn test_config_save_then_load() {
    let mut path = std::env::temp_dir();
    path.push("rav_cfg_roundtrip/ravailability.conf");
    std::fs::remove_file(&path).ok();

    let cfg = Config {
        default_timeframe: Preset::Quarter,
        public_holidays: vec!["01-01".to_string()],
        ..Config::default()
    };
    cfg.save(&path).expect("save");

    let loaded = Config::load(Some(path.as_path())).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn test_config_partial_yaml_uses_defaults() {
    let mut path = std::env::temp_dir();
    path.push("rav_cfg_partial.conf");
    std::fs::write(&path, "default_timeframe: week\n").expect("write");

    let cfg = Config::load(Some(path.as_path())).expect("load");
    assert_eq!(cfg.default_timeframe, Preset::Week);
    assert_eq!(cfg.public_holidays.len(), 9);
    assert!(cfg.show_utilization);
}
