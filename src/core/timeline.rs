use crate::models::{Preset, TimelineSelection, TimelineWindow};
use chrono::{Days, Months, NaiveDate};
use tracing::warn;

/// Resolve a selection into a concrete window around `now`.
///
/// A custom range wins only when both ends are present and ordered;
/// otherwise the active preset is used.
pub fn resolve_window(selection: &TimelineSelection, now: NaiveDate) -> TimelineWindow {
    if let Some(custom) = selection.custom {
        match (custom.start, custom.end) {
            (Some(start), Some(end)) if start <= end => return TimelineWindow { start, end },
            (Some(start), Some(end)) => {
                warn!(%start, %end, "custom range is inverted, using preset");
            }
            _ => {
                warn!(preset = selection.preset.as_str(), "custom range incomplete, using preset");
            }
        }
    }

    preset_window(selection.preset, now)
}

/// `week`: -7d/+21d, `month`: -1/+2 months, `quarter`: -3/+6 months.
/// Month arithmetic clamps to the last day of shorter months.
pub fn preset_window(preset: Preset, now: NaiveDate) -> TimelineWindow {
    let (start, end) = match preset {
        Preset::Week => (
            now.checked_sub_days(Days::new(7)),
            now.checked_add_days(Days::new(21)),
        ),
        Preset::Month => (
            now.checked_sub_months(Months::new(1)),
            now.checked_add_months(Months::new(2)),
        ),
        Preset::Quarter => (
            now.checked_sub_months(Months::new(3)),
            now.checked_add_months(Months::new(6)),
        ),
    };

    TimelineWindow {
        start: start.unwrap_or(NaiveDate::MIN),
        end: end.unwrap_or(NaiveDate::MAX),
    }
}
