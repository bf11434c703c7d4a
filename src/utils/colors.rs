//! ANSI color helper utilities for terminal output.
use crate::models::{AvailabilityStatus, Category};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Utilization color:
/// 0 → green (free)
/// \>100 → red (over-allocated)
/// otherwise → yellow
pub fn color_for_rate(rate: f64) -> &'static str {
    if rate == 0.0 {
        GREEN
    } else if rate > 100.0 {
        RED
    } else {
        YELLOW
    }
}

pub fn color_for_status(status: AvailabilityStatus) -> &'static str {
    match status {
        AvailabilityStatus::Available => GREEN,
        AvailabilityStatus::PartiallyBooked => YELLOW,
        AvailabilityStatus::FullyBooked => RED,
    }
}

pub fn color_for_category(category: Category) -> &'static str {
    match category {
        Category::Chargeable => BLUE,
        Category::Absence => RED,
        Category::Training => GREEN,
        Category::Loa => MAGENTA,
        Category::Pending => YELLOW,
        Category::Other => CYAN,
        Category::Reservation | Category::Unknown => GREY,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out non-working days in daily listings.
pub fn colorize_day(value: &str, is_working_day: bool) -> String {
    if is_working_day {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
