use crate::core::calculator::daily::utilization_rate;
use crate::models::{AvailabilityStatus, Employee, TeamStats};

/// Roll every employee up into team-wide counts and rates.
pub fn calculate_team_stats(employees: &[Employee]) -> TeamStats {
    let mut stats = TeamStats {
        total: employees.len(),
        ..Default::default()
    };

    for emp in employees {
        stats.total_chargeable_hours += emp.chargeable_hours;
        stats.total_net_available_hours += emp.summary.net_available_hours;

        match emp.status() {
            AvailabilityStatus::Available => stats.available += 1,
            AvailabilityStatus::PartiallyBooked => stats.partially_booked += 1,
            AvailabilityStatus::FullyBooked => stats.fully_booked += 1,
        }

        for a in &emp.assignments {
            let entry = stats.category_breakdown.entry(a.category).or_default();
            entry.count += 1;
            entry.total_hours += a.hours_per_day;
        }
    }

    stats.overall_utilization_rate =
        utilization_rate(stats.total_chargeable_hours, stats.total_net_available_hours);

    stats
}
