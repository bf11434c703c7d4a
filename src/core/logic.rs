use crate::core::calculator::{
    aggregate_employees, calculate_team_stats, calculate_timeline_utilization,
    consolidate_assignments,
};
use crate::core::timeline::resolve_window;
use crate::models::{
    AvailabilityReport, EmployeeReport, RawAssignmentRecord, TimelineSelection,
};
use crate::utils::calendar::HolidayCalendar;
use chrono::NaiveDate;
use tracing::info;

pub struct Core;

impl Core {
    /// Run the whole pipeline: employees, windowed utilization, merged
    /// periods and team statistics. Identical inputs give identical output.
    pub fn build_report(
        records: &[RawAssignmentRecord],
        selection: &TimelineSelection,
        now: NaiveDate,
        calendar: &HolidayCalendar,
    ) -> AvailabilityReport {
        let window = resolve_window(selection, now);
        let employees = aggregate_employees(records);
        let team = calculate_team_stats(&employees);

        let employees: Vec<EmployeeReport> = employees
            .into_iter()
            .map(|employee| {
                let timeline =
                    calculate_timeline_utilization(&employee.assignments, &window, calendar);
                let jobs = consolidate_assignments(&employee.assignments);
                EmployeeReport {
                    employee,
                    timeline,
                    jobs,
                }
            })
            .collect();

        info!(
            start = %window.start,
            end = %window.end,
            employees = employees.len(),
            overall_rate = team.overall_utilization_rate,
            "availability report built"
        );

        AvailabilityReport {
            window,
            employees,
            team,
        }
    }
}
