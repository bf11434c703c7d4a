use crate::core::calculator::daily::utilization_rate;
use crate::models::category::HourBucket;
use crate::models::employee::{STANDARD_DAY_HOURS, SummaryRates};
use crate::models::{Assignment, Category, Employee, RawAssignmentRecord};
use crate::utils::date::normalize_date;
use std::collections::HashMap;
use tracing::debug;

/// Normalize a raw record into an assignment. `None` when either date is
/// missing, unparseable, or the interval is inverted.
pub fn build_assignment(record: &RawAssignmentRecord) -> Option<Assignment> {
    let (raw_start, raw_end) = record.preferred_dates();
    let start = raw_start.and_then(normalize_date)?;
    let end = raw_end.and_then(normalize_date)?;

    if start > end {
        return None;
    }

    Some(Assignment {
        job_name: record.job_name.clone().unwrap_or_default(),
        job_code: record.job_code.clone().unwrap_or_default(),
        start,
        end,
        hours_per_day: record.hours_per_day,
        utilization: record.utilization,
        status: record.status.clone().unwrap_or_default(),
        category: Category::classify(record.job_code.as_deref()),
    })
}

/// Group records by employee, build their assignments and summary rates.
///
/// Every employee id seen in `records` yields an `Employee`, even when none
/// of its records had usable dates. The result is sorted by descending
/// summary utilization; ties keep first-appearance order.
pub fn aggregate_employees(records: &[RawAssignmentRecord]) -> Vec<Employee> {
    let mut employees: Vec<Employee> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut dropped = 0usize;

    for record in records {
        let slot = *index.entry(record.emp_id.as_str()).or_insert_with(|| {
            employees.push(Employee::new(record.emp_id.clone(), record.display_name()));
            employees.len() - 1
        });

        let Some(assignment) = build_assignment(record) else {
            debug!(emp_id = %record.emp_id, job = ?record.job_name, "record has no usable dates, skipped");
            dropped += 1;
            continue;
        };

        let emp = &mut employees[slot];
        match assignment.category.bucket() {
            HourBucket::Chargeable => emp.chargeable_hours += assignment.hours_per_day,
            HourBucket::Absence => emp.absence_hours += assignment.hours_per_day,
            HourBucket::Other => emp.other_hours += assignment.hours_per_day,
        }
        emp.total_hours += assignment.hours_per_day;
        emp.total_utilization += assignment.utilization;
        emp.projects.insert(assignment.job_name.clone());
        emp.assignments.push(assignment);
    }

    for emp in &mut employees {
        emp.project_count = emp.projects.len();
        emp.assignments.sort_by_key(|a| a.start);
        emp.summary = summary_rates(emp);
    }

    employees.sort_by(|a, b| {
        b.summary
            .true_utilization_rate
            .total_cmp(&a.summary.true_utilization_rate)
    });

    debug!(
        records = records.len(),
        employees = employees.len(),
        dropped,
        "employees aggregated"
    );

    employees
}

/// Average daily figures over the summed inclusive span of every assignment
/// (overlapping assignments each count their own days).
pub fn summary_rates(emp: &Employee) -> SummaryRates {
    let total_days: i64 = emp.assignments.iter().map(Assignment::day_span).sum();
    let days = total_days.max(1) as f64;

    let avg_chargeable = emp.chargeable_hours / days;
    let avg_absence = emp.absence_hours / days;

    let net_available_hours = (STANDARD_DAY_HOURS - avg_absence).max(0.0);

    SummaryRates {
        true_utilization_rate: utilization_rate(avg_chargeable, net_available_hours),
        net_available_hours,
        available_capacity_hours: (net_available_hours - avg_chargeable).max(0.0),
    }
}
