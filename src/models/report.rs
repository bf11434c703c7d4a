use crate::models::{ConsolidatedJob, Employee, TeamStats, TimelineUtilization, TimelineWindow};
use serde::Serialize;

/// Everything computed for one employee in one run.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeReport {
    pub employee: Employee,
    pub timeline: TimelineUtilization,
    pub jobs: Vec<ConsolidatedJob>,
}

/// Result of a full aggregation run over a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityReport {
    pub window: TimelineWindow,
    /// Same order as the employee aggregation (descending summary rate).
    pub employees: Vec<EmployeeReport>,
    pub team: TeamStats,
}

impl AvailabilityReport {
    pub fn find(&self, emp_id: &str) -> Option<&EmployeeReport> {
        self.employees.iter().find(|r| r.employee.emp_id == emp_id)
    }
}
