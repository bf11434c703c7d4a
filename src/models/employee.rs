use crate::models::assignment::Assignment;
use serde::Serialize;
use std::collections::HashSet;

/// Standard working hours in a single working day.
pub const STANDARD_DAY_HOURS: f64 = 8.0;

/// Booking status derived from the summary utilization rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AvailabilityStatus {
    Available,
    PartiallyBooked,
    FullyBooked,
}

impl AvailabilityStatus {
    pub fn from_rate(rate: f64) -> Self {
        if rate == 0.0 {
            AvailabilityStatus::Available
        } else if rate < 100.0 {
            AvailabilityStatus::PartiallyBooked
        } else {
            AvailabilityStatus::FullyBooked
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::PartiallyBooked => "Partially booked",
            AvailabilityStatus::FullyBooked => "Fully booked",
        }
    }
}

/// Window-independent figures computed from an employee's own assignment span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryRates {
    pub true_utilization_rate: f64,
    pub net_available_hours: f64,
    pub available_capacity_hours: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Employee {
    pub emp_id: String,
    pub name: String,
    /// Ascending by start date.
    pub assignments: Vec<Assignment>,
    pub chargeable_hours: f64,
    pub absence_hours: f64,
    pub other_hours: f64,
    pub total_hours: f64,
    pub total_utilization: f64,
    #[serde(skip)]
    pub projects: HashSet<String>,
    pub project_count: usize,
    pub summary: SummaryRates,
}

impl Employee {
    pub fn new(emp_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            emp_id: emp_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn status(&self) -> AvailabilityStatus {
        AvailabilityStatus::from_rate(self.summary.true_utilization_rate)
    }
}
