use crate::models::category::Category;
use chrono::NaiveDate;
use serde::Serialize;

/// A maximal run of adjacent, metrically identical assignments of one job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub hours_per_day: f64,
    pub utilization: f64,
    pub status: String,
    pub category: Category,
    pub has_provisional: bool,
}

impl ConsolidatedPeriod {
    pub fn day_span(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Hours booked when the period is expanded day by day.
    pub fn expanded_hours(&self) -> f64 {
        self.hours_per_day * self.day_span() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedJob {
    pub job_name: String,
    pub job_code: String,
    pub category: Category,
    /// Status of the first assignment seen for the job.
    pub status: String,
    pub has_provisional: bool,
    pub total_utilization: f64,
    pub total_hours: f64,
    /// Ascending, never overlapping.
    pub periods: Vec<ConsolidatedPeriod>,
}
