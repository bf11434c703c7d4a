use chrono::NaiveDate;
use serde::Serialize;

/// Metrics for a single calendar day of a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUtilizationSample {
    pub date: NaiveDate,
    pub chargeable_hours: f64,
    pub absence_hours: f64,
    pub other_hours: f64,
    pub net_available_hours: f64,
    pub utilization_rate: f64,
    pub available_capacity_hours: f64,
    pub is_working_day: bool,
    pub is_weekend: bool,
    pub is_public_holiday: bool,
}

/// Window totals plus the chronological daily series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineUtilization {
    pub working_days: u32,
    pub chargeable_hours: f64,
    pub absence_hours: f64,
    pub net_available_hours: f64,
    pub utilization_rate: f64,
    pub available_capacity_hours: f64,
    pub daily: Vec<DailyUtilizationSample>,
}

impl TimelineUtilization {
    pub fn is_over_allocated(&self) -> bool {
        self.utilization_rate > 100.0
    }
}
