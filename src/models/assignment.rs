use crate::models::category::Category;
use chrono::NaiveDate;
use serde::Serialize;

/// Status code marking a provisional booking.
pub const PROVISIONAL_STATUS: &str = "P";

/// A normalized job assignment. Both endpoints are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub job_name: String,
    pub job_code: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub hours_per_day: f64,
    pub utilization: f64,
    pub status: String,
    pub category: Category,
}

impl Assignment {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive calendar-day count (`end - start + 1`).
    pub fn day_span(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn is_provisional(&self) -> bool {
        self.status == PROVISIONAL_STATUS
    }
}
