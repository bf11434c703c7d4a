use crate::models::category::Category;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub count: usize,
    pub total_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub total: usize,
    pub available: usize,
    pub partially_booked: usize,
    pub fully_booked: usize,
    pub total_chargeable_hours: f64,
    pub total_net_available_hours: f64,
    pub overall_utilization_rate: f64,
    pub category_breakdown: BTreeMap<Category, CategoryBreakdown>,
}

impl TeamStats {
    /// Net-available hours not yet consumed by chargeable work (may be negative
    /// when the team is over-allocated).
    pub fn remaining_hours(&self) -> f64 {
        self.total_net_available_hours - self.total_chargeable_hours
    }
}
