pub mod consolidate;
pub mod daily;
pub mod employees;
pub mod team;

pub use consolidate::consolidate_assignments;
pub use daily::calculate_timeline_utilization;
pub use employees::aggregate_employees;
pub use team::calculate_team_stats;
