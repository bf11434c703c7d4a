pub mod assignment;
pub mod category;
pub mod consolidated;
pub mod daily;
pub mod employee;
pub mod raw_record;
pub mod report;
pub mod team_stats;
pub mod timeline;

pub use assignment::Assignment;
pub use category::Category;
pub use consolidated::{ConsolidatedJob, ConsolidatedPeriod};
pub use daily::{DailyUtilizationSample, TimelineUtilization};
pub use employee::{AvailabilityStatus, Employee};
pub use raw_record::RawAssignmentRecord;
pub use report::{AvailabilityReport, EmployeeReport};
pub use team_stats::{CategoryBreakdown, TeamStats};
pub use timeline::{Preset, Timeframe, TimelineSelection, TimelineWindow};
