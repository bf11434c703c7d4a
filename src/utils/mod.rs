pub mod calendar;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use calendar::HolidayCalendar;
pub use date::{days_inclusive, normalize_date};
