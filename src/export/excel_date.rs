// src/export/excel_date.rs

use chrono::NaiveDate;

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Excel serial day number of `d` (1900 date system).
pub(crate) fn excel_serial(d: NaiveDate) -> f64 {
    // day zero sits on 1899-12-30 because of Excel's 1900 leap-year bug
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}
