#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use ravailability::models::{Assignment, Category, RawAssignmentRecord};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "EmpID,LastName,FirstName,JobNo,JobName,StartDate,EndDate,Utilization,Status,Hours,StartDateParsed,EndDateParsed,UtilPercent,WorkingDays,HoursTotal,HoursPerDay";

/// Small team used by the CLI tests (week of Mon 2025-06-02).
pub const TEAM_CSV_ROWS: &[&str] = &[
    "E001,Doe,Jane,20001,Apollo,06/02/25,06/06/25,100,C,40,,,100%,5,40,8",
    "E002,Roe,Rich,1234,Holiday,2025-06-04,2025-06-04,0,C,8,,,0%,1,8,8",
    "E003,Poe,Ed,20002,Zeus,bad,date,50,P,0,,,,0,0,4",
];

pub fn rav() -> Command {
    cargo_bin_cmd!("ravailability")
}

/// Write a CSV fixture (header + rows) in the temp dir and return its path.
pub fn write_csv(name: &str, rows: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ravailability.csv", name));

    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }

    fs::write(&path, content).expect("write csv fixture");
    path.to_string_lossy().to_string()
}

/// A config path that does not exist yet, so defaults are used.
pub fn fresh_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ravailability.conf", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn assignment(
    job_name: &str,
    job_code: &str,
    start: &str,
    end: &str,
    hours_per_day: f64,
    utilization: f64,
    status: &str,
) -> Assignment {
    Assignment {
        job_name: job_name.to_string(),
        job_code: job_code.to_string(),
        start: d(start),
        end: d(end),
        hours_per_day,
        utilization,
        status: status.to_string(),
        category: Category::classify(Some(job_code)),
    }
}

pub fn record(
    emp_id: &str,
    job_code: &str,
    job_name: &str,
    start: &str,
    end: &str,
    hours_per_day: f64,
) -> RawAssignmentRecord {
    RawAssignmentRecord {
        emp_id: emp_id.to_string(),
        first_name: Some(format!("First{emp_id}")),
        last_name: Some(format!("Last{emp_id}")),
        job_code: Some(job_code.to_string()),
        job_name: Some(job_name.to_string()),
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
        utilization: 100.0,
        status: Some("C".to_string()),
        hours_per_day,
        ..Default::default()
    }
}
