// src/export/model.rs

use crate::models::{AvailabilityReport, TeamStats};
use chrono::NaiveDate;
use serde::Serialize;

/// Typed spreadsheet cell. CSV and JSON go through serde instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Flag(bool),
}

impl From<&str> for ExportCell {
    fn from(s: &str) -> Self {
        ExportCell::Text(s.to_string())
    }
}

impl From<&String> for ExportCell {
    fn from(s: &String) -> Self {
        ExportCell::Text(s.clone())
    }
}

impl From<f64> for ExportCell {
    fn from(v: f64) -> Self {
        ExportCell::Number(v)
    }
}

impl From<usize> for ExportCell {
    fn from(v: usize) -> Self {
        ExportCell::Number(v as f64)
    }
}

impl From<u32> for ExportCell {
    fn from(v: u32) -> Self {
        ExportCell::Number(f64::from(v))
    }
}

impl From<NaiveDate> for ExportCell {
    fn from(d: NaiveDate) -> Self {
        ExportCell::Date(d)
    }
}

impl From<bool> for ExportCell {
    fn from(b: bool) -> Self {
        ExportCell::Flag(b)
    }
}

/// Flat row shape shared by the CSV / JSON / XLSX writers.
pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<ExportCell>;
}

/// One row per employee: summary rates plus the windowed totals.
#[derive(Serialize, Clone, Debug)]
pub struct EmployeeExport {
    pub emp_id: String,
    pub name: String,
    pub status: String,
    pub assignments: usize,
    pub projects: usize,
    pub chargeable_hours: f64,
    pub absence_hours: f64,
    pub other_hours: f64,
    pub true_utilization_rate: f64,
    pub net_available_hours: f64,
    pub available_capacity_hours: f64,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub window_working_days: u32,
    pub window_chargeable_hours: f64,
    pub window_net_available_hours: f64,
    pub window_utilization_rate: f64,
}

impl ExportRow for EmployeeExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "emp_id",
            "name",
            "status",
            "assignments",
            "projects",
            "chargeable_hours",
            "absence_hours",
            "other_hours",
            "true_utilization_rate",
            "net_available_hours",
            "available_capacity_hours",
            "window_start",
            "window_end",
            "window_working_days",
            "window_chargeable_hours",
            "window_net_available_hours",
            "window_utilization_rate",
        ]
    }

    fn to_row(&self) -> Vec<ExportCell> {
        vec![
            (&self.emp_id).into(),
            (&self.name).into(),
            (&self.status).into(),
            self.assignments.into(),
            self.projects.into(),
            self.chargeable_hours.into(),
            self.absence_hours.into(),
            self.other_hours.into(),
            self.true_utilization_rate.into(),
            self.net_available_hours.into(),
            self.available_capacity_hours.into(),
            self.window_start.into(),
            self.window_end.into(),
            self.window_working_days.into(),
            self.window_chargeable_hours.into(),
            self.window_net_available_hours.into(),
            self.window_utilization_rate.into(),
        ]
    }
}

/// One row per employee and calendar day of the window.
#[derive(Serialize, Clone, Debug)]
pub struct DailyExport {
    pub emp_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub chargeable_hours: f64,
    pub absence_hours: f64,
    pub other_hours: f64,
    pub net_available_hours: f64,
    pub utilization_rate: f64,
    pub available_capacity_hours: f64,
    pub working_day: bool,
    pub weekend: bool,
    pub public_holiday: bool,
}

impl ExportRow for DailyExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "emp_id",
            "name",
            "date",
            "chargeable_hours",
            "absence_hours",
            "other_hours",
            "net_available_hours",
            "utilization_rate",
            "available_capacity_hours",
            "working_day",
            "weekend",
            "public_holiday",
        ]
    }

    fn to_row(&self) -> Vec<ExportCell> {
        vec![
            (&self.emp_id).into(),
            (&self.name).into(),
            self.date.into(),
            self.chargeable_hours.into(),
            self.absence_hours.into(),
            self.other_hours.into(),
            self.net_available_hours.into(),
            self.utilization_rate.into(),
            self.available_capacity_hours.into(),
            self.working_day.into(),
            self.weekend.into(),
            self.public_holiday.into(),
        ]
    }
}

/// One row per consolidated period.
#[derive(Serialize, Clone, Debug)]
pub struct PeriodExport {
    pub emp_id: String,
    pub name: String,
    pub job_name: String,
    pub job_code: String,
    pub category: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub hours_per_day: f64,
    pub utilization: f64,
    pub status: String,
    pub provisional: bool,
}

impl ExportRow for PeriodExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "emp_id",
            "name",
            "job_name",
            "job_code",
            "category",
            "start",
            "end",
            "hours_per_day",
            "utilization",
            "status",
            "provisional",
        ]
    }

    fn to_row(&self) -> Vec<ExportCell> {
        vec![
            (&self.emp_id).into(),
            (&self.name).into(),
            (&self.job_name).into(),
            (&self.job_code).into(),
            (&self.category).into(),
            self.start.into(),
            self.end.into(),
            self.hours_per_day.into(),
            self.utilization.into(),
            (&self.status).into(),
            self.provisional.into(),
        ]
    }
}

/// Team statistics flattened to metric/value pairs.
#[derive(Serialize, Clone, Debug)]
pub struct TeamMetricExport {
    pub metric: String,
    pub value: f64,
}

impl ExportRow for TeamMetricExport {
    fn headers() -> Vec<&'static str> {
        vec!["metric", "value"]
    }

    fn to_row(&self) -> Vec<ExportCell> {
        vec![(&self.metric).into(), self.value.into()]
    }
}

pub(crate) fn employee_rows(report: &AvailabilityReport) -> Vec<EmployeeExport> {
    report
        .employees
        .iter()
        .map(|r| {
            let e = &r.employee;
            EmployeeExport {
                emp_id: e.emp_id.clone(),
                name: e.name.clone(),
                status: e.status().label().to_string(),
                assignments: e.assignments.len(),
                projects: e.project_count,
                chargeable_hours: e.chargeable_hours,
                absence_hours: e.absence_hours,
                other_hours: e.other_hours,
                true_utilization_rate: e.summary.true_utilization_rate,
                net_available_hours: e.summary.net_available_hours,
                available_capacity_hours: e.summary.available_capacity_hours,
                window_start: report.window.start,
                window_end: report.window.end,
                window_working_days: r.timeline.working_days,
                window_chargeable_hours: r.timeline.chargeable_hours,
                window_net_available_hours: r.timeline.net_available_hours,
                window_utilization_rate: r.timeline.utilization_rate,
            }
        })
        .collect()
}

pub(crate) fn daily_rows(report: &AvailabilityReport) -> Vec<DailyExport> {
    report
        .employees
        .iter()
        .flat_map(|r| {
            r.timeline.daily.iter().map(move |d| DailyExport {
                emp_id: r.employee.emp_id.clone(),
                name: r.employee.name.clone(),
                date: d.date,
                chargeable_hours: d.chargeable_hours,
                absence_hours: d.absence_hours,
                other_hours: d.other_hours,
                net_available_hours: d.net_available_hours,
                utilization_rate: d.utilization_rate,
                available_capacity_hours: d.available_capacity_hours,
                working_day: d.is_working_day,
                weekend: d.is_weekend,
                public_holiday: d.is_public_holiday,
            })
        })
        .collect()
}

pub(crate) fn period_rows(report: &AvailabilityReport) -> Vec<PeriodExport> {
    let mut rows = Vec::new();

    for r in &report.employees {
        for job in &r.jobs {
            for p in &job.periods {
                rows.push(PeriodExport {
                    emp_id: r.employee.emp_id.clone(),
                    name: r.employee.name.clone(),
                    job_name: job.job_name.clone(),
                    job_code: job.job_code.clone(),
                    category: p.category.as_str().to_string(),
                    start: p.start,
                    end: p.end,
                    hours_per_day: p.hours_per_day,
                    utilization: p.utilization,
                    status: p.status.clone(),
                    provisional: p.has_provisional,
                });
            }
        }
    }

    rows
}

pub(crate) fn team_rows(team: &TeamStats) -> Vec<TeamMetricExport> {
    let metric = |name: &str, value: f64| TeamMetricExport {
        metric: name.to_string(),
        value,
    };

    let mut rows = vec![
        metric("total", team.total as f64),
        metric("available", team.available as f64),
        metric("partially_booked", team.partially_booked as f64),
        metric("fully_booked", team.fully_booked as f64),
        metric("total_chargeable_hours", team.total_chargeable_hours),
        metric("total_net_available_hours", team.total_net_available_hours),
        metric("overall_utilization_rate", team.overall_utilization_rate),
    ];

    for (category, b) in &team.category_breakdown {
        rows.push(metric(&format!("category.{}.count", category.as_str()), b.count as f64));
        rows.push(metric(
            &format!("category.{}.total_hours", category.as_str()),
            b.total_hours,
        ));
    }

    rows
}
