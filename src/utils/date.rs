use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})$").expect("valid regex"));

static DOT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{2}|\d{4})$").expect("valid regex"));

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Normalize a date string to a calendar date.
///
/// Accepted shapes:
/// - `YYYY-MM-DD`  (ISO, pass-through)
/// - `MM/DD/YY` or `MM/DD/YYYY`
/// - `DD.MM.YYYY` (or `DD.MM.YY`)
///
/// Two-digit years are read as `20YY`. Anything else, or a combination that
/// is not a real calendar day, yields `None`.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(c) = SLASH_DATE.captures(s) {
        return ymd(&c[3], &c[1], &c[2]);
    }

    if let Some(c) = DOT_DATE.captures(s) {
        return ymd(&c[3], &c[2], &c[1]);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Canonical `YYYY-MM-DD` form of [`normalize_date`].
pub fn normalize_date_str(raw: &str) -> Option<String> {
    normalize_date(raw).map(|d| d.format("%Y-%m-%d").to_string())
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Inclusive iterator over calendar days `[start, end]`.
#[derive(Debug, Clone)]
pub struct DayIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DayIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.checked_add_days(Days::new(1));
        Some(current)
    }
}

/// Every day from `start` to `end`, both included. Empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> DayIter {
    DayIter {
        next: Some(start),
        end,
    }
}

/// The calendar day after `d`, saturating at the last representable date.
pub fn next_day(d: NaiveDate) -> NaiveDate {
    d.succ_opt().unwrap_or(d)
}
