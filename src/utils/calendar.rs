//! Weekend and public-holiday decisions.
//!
//! Holidays are stored as month-day pairs and apply to every year.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// French public holidays (2025 dates for the movable feasts).
pub const DEFAULT_PUBLIC_HOLIDAYS: [&str; 9] = [
    "04-21", // Easter Monday
    "05-01", // Labour Day
    "05-08", // Victory in Europe Day
    "05-29", // Ascension Day
    "06-09", // Whit Monday
    "07-14", // Bastille Day
    "08-15", // Assumption
    "11-11", // Armistice
    "12-25", // Christmas
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    month_days: BTreeSet<(u32, u32)>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::from_month_days(DEFAULT_PUBLIC_HOLIDAYS).unwrap_or_else(|_| Self::empty())
    }
}

impl HolidayCalendar {
    pub fn empty() -> Self {
        Self {
            month_days: BTreeSet::new(),
        }
    }

    /// Build a calendar from `MM-DD` strings.
    pub fn from_month_days<I, S>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let month_days = entries
            .into_iter()
            .map(|e| parse_month_day(e.as_ref()))
            .collect::<AppResult<BTreeSet<_>>>()?;

        Ok(Self { month_days })
    }

    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.month_days.contains(&(date.month(), date.day()))
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_public_holiday(date)
    }

    pub fn len(&self) -> usize {
        self.month_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.month_days.is_empty()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parse `MM-DD`. Feb 29 is accepted.
pub fn parse_month_day(s: &str) -> AppResult<(u32, u32)> {
    let invalid = || AppError::InvalidHoliday(s.to_string());

    let (m, d) = s.trim().split_once('-').ok_or_else(invalid)?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;

    // 2000 is a leap year, so every real month-day is valid there
    NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;

    Ok((month, day))
}
