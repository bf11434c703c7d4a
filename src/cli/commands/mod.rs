pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod periods;
pub mod team;
pub mod timeline;

use crate::cli::parser::WindowArgs;
use crate::config::Config;
use crate::core::Core;
use crate::core::ingest::load_records;
use crate::errors::{AppError, AppResult};
use crate::models::{AvailabilityReport, EmployeeReport, Preset, Timeframe, TimelineSelection};
use crate::utils::date::normalize_date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Everything a command handler needs besides its own arguments.
pub struct AppContext {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub today: NaiveDate,
}

/// Load `file` and run the full aggregation for the requested window.
pub(crate) fn load_report(
    file: &str,
    window: &WindowArgs,
    ctx: &AppContext,
) -> AppResult<AvailabilityReport> {
    let records = load_records(&expand_tilde(file))?;
    let calendar = ctx.cfg.holiday_calendar()?;
    let selection = selection_from_args(window, &ctx.cfg)?;

    Ok(Core::build_report(&records, &selection, ctx.today, &calendar))
}

/// Map CLI window flags onto a selection. `--from`/`--to` enable the custom
/// range unless an explicit preset was requested.
pub fn selection_from_args(window: &WindowArgs, cfg: &Config) -> AppResult<TimelineSelection> {
    let preset = match window.timeframe {
        Some(Timeframe::Week) => Preset::Week,
        Some(Timeframe::Month) => Preset::Month,
        Some(Timeframe::Quarter) => Preset::Quarter,
        Some(Timeframe::Custom) | None => cfg.default_timeframe,
    };

    let custom_enabled = match window.timeframe {
        Some(Timeframe::Custom) => true,
        None => window.from.is_some() || window.to.is_some(),
        _ => false,
    };

    if !custom_enabled {
        return Ok(TimelineSelection::preset(preset));
    }

    Ok(TimelineSelection::custom(
        preset,
        parse_cli_date(window.from.as_deref())?,
        parse_cli_date(window.to.as_deref())?,
    ))
}

fn parse_cli_date(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    raw.map(|s| normalize_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())))
        .transpose()
}

/// Restrict the report rows to one employee when `emp` is given.
pub(crate) fn select_employees<'a>(
    report: &'a AvailabilityReport,
    emp: &Option<String>,
) -> AppResult<Vec<&'a EmployeeReport>> {
    match emp {
        Some(id) => report
            .find(id)
            .map(|r| vec![r])
            .ok_or_else(|| AppError::EmployeeNotFound(id.clone())),
        None => Ok(report.employees.iter().collect()),
    }
}
