// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, resolve_output_path};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportRow, daily_rows, employee_rows, period_rows, team_rows};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportKind};
use crate::models::AvailabilityReport;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export of an availability report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one view of `report` to `file`.
    ///
    /// - `kind`: employees | daily | periods | team
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    pub fn export(
        report: &AvailabilityReport,
        kind: ExportKind,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_output_path(file)?;
        ensure_writable(&path, force)?;

        debug!(kind = kind.as_str(), format = format.as_str(), path = %path.display(), "exporting");

        match kind {
            ExportKind::Employees => write_rows(&employee_rows(report), kind, format, &path),
            ExportKind::Daily => write_rows(&daily_rows(report), kind, format, &path),
            ExportKind::Periods => write_rows(&period_rows(report), kind, format, &path),
            ExportKind::Team => write_rows(&team_rows(&report.team), kind, format, &path),
        }
    }
}

fn write_rows<T: ExportRow>(
    rows: &[T],
    kind: ExportKind,
    format: ExportFormat,
    path: &Path,
) -> AppResult<()> {
    if rows.is_empty() {
        warning(format!("No {} rows to export.", kind.as_str()));
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
        ExportFormat::Xlsx => export_xlsx(rows, kind.as_str(), path),
    }
}
