//! Spreadsheet / CSV loading into raw assignment records.
//!
//! Columns are positional:
//! `EmpID, LastName, FirstName, JobNo, JobName, StartDate, EndDate,
//! Utilization, Status, Hours, StartDateParsed, EndDateParsed, UtilPercent,
//! WorkingDays, HoursTotal, HoursPerDay`. The first row is a header.

use crate::errors::{AppError, AppResult};
use crate::models::RawAssignmentRecord;
use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load records from a `.csv`, `.xlsx`, `.xls`, `.xlsm` or `.ods` file.
pub fn load_records(path: &Path) -> AppResult<Vec<RawAssignmentRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?)?,
        "xlsx" | "xls" | "xlsm" | "ods" => read_workbook(path)?,
        other => return Err(AppError::UnsupportedFormat(other.to_string())),
    };

    info!(file = %path.display(), records = records.len(), "records loaded");
    Ok(records)
}

/// Parse CSV content from any reader. Bytes that are not valid UTF-8
/// (legacy Windows-1252 exports) become U+FFFD instead of failing the file.
pub fn read_csv<R: Read>(reader: R) -> AppResult<Vec<RawAssignmentRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.byte_records() {
        let row = row?;
        let cells: Vec<Cow<'_, str>> = row.iter().map(String::from_utf8_lossy).collect();
        if let Some(record) = record_from_cells(&cells) {
            records.push(record);
        }
    }

    Ok(records)
}

fn read_workbook(path: &Path) -> AppResult<Vec<RawAssignmentRecord>> {
    let mut workbook = open_workbook_auto(path)?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(AppError::UnsupportedFormat("workbook has no sheets".to_string()));
    };
    debug!(sheet = %sheet_name, "reading first sheet");

    let range = workbook.worksheet_range(&sheet_name)?;

    let records = range
        .rows()
        .skip(1)
        .filter_map(|row| {
            let cells: Vec<String> = row.iter().map(cell_to_string).collect();
            record_from_cells(&cells)
        })
        .collect();

    Ok(records)
}

/// Skip rows whose cells are all blank.
fn record_from_cells<S: AsRef<str>>(cells: &[S]) -> Option<RawAssignmentRecord> {
    if cells.iter().all(|c| c.as_ref().trim().is_empty()) {
        return None;
    }
    Some(RawAssignmentRecord::from_cells(cells))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.date().format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) => s.get(..10).unwrap_or(s.as_str()).to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
