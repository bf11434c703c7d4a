// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_FORMAT, excel_serial};
use crate::export::model::{ExportCell, ExportRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_EVEN: u32 = 0xEAF3FB;
const BAND_ODD: u32 = 0xFFFFFF;

/// Write `rows` to a single styled sheet named `sheet`: bold header row,
/// banded body, frozen header and columns sized to their content.
pub(crate) fn export_xlsx<T: ExportRow>(rows: &[T], sheet: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).map_err(xlsx_error)?;

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(xlsx_error)?;
        workbook.save(path).map_err(xlsx_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = T::headers();
    let mut widths = write_header(worksheet, &headers)?;

    for (i, item) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = if i % 2 == 0 { BAND_EVEN } else { BAND_ODD };

        for (col, cell) in item.to_row().iter().enumerate() {
            let shown = write_cell(worksheet, row, col as u16, cell, Color::RGB(band))?;
            if let Some(w) = widths.get_mut(col) {
                *w = (*w).max(shown);
            }
        }
    }

    for (col, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *w as f64 + 2.0)
            .map_err(xlsx_error)?;
    }

    workbook.save(path).map_err(xlsx_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Returns the initial column widths.
fn write_header(worksheet: &mut Worksheet, headers: &[&str]) -> AppResult<Vec<usize>> {
    let format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &format)
            .map_err(xlsx_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    Ok(headers.iter().map(|h| h.width()).collect())
}

/// Write one typed cell and return its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &ExportCell,
    bg: Color,
) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let width = match cell {
        ExportCell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base)
                .map_err(xlsx_error)?;
            s.width()
        }
        ExportCell::Number(n) => {
            let format = base.set_align(FormatAlign::Right).set_num_format("0.0#");
            worksheet
                .write_with_format(row, col, *n, &format)
                .map_err(xlsx_error)?;
            format!("{n:.2}").len()
        }
        ExportCell::Date(d) => {
            worksheet
                .write_with_format(row, col, excel_serial(*d), &base.set_num_format(DATE_FORMAT))
                .map_err(xlsx_error)?;
            DATE_FORMAT.len()
        }
        ExportCell::Flag(b) => {
            worksheet
                .write_with_format(row, col, *b, &base.set_align(FormatAlign::Center))
                .map_err(xlsx_error)?;
            5
        }
    };

    Ok(width)
}

fn xlsx_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}
