// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::IndexedRecord;
use crate::ui::messages::info;
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Export XLSX with a styled header, banded rows, real date cells and
/// auto-sized columns.
pub(crate) fn export_xlsx(records: &[IndexedRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, item) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };
        let rec = &item.record;

        let text = base_format(bg);
        let date = base_format(bg).set_num_format(DATE_FORMAT);

        worksheet
            .write_with_format(row, 0, item.index as f64, &text)
            .map_err(to_export_error)?;
        write_date(worksheet, row, 1, Some(rec.date), &date, &text)?;

        let texts = [
            (2u16, &rec.company),
            (3, &rec.role),
            (4, &rec.method),
            (5, &rec.contact),
            (6, &rec.status),
        ];
        for (col, value) in texts {
            worksheet
                .write_with_format(row, col, value.as_str(), &text)
                .map_err(to_export_error)?;
            let w = &mut col_widths[col as usize];
            *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
        }

        write_date(worksheet, row, 7, rec.follow_up, &date, &text)?;
        worksheet
            .write_with_format(row, 8, rec.notes.as_str(), &text)
            .map_err(to_export_error)?;
        col_widths[8] = col_widths[8].max(UnicodeWidthStr::width(rec.notes.as_str()));
    }

    // date columns are always "yyyy-mm-dd"
    col_widths[1] = col_widths[1].max(DATE_FORMAT.len());
    col_widths[7] = col_widths[7].max(DATE_FORMAT.len());

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(60) as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn base_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Dates become Excel serials so spreadsheets can sort and filter them;
/// a missing date is written as an empty, styled cell.
fn write_date(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<NaiveDate>,
    date_fmt: &Format,
    blank_fmt: &Format,
) -> AppResult<()> {
    match value {
        Some(d) => worksheet
            .write_with_format(row, col, excel_serial(d), date_fmt)
            .map_err(to_export_error)?,
        None => worksheet
            .write_blank(row, col, blank_fmt)
            .map_err(to_export_error)?,
    };
    Ok(())
}

fn excel_serial(d: NaiveDate) -> f64 {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .map(|epoch| (d - epoch).num_days() as f64)
        .unwrap_or(0.0)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
