// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ApplicationExport;
use crate::export::xlsx::export_xlsx;
use crate::models::IndexedRecord;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `records` to `file`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is only replaced with `force` or after confirmation
    /// - returns false when there was nothing to export
    pub fn export(
        records: &[IndexedRecord],
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<bool> {
        if !file.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                file.display()
            )));
        }

        if records.is_empty() {
            warning("No applications to export.");
            return Ok(false);
        }

        ensure_writable(file, force)?;

        match format {
            ExportFormat::Csv => export_csv(&to_rows(records), file)?,
            ExportFormat::Json => export_json(&to_rows(records), file)?,
            ExportFormat::Xlsx => export_xlsx(records, file)?,
        }

        Ok(true)
    }
}

fn to_rows(records: &[IndexedRecord]) -> Vec<ApplicationExport> {
    records.iter().map(ApplicationExport::from).collect()
}
