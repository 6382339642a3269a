//! CSV file backend: one header row plus one row per application.
//!
//! Follow-up text that is not a `YYYY-MM-DD` date (e.g. typed by hand into
//! the file) loads as a blank follow-up. Tables are rewritten whole, so the
//! next add or delete replaces that text with an empty field.

use crate::errors::{AppError, AppResult};
use crate::models::{ApplicationRecord, COLUMNS};
use crate::table::TableBackend;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
}

impl CsvTable {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or zero-length file.
    fn is_blank(&self) -> AppResult<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

impl TableBackend for CsvTable {
    fn initialize(&mut self) -> AppResult<()> {
        if !self.is_blank()? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        self.save(&[])
    }

    fn load(&self) -> AppResult<Vec<ApplicationRecord>> {
        // A missing file is a read failure; an empty one is an empty store.
        if fs::metadata(&self.path)?.len() == 0 {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let headers = rdr.headers()?.clone();
        if !headers.iter().map(str::trim).eq(COLUMNS.iter().copied()) {
            return Err(AppError::Schema(format!(
                "unexpected header in {}: [{}] (expected [{}])",
                self.path.display(),
                headers.iter().collect::<Vec<_>>().join(", "),
                COLUMNS.join(", ")
            )));
        }

        let mut out = Vec::new();
        for row in rdr.deserialize() {
            let rec: ApplicationRecord = row?;
            out.push(rec);
        }
        Ok(out)
    }

    fn save(&mut self, records: &[ApplicationRecord]) -> AppResult<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        wtr.write_record(COLUMNS)?;
        for rec in records {
            wtr.serialize(rec)?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
