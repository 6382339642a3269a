//! Application Record Store: schema, mutations and derived reports.
//!
//! Every operation is a single synchronous pass over the whole table:
//! load → compute → (save). Display indices are positional and 1-based.

use crate::core::filter::ApplicationFilter;
use crate::core::stats;
use crate::errors::{AppError, AppResult};
use crate::models::{ApplicationRecord, IndexedRecord, NewApplication, StatsReport};
use crate::table::{CsvTable, TableBackend};
use crate::utils::date;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct ApplicationStore<B: TableBackend> {
    backend: B,
}

impl ApplicationStore<CsvTable> {
    /// Open (and create if needed) the CSV table at `path`.
    pub fn open<P: Into<PathBuf>>(path: P) -> AppResult<Self> {
        let mut store = Self::new(CsvTable::new(path));
        store.initialize()?;
        Ok(store)
    }
}

impl<B: TableBackend> ApplicationStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Ensure the backing table exists with its header. Idempotent.
    pub fn initialize(&mut self) -> AppResult<()> {
        self.backend.initialize()
    }

    /// Every record in insertion order, numbered 1..N.
    pub fn list_all(&self) -> AppResult<Vec<IndexedRecord>> {
        Ok(indexed(self.backend.load()?))
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.backend.load()?.len())
    }

    /// Record currently shown at `index`.
    pub fn get(&self, index: usize) -> AppResult<IndexedRecord> {
        let records = self.backend.load()?;
        check_index(index, records.len())?;

        Ok(IndexedRecord {
            index,
            record: records[index - 1].clone(),
        })
    }

    /// Normalize `input` against today's date, append it and persist.
    pub fn add(&mut self, input: &NewApplication) -> AppResult<ApplicationRecord> {
        self.add_as_of(input, date::today())
    }

    /// Same as [`add`](Self::add) with an explicit "today" for the date fallback.
    pub fn add_as_of(
        &mut self,
        input: &NewApplication,
        today: NaiveDate,
    ) -> AppResult<ApplicationRecord> {
        let record = input.normalize(today);

        let mut records = self.backend.load()?;
        records.push(record.clone());
        self.backend.save(&records)?;

        Ok(record)
    }

    /// Remove the record at the 1-based `index` and return it.
    /// Out of range leaves the table untouched.
    pub fn delete(&mut self, index: usize) -> AppResult<ApplicationRecord> {
        let mut records = self.backend.load()?;
        check_index(index, records.len())?;

        let removed = records.remove(index - 1);
        self.backend.save(&records)?;

        Ok(removed)
    }

    /// Records whose follow-up date is set and on or before `as_of`.
    pub fn pending_follow_ups(&self, as_of: NaiveDate) -> AppResult<Vec<IndexedRecord>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|r| r.record.is_follow_up_due(as_of))
            .collect())
    }

    /// Records matching `filter`, keeping their store indices.
    pub fn filter(&self, filter: &ApplicationFilter) -> AppResult<Vec<IndexedRecord>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|r| filter.matches(&r.record))
            .collect())
    }

    /// Summary over all records. Fails with `EmptyStore` on an empty table.
    pub fn stats(&self, as_of: NaiveDate) -> AppResult<StatsReport> {
        let records = self.backend.load()?;
        stats::build_report(&records, as_of)
    }
}

fn indexed(records: Vec<ApplicationRecord>) -> Vec<IndexedRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| IndexedRecord {
            index: i + 1,
            record,
        })
        .collect()
}

fn check_index(index: usize, count: usize) -> AppResult<()> {
    if index < 1 || index > count {
        return Err(AppError::IndexOutOfRange { index, count });
    }
    Ok(())
}
