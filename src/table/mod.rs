//! Persistence backends for the applications table.
//!
//! The store only talks to [`TableBackend`]; the CSV file is the production
//! backend, the in-memory table is used by tests.

pub mod csv_table;
pub mod log;
pub mod memory;

pub use csv_table::CsvTable;
pub use memory::MemoryTable;

use crate::errors::AppResult;
use crate::models::ApplicationRecord;

/// Whole-table persistence: every mutation loads the full sequence and saves
/// it back. No locking is provided; callers must serialize access.
pub trait TableBackend {
    /// Make sure the table exists with its header. Must not touch an existing
    /// non-empty table.
    fn initialize(&mut self) -> AppResult<()>;

    /// Load every record in stored order.
    fn load(&self) -> AppResult<Vec<ApplicationRecord>>;

    /// Replace the stored table with `records`.
    fn save(&mut self, records: &[ApplicationRecord]) -> AppResult<()>;

    /// Human readable location, used in messages.
    fn describe(&self) -> String;
}
