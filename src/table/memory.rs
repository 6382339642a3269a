use crate::errors::AppResult;
use crate::models::ApplicationRecord;
use crate::table::TableBackend;

/// Ephemeral backend keeping the table in a `Vec`.
#[derive(Debug, Default, Clone)]
pub struct MemoryTable {
    records: Vec<ApplicationRecord>,
    saves: usize,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ApplicationRecord>) -> Self {
        Self { records, saves: 0 }
    }

    /// Number of times the table has been persisted.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl TableBackend for MemoryTable {
    fn initialize(&mut self) -> AppResult<()> {
        Ok(())
    }

    fn load(&self) -> AppResult<Vec<ApplicationRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[ApplicationRecord]) -> AppResult<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
