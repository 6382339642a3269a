pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod followups;
pub mod init;
pub mod list;
pub mod log;
pub mod menu;
pub mod stats;

use crate::config::Config;
use crate::core::ApplicationStore;
use crate::errors::AppResult;
use crate::table::CsvTable;
use crate::table::log as audit_log;
use crate::ui::messages::warning;

/// Open the configured table, creating it with its header on first use.
pub(crate) fn open_store(cfg: &Config) -> AppResult<ApplicationStore<CsvTable>> {
    ApplicationStore::open(cfg.table_path())
}

/// Record an operation in the audit log (non-blocking).
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit_log::audit(&cfg.audit_log_path(), operation, target, message) {
        warning(format!("Failed to write audit log: {}", e));
    }
}
