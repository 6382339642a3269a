//! Unified application error type.
//! All modules (table, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Table schema error: {0}")]
    Schema(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Invalid application number {index}: the store holds {count} application(s)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("No applications found")]
    EmptyStore,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the error comes from reading or writing the backing table.
    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Csv(_) | AppError::Schema(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
