//! Detect keys missing from an existing configuration file.
//!
//! Missing keys are filled with defaults on load; `config --check` reports
//! them and `config --migrate` writes them back to the file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

const KNOWN_KEYS: [&str; 3] = ["table", "default_status", "statuses"];

/// Keys present in the defaults but absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(KNOWN_KEYS.to_vec());
    };

    Ok(KNOWN_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Rewrite the file with every key present. Returns true when it changed.
pub fn fill_missing(path: &Path) -> AppResult<bool> {
    if missing_keys(path)?.is_empty() {
        return Ok(false);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;
    Ok(true)
}
