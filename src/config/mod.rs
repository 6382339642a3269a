use crate::errors::{AppError, AppResult};
use crate::models::Status;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "JOBTRACKER_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the applications table (CSV).
    #[serde(default = "default_table")]
    pub table: String,
    /// Path of the audit log. Defaults to the table path with a `.log` extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<String>,
    /// Status used by `add` when none is given.
    #[serde(default = "default_status")]
    pub default_status: String,
    /// Suggested statuses offered by the interactive menu.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
}

fn default_table() -> String {
    Config::table_file().to_string_lossy().to_string()
}

fn default_status() -> String {
    Status::Applied.as_str().to_string()
}

fn default_statuses() -> Vec<String> {
    Status::ALL.iter().map(|s| s.as_str().to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: default_table(),
            audit_log: None,
            default_status: default_status(),
            statuses: default_statuses(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV) {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jobtracker")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".jobtracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobtracker.conf")
    }

    /// Return the default path of the applications table
    pub fn table_file() -> PathBuf {
        Self::config_dir().join("applications.csv")
    }

    pub fn table_path(&self) -> PathBuf {
        expand_tilde(&self.table)
    }

    pub fn audit_log_path(&self) -> PathBuf {
        match &self.audit_log {
            Some(p) => expand_tilde(p),
            None => self.table_path().with_extension("log"),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Create the config directory and file.
    ///
    /// - `custom_table`: table path to store in the config (relative paths are
    ///   resolved against the config directory)
    /// - `is_test`: do not write the config file
    pub fn init_all(custom_table: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let table_path = match custom_table {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::table_file(),
        };

        let config = Config {
            table: table_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
