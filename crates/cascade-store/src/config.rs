//! Store configuration with validation.

use crate::error::{Result, StoreError};
use crate::log_level::LogLevel;

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_LOG_LEVEL_STRING: &str = "info";

const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STATE_ROOT: &str = ".";
const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_READ_TIMEOUT_SECS: u64 = 5;
const DEFAULT_DB_FILENAME: &str = "accounts.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage layout settings
    #[serde(default)]
    pub storage: StorageSettings,

    /// Background persistence settings
    #[serde(default)]
    pub persistence: PersistenceSettings,

    /// Account database settings
    #[serde(default)]
    pub database: DatabaseSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory the per-user state namespace is created under,
    /// relative to the data directory ("." for the data directory itself)
    #[serde(default = "default_state_root")]
    pub root_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceSettings {
    /// Upper bound for a single background write (seconds)
    #[serde(default = "default_write_timeout")]
    pub write_timeout_secs: u64,

    /// Upper bound for a single hydration read (seconds)
    #[serde(default = "default_read_timeout")]
    pub read_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Database filename (relative to data directory)
    #[serde(default = "default_db_filename")]
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: LogLevel,

    /// Colorize terminal output
    #[serde(default = "default_true")]
    pub colored: bool,

    /// Optional log file (relative to data directory)
    #[serde(default)]
    pub file: Option<String>,
}

// === Default Value Functions ===

fn default_state_root() -> String {
    DEFAULT_STATE_ROOT.into()
}
fn default_write_timeout() -> u64 {
    DEFAULT_WRITE_TIMEOUT_SECS
}
fn default_read_timeout() -> u64 {
    DEFAULT_READ_TIMEOUT_SECS
}
fn default_db_filename() -> String {
    DEFAULT_DB_FILENAME.into()
}
fn default_true() -> bool {
    true
}

// === Default Implementations ===

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            persistence: PersistenceSettings::default(),
            database: DatabaseSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            root_dir: default_state_root(),
        }
    }
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            write_timeout_secs: default_write_timeout(),
            read_timeout_secs: default_read_timeout(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            filename: default_db_filename(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
        }
    }
}

// === Configuration Operations ===

impl StoreConfig {
    /// Load config from file, creating default if not exists.
    pub fn load_or_create(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILENAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| StoreError::file_read(config_path.clone(), e))?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| StoreError::config_parse(config_path.clone(), e))?;

            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(data_dir)?;
            Ok(config)
        }
    }

    /// Save config to file atomically.
    ///
    /// Uses write-to-temp-then-rename pattern to prevent
    /// partial writes if the process is interrupted.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join(CONFIG_FILENAME);
        let content =
            toml::to_string_pretty(self).map_err(|e| StoreError::config_invalid(e.to_string()))?;

        // Write atomically via temp file
        let temp_path = config_path.with_extension("toml.tmp");
        std::fs::write(&temp_path, &content)
            .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        std::fs::rename(&temp_path, &config_path)
            .map_err(|e| StoreError::atomic_rename(temp_path.clone(), config_path.clone(), e))?;

        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.storage.root_dir.is_empty() {
            return Err(StoreError::config_invalid(
                "Storage root must not be empty",
            ));
        }

        if Self::escapes_data_dir(&self.storage.root_dir) {
            return Err(StoreError::config_invalid(
                "Storage root must stay inside the data directory",
            ));
        }

        if self.persistence.write_timeout_secs == 0 {
            return Err(StoreError::config_invalid("Write timeout must be > 0"));
        }

        if self.persistence.read_timeout_secs == 0 {
            return Err(StoreError::config_invalid("Read timeout must be > 0"));
        }

        if self.database.filename.is_empty() {
            return Err(StoreError::config_invalid(
                "Database filename must not be empty",
            ));
        }

        if Self::escapes_data_dir(&self.database.filename) {
            return Err(StoreError::config_invalid(
                "Database filename must stay inside the data directory",
            ));
        }

        Ok(())
    }

    fn escapes_data_dir(path: &str) -> bool {
        let path = Path::new(path);
        path.is_absolute()
            || path
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
    }

    // === Derived Values ===

    /// Directory the state namespace is created under.
    pub fn state_root(&self, data_dir: &Path) -> PathBuf {
        if self.storage.root_dir == DEFAULT_STATE_ROOT {
            data_dir.to_path_buf()
        } else {
            data_dir.join(&self.storage.root_dir)
        }
    }

    /// Full path of the account database file.
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database.filename)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.persistence.write_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.persistence.read_timeout_secs)
    }

    /// Log a short summary of the loaded configuration.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  Storage root: {}", self.storage.root_dir);
        info!(
            "  Persistence timeouts: write {}s, read {}s",
            self.persistence.write_timeout_secs, self.persistence.read_timeout_secs
        );
        info!("  Database: {}", self.database.filename);
        info!("  Log level: {}", self.logging.level.as_str());
    }
}
