//! Configuration loading for the linkdeck TUI.
//!
//! Every field may be omitted from the file; omitted fields take the
//! built-in defaults. Unknown fields are rejected.

use linkdeck_storage::WriteMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "LINKDECK_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    pub data_path: PathBuf,
    pub write_mode: WriteMode,
    pub ui_state_path: PathBuf,
    pub error_log_path: PathBuf,
    pub log_filter: String,
    pub tick_rate_ms: u64,
    pub notification_ttl_ms: u64,
    pub confirm_deletes: bool,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("categories.json"),
            write_mode: WriteMode::Overwrite,
            ui_state_path: PathBuf::from("linkdeck-ui.json"),
            error_log_path: PathBuf::from("linkdeck.log"),
            log_filter: "linkdeck=info".to_string(),
            tick_rate_ms: 250,
            notification_ttl_ms: 4_000,
            confirm_deletes: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "midnight".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    /// Load from `--config <path>` or `LINKDECK_CONFIG`, else use defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.ui_state_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ui_state_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.error_log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "error_log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.data_path == self.ui_state_path || self.data_path == self.error_log_path {
            return Err(ConfigError::InvalidValue {
                field: "data_path",
                reason: "must differ from ui_state_path and error_log_path".to_string(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_filter",
                reason: "must not be empty".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.notification_ttl_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "notification_ttl_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "midnight" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'midnight' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV).ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
