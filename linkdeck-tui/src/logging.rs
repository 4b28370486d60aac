//! Structured logging to a file.
//!
//! The terminal is owned by the UI, so log records go to
//! `error_log_path` as JSON lines. `RUST_LOG` overrides the configured
//! filter.

use crate::config::TuiConfig;
use crate::error::TuiError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(config: &TuiConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.error_log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.error_log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| TuiError::Logging(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| TuiError::Logging(format!("Failed to init subscriber: {}", e)))?;

    tracing::info!(
        data_path = %config.data_path.display(),
        write_mode = ?config.write_mode,
        "Logging initialized"
    );
    Ok(())
}
