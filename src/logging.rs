//! File logging
//!
//! The terminal belongs to the game while it runs, so log output goes to
//! `~/.termo/termo.log` instead of stderr.

use crate::config::app_dir;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "TERMO_LOG";

/// Log file location, `termo.log` in the working directory without a home
#[must_use]
pub fn log_path() -> PathBuf {
    app_dir().map_or_else(|| PathBuf::from("termo.log"), |dir| dir.join("termo.log"))
}

/// Install the global file subscriber
///
/// `TERMO_LOG` takes precedence over `default_level`. Failing to open the log
/// file leaves logging disabled; the game still runs.
pub fn init(default_level: &str) -> Option<PathBuf> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).ok()?;
    Some(path)
}
