//! Configuration file handling
//!
//! The configuration file lives at `~/.termo/config.toml`; every key is
//! optional:
//!
//! ```toml
//! # Delay between revealing two cells of a submitted row
//! reveal_delay_ms = 200
//!
//! # Pause after the reveal before the statistics open
//! result_delay_ms = 1000
//!
//! # Event loop tick
//! tick_ms = 50
//!
//! # Start with the header visible
//! show_header = false
//!
//! # Start with the word of the day (false: random word)
//! daily = true
//!
//! # Custom word list, one word per line
//! word_list = "/path/to/words.txt"
//!
//! # Log level when TERMO_LOG is unset
//! log_level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Directory under the home directory holding config and log files
pub const APP_DIR: &str = ".termo";

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reveal_delay_ms: u64,
    pub result_delay_ms: u64,
    pub tick_ms: u64,
    pub show_header: bool,
    pub daily: bool,
    pub word_list: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 200,
            result_delay_ms: 1000,
            tick_ms: 50,
            show_header: false,
            daily: true,
            word_list: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load the default config file
    ///
    /// Defaults when no home directory is known or the file does not exist.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::default_path().map_or_else(|| Ok(Self::default()), Self::load_if_exists)
    }

    /// Load `path`, or the defaults when it does not exist
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load_if_exists(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load a specific config file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns the TOML error for malformed input or mistyped keys.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `~/.termo/config.toml`, if a home directory is known
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        app_dir().map(|dir| dir.join("config.toml"))
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[must_use]
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }

    /// Event loop tick, never zero
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// `~/.termo`, if a home directory is known
#[must_use]
pub fn app_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.reveal_delay(), Duration::from_millis(200));
        assert_eq!(config.result_delay(), Duration::from_secs(1));
        assert!(config.daily);
        assert!(!config.show_header);
        assert!(config.word_list.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("reveal_delay_ms = 50\nshow_header = true\n").unwrap();
        assert_eq!(config.reveal_delay_ms, 50);
        assert!(config.show_header);
        assert_eq!(config.result_delay_ms, 1000);
        assert!(config.daily);
    }

    #[test]
    fn word_list_path() {
        let config = Config::parse("word_list = \"/tmp/words.txt\"\ndaily = false").unwrap();
        assert_eq!(config.word_list, Some(PathBuf::from("/tmp/words.txt")));
        assert!(!config.daily);
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(Config::parse("reveal_delay_ms = \"fast\"").is_err());
        assert!(Config::parse("show_header = ").is_err());
    }

    #[test]
    fn tick_is_never_zero() {
        let config = Config::parse("tick_ms = 0").unwrap();
        assert_eq!(config.tick(), Duration::from_millis(1));
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let err = Config::load_from("/nonexistent/termo/config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("termo-config-{}.toml", std::process::id()));
        fs::write(&path, "tick_ms = 20\n").unwrap();
        let config = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().tick(), Duration::from_millis(20));
    }

    #[test]
    fn missing_optional_file_is_default() {
        let config = Config::load_if_exists("/nonexistent/termo/config.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_optional_file_is_reported() {
        let path = std::env::temp_dir().join(format!("termo-bad-{}.toml", std::process::id()));
        fs::write(&path, "reveal_delay_ms = \"fast\"\n").unwrap();
        let result = Config::load_if_exists(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            word_list: Some(PathBuf::from("words.txt")),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }
}
