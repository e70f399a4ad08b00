//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Collect logging and store options in one validated value.
//! - Keep environment access behind an injectable lookup for tests.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-invalid values are errors.

use crate::logging::{default_log_level, normalize_level};
use crate::store::reminder_store::{CompletedTieBreak, StoreConfig};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "REMINDLIST_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "REMINDLIST_LOG_DIR";
pub const ENV_COMPLETED_TIE_BREAK: &str = "REMINDLIST_COMPLETED_TIE_BREAK";

/// Errors from configuration resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
    InvalidTieBreak(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => {
                write!(f, "{ENV_LOG_LEVEL}: unsupported log level `{value}`")
            }
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR}: expected an absolute path, got `{value}`")
            }
            Self::InvalidTieBreak(value) => write!(
                f,
                "{ENV_COMPLETED_TIE_BREAK}: expected creation|completion, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Normalized level name.
    pub log_level: &'static str,
    /// `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
    pub completed_tie_break: CompletedTieBreak,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            completed_tie_break: CompletedTieBreak::default(),
        }
    }
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level =
                normalize_level(&level).map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(path);
        }
        if let Some(value) = read(ENV_COMPLETED_TIE_BREAK) {
            config.completed_tie_break =
                CompletedTieBreak::parse(&value).ok_or(ConfigError::InvalidTieBreak(value))?;
        }

        Ok(config)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            completed_tie_break: self.completed_tie_break,
        }
    }
}
