//! Configuration loading
//!
//! Read from `todo-db.toml` in the application config directory. Every field
//! has a default, so a missing file or a missing section is not an error.

use crate::error::{StoreError, StoreResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Config file name inside the application config directory
pub const CONFIG_FILE: &str = "todo-db.toml";

/// Main configuration struct
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Storage settings
    #[serde(default)]
    pub store: StoreSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// How long a connection waits on a lock before reporting busy
    pub busy_timeout_ms: u64,
    /// Read retry policy for view refreshes
    pub retry: RetryPolicy,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 250,
            retry: RetryPolicy::default(),
        }
    }
}

impl StoreSettings {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

/// Read retry policy.
///
/// The default retries immediately and without limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total read attempts before giving up; `None` retries forever
    pub max_attempts: Option<u32>,
    /// Pause between attempts
    pub backoff_ms: u64,
}

impl RetryPolicy {
    /// Retry forever with no pause
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Give up after `max_attempts` reads
    pub fn bounded(max_attempts: u32, backoff_ms: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            backoff_ms,
        }
    }

    /// Whether `attempts` reads have used up the policy
    pub fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }

    pub fn backoff(&self) -> Option<Duration> {
        (self.backoff_ms > 0).then(|| Duration::from_millis(self.backoff_ms))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> StoreResult<Self> {
        toml::from_str(content).map_err(|e| StoreError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.store.busy_timeout_ms, 250);
        assert_eq!(config.store.retry, RetryPolicy::unbounded());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse(
            r#"
            [store.retry]
            max_attempts = 5
            backoff_ms = 20

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.busy_timeout_ms, 250);
        assert_eq!(config.store.retry, RetryPolicy::bounded(5, 20));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        let err = Config::parse("[store]\nbusy_timeout_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.store.busy_timeout_ms, 250);
    }

    #[test]
    fn test_retry_policy_exhaustion() {
        assert!(!RetryPolicy::unbounded().exhausted(u32::MAX));
        let bounded = RetryPolicy::bounded(3, 0);
        assert!(!bounded.exhausted(2));
        assert!(bounded.exhausted(3));
        assert_eq!(bounded.backoff(), None);
        assert_eq!(
            RetryPolicy::bounded(3, 15).backoff(),
            Some(Duration::from_millis(15))
        );
    }
}
