//! Error types for todo-store

use thiserror::Error;

/// Storage failures, one variant per failure class
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database could not be opened
    #[error("unable to open database: {reason}")]
    Open { code: Option<i32>, reason: String },

    /// Another connection prevents the schema upgrade
    #[error("database is blocked by another connection, please reload")]
    Blocked { code: Option<i32> },

    /// An add or update was rejected
    #[error("unable to write record: {reason}")]
    Write { code: Option<i32>, reason: String },

    /// Reading the collection failed
    #[error("unable to read records: {reason}")]
    Read { code: Option<i32>, reason: String },

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// A storage task panicked or was cancelled
    #[error("storage task failed: {0}")]
    Task(String),
}

impl StoreError {
    pub(crate) fn open(err: impl Into<Cause>) -> Self {
        let cause = err.into();
        StoreError::Open {
            code: cause.code,
            reason: cause.reason,
        }
    }

    pub(crate) fn write(err: impl Into<Cause>) -> Self {
        let cause = err.into();
        StoreError::Write {
            code: cause.code,
            reason: cause.reason,
        }
    }

    pub(crate) fn read(err: impl Into<Cause>) -> Self {
        let cause = err.into();
        StoreError::Read {
            code: cause.code,
            reason: cause.reason,
        }
    }

    /// SQLite extended result code, when the failure came from the engine
    pub fn code(&self) -> Option<i32> {
        match self {
            StoreError::Open { code, .. }
            | StoreError::Blocked { code }
            | StoreError::Write { code, .. }
            | StoreError::Read { code, .. } => *code,
            StoreError::Config(_) | StoreError::Task(_) => None,
        }
    }

    /// Only a blocked database is surfaced to the user
    pub fn is_blocked(&self) -> bool {
        matches!(self, StoreError::Blocked { .. })
    }
}

/// Underlying failure reduced to a result code and message
pub(crate) struct Cause {
    code: Option<i32>,
    reason: String,
}

impl From<rusqlite::Error> for Cause {
    fn from(err: rusqlite::Error) -> Self {
        Self {
            code: err.sqlite_error().map(|e| e.extended_code),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Cause {
    fn from(err: serde_json::Error) -> Self {
        Self {
            code: None,
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Cause {
    fn from(err: std::io::Error) -> Self {
        Self {
            code: err.raw_os_error(),
            reason: err.to_string(),
        }
    }
}

impl From<String> for Cause {
    fn from(reason: String) -> Self {
        Self { code: None, reason }
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::Task(err.to_string())
    }
}

/// Result type alias for todo-store
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_carries_sqlite_extended_code() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO missing (x) VALUES (1)", []).unwrap_err();
        let store_err = StoreError::write(err);
        assert!(matches!(store_err, StoreError::Write { .. }));
        assert_eq!(store_err.code(), Some(rusqlite::ffi::SQLITE_ERROR));
        assert!(!store_err.is_blocked());
    }

    #[test]
    fn test_blocked_is_only_escalated_kind() {
        assert!(StoreError::Blocked { code: None }.is_blocked());
        assert!(!StoreError::open("nope".to_string()).is_blocked());
        assert!(!StoreError::Task("gone".into()).is_blocked());
    }
}
