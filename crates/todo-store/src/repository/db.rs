//! Database Connection and Setup
//!
//! Opens versioned handles to the local todo database. The schema is created
//! on first open and gated by `PRAGMA user_version` afterwards.

use rusqlite::{Connection, ErrorCode, Transaction, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::handle::Handle;
use crate::config::StoreSettings;
use crate::error::{StoreError, StoreResult};

/// Fixed database name; the file is `<data_dir>/TodoDB.db`
pub const DB_NAME: &str = "TodoDB";

/// Schema version requested on every open
pub const SCHEMA_VERSION: i32 = 1;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: the todos collection, keyed by id with automatic assignment
    r#"
    CREATE TABLE todos (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        record TEXT NOT NULL
    );
    "#,
];

/// Handle provider for the todo database
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    busy_timeout: Duration,
}

impl Database {
    pub fn new(data_dir: impl AsRef<Path>, settings: &StoreSettings) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.db", DB_NAME)),
            busy_timeout: settings.busy_timeout(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh handle, creating the schema if this is the first open.
    ///
    /// A lock held by another connection during the version check yields
    /// `StoreError::Blocked`; any other failure yields `StoreError::Open`.
    pub fn open(&self) -> StoreResult<Handle> {
        let conn = self.connect().map_err(|err| {
            tracing::warn!(path = %self.path.display(), code = ?err.code(), %err, "Unable to open database");
            err
        })?;

        if let Err(err) = upgrade(&conn) {
            if err.is_blocked() {
                tracing::error!(path = %self.path.display(), code = ?err.code(), "Database upgrade blocked");
            } else {
                tracing::warn!(path = %self.path.display(), code = ?err.code(), %err, "Unable to open database");
            }
            return Err(err);
        }

        tracing::debug!(path = %self.path.display(), "Database opened");
        Ok(Handle::new(conn))
    }

    fn connect(&self) -> StoreResult<Connection> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::open)?;
        }

        let conn = Connection::open(&self.path).map_err(StoreError::open)?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(StoreError::open)?;
        Ok(conn)
    }
}

/// Bring the stored schema up to `SCHEMA_VERSION`
fn upgrade(conn: &Connection) -> StoreResult<()> {
    // Lock contention here is an ordinary open failure; only the upgrade can be blocked.
    let current = stored_version(conn).map_err(StoreError::open)?;
    if current > SCHEMA_VERSION {
        return Err(StoreError::open(format!(
            "stored version {} is newer than requested version {}",
            current, SCHEMA_VERSION
        )));
    }
    if current == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(classify)?;

    // Another opener may have finished the upgrade while we waited for the lock.
    let current = stored_version(&tx).map_err(classify)?;
    if current >= SCHEMA_VERSION {
        return Ok(());
    }

    tracing::info!(from = current, to = SCHEMA_VERSION, "Creating todo collection");

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current && version <= SCHEMA_VERSION {
            tx.execute_batch(migration).map_err(classify)?;
        }
    }
    tx.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))
        .map_err(classify)?;
    tx.commit().map_err(classify)?;

    Ok(())
}

fn stored_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |r| r.get(0))
}

/// Lock contention during the upgrade means another connection is in the way.
fn classify(err: rusqlite::Error) -> StoreError {
    match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StoreError::Blocked {
            code: err.sqlite_error().map(|e| e.extended_code),
        },
        _ => StoreError::open(err),
    }
}
