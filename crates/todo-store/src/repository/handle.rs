//! Database Handle
//!
//! A live connection to the todo database. Records are stored as JSON
//! documents; the `id` column is the key and always wins over any `id` inside
//! the document.

use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::RecordSource;
use crate::domain::Entity;
use crate::error::{StoreError, StoreResult};

/// Connection to a ready, versioned database. Released on drop.
#[derive(Debug)]
pub struct Handle {
    conn: Connection,
}

impl Handle {
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Insert a new record.
    ///
    /// A record without a key gets the next auto-increment key. Inserting a
    /// key that already exists fails with a constraint error.
    pub fn add<T: Entity + Serialize>(&self, record: &T) -> StoreResult<T> {
        let body = serde_json::to_string(record).map_err(StoreError::write)?;
        let tx = self.write_transaction()?;

        match record.key() {
            Some(key) => tx.execute(
                "INSERT INTO todos (id, record) VALUES (?1, ?2)",
                params![key, body],
            ),
            None => tx.execute("INSERT INTO todos (record) VALUES (?1)", params![body]),
        }
        .map_err(StoreError::write)?;

        let key = tx.last_insert_rowid();
        tx.commit().map_err(StoreError::write)?;

        Ok(record.clone().with_key(key))
    }

    /// Overwrite the full record at its key, inserting when the key is new
    pub fn put<T: Entity + Serialize>(&self, record: &T) -> StoreResult<T> {
        let body = serde_json::to_string(record).map_err(StoreError::write)?;
        let tx = self.write_transaction()?;

        match record.key() {
            Some(key) => tx.execute(
                "INSERT INTO todos (id, record) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET record = excluded.record",
                params![key, body],
            ),
            None => tx.execute("INSERT INTO todos (record) VALUES (?1)", params![body]),
        }
        .map_err(StoreError::write)?;

        let key = record.key().unwrap_or_else(|| tx.last_insert_rowid());
        tx.commit().map_err(StoreError::write)?;

        Ok(record.clone().with_key(key))
    }

    fn write_transaction(&self) -> StoreResult<Transaction<'_>> {
        Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)
            .map_err(StoreError::write)
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl<T: Entity + DeserializeOwned> RecordSource<T> for Handle {
    /// Every record, in key order
    fn get_all(&self) -> StoreResult<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, record FROM todos ORDER BY id")
            .map_err(StoreError::read)?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
            .map_err(StoreError::read)?;

        let mut records = Vec::new();
        for row in rows {
            let (key, body) = row.map_err(StoreError::read)?;
            let record: T = serde_json::from_str(&body).map_err(StoreError::read)?;
            records.push(record.with_key(key));
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Todo;
    use crate::repository::Database;
    use crate::testing::settings;

    fn open() -> (tempfile::TempDir, Handle) {
        let dir = tempfile::tempdir().unwrap();
        let handle = Database::new(dir.path(), &settings()).open().unwrap();
        (dir, handle)
    }

    fn all(handle: &Handle) -> Vec<Todo> {
        RecordSource::<Todo>::get_all(handle).unwrap()
    }

    #[test]
    fn test_add_assigns_unique_keys() {
        let (_dir, handle) = open();

        let a = handle.add(&Todo::new("a").unwrap()).unwrap();
        let b = handle.add(&Todo::new("b").unwrap()).unwrap();

        assert!(a.id.is_some());
        assert!(b.id.is_some());
        assert_ne!(a.id, b.id);
        assert_eq!(all(&handle), vec![a, b]);
    }

    #[test]
    fn test_add_with_existing_key_is_rejected() {
        let (_dir, handle) = open();
        let stored = handle.add(&Todo::new("first").unwrap()).unwrap();

        let clash = Todo::new("second").unwrap().with_key(stored.id.unwrap());
        let err = handle.add(&clash).unwrap_err();

        assert!(matches!(err, StoreError::Write { .. }));
        assert!(err.code().is_some());
        assert_eq!(all(&handle), vec![stored]);
    }

    #[test]
    fn test_add_keeps_record_carried_key() {
        let (_dir, handle) = open();
        let stored = handle.add(&Todo::new("keyed").unwrap().with_key(42)).unwrap();
        assert_eq!(stored.id, Some(42));

        let next = handle.add(&Todo::new("after").unwrap()).unwrap();
        assert!(next.id.unwrap() > 42);
    }

    #[test]
    fn test_put_overwrites_full_record() {
        let (_dir, handle) = open();
        let stored = handle.add(&Todo::new("draft").unwrap()).unwrap();

        let mut changed = stored.clone();
        changed.data = "final".to_string();
        changed.completed = true;
        handle.put(&changed).unwrap();

        assert_eq!(all(&handle), vec![changed]);
    }

    #[test]
    fn test_put_without_key_inserts() {
        let (_dir, handle) = open();
        let stored = handle.put(&Todo::new("new").unwrap()).unwrap();
        assert!(stored.id.is_some());
        assert_eq!(all(&handle).len(), 1);
    }

    #[test]
    fn test_column_key_wins_over_document() {
        let (_dir, handle) = open();
        handle
            .connection()
            .execute(
                "INSERT INTO todos (id, record) VALUES (9, ?1)",
                params![r#"{"id":1,"data":"odd","completed":false}"#],
            )
            .unwrap();

        assert_eq!(all(&handle)[0].id, Some(9));
    }

    #[test]
    fn test_corrupt_document_is_read_failure() {
        let (_dir, handle) = open();
        handle
            .connection()
            .execute("INSERT INTO todos (record) VALUES ('not json')", [])
            .unwrap();

        let err = RecordSource::<Todo>::get_all(&handle).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}
