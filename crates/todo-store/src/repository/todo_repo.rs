//! Todo Repository Implementation
//!
//! SQLite-backed implementation of `RecordStore<Todo>`. Each operation opens
//! its own handle on the blocking pool and drops it when done.

use async_trait::async_trait;
use std::sync::Arc;

use super::db::Database;
use super::handle::Handle;
use super::refresh::{Refresh, Refresher};
use super::traits::{RecordSource, RecordStore};
use crate::domain::Todo;
use crate::error::StoreResult;

pub struct TodoRepository {
    db: Arc<Database>,
    refresher: Arc<Refresher<Todo>>,
}

impl TodoRepository {
    pub fn new(db: Database, refresher: Refresher<Todo>) -> Self {
        Self {
            db: Arc::new(db),
            refresher: Arc::new(refresher),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Run `op` against a freshly opened handle
    async fn with_handle<R, F>(&self, op: F) -> StoreResult<R>
    where
        F: FnOnce(&Handle, &Refresher<Todo>) -> StoreResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let refresher = Arc::clone(&self.refresher);

        tokio::task::spawn_blocking(move || {
            let handle = db.open()?;
            op(&handle, &refresher)
        })
        .await?
    }
}

#[async_trait]
impl RecordStore<Todo> for TodoRepository {
    async fn add(&self, record: Todo) -> StoreResult<Refresh> {
        self.with_handle(move |handle, refresher| {
            let stored = handle.add(&record)?;
            tracing::debug!(id = ?stored.id, "Todo added");
            Ok(refresher.refresh(handle))
        })
        .await
    }

    async fn update(&self, record: Todo) -> StoreResult<Refresh> {
        self.with_handle(move |handle, refresher| {
            let stored = handle.put(&record)?;
            tracing::debug!(id = ?stored.id, completed = stored.completed, "Todo updated");
            Ok(refresher.refresh(handle))
        })
        .await
    }

    async fn get_all(&self) -> StoreResult<Vec<Todo>> {
        self.with_handle(|handle, _| RecordSource::<Todo>::get_all(handle))
            .await
    }

    async fn refresh(&self) -> StoreResult<Refresh> {
        self.with_handle(|handle, refresher| Ok(refresher.refresh(handle)))
            .await
    }
}
