//! Todo Session
//!
//! Applies the failure policy to user actions: a blocked database is the only
//! failure handed back to the caller. Every other failure is logged and the
//! view is left as it was.

use crate::domain::Todo;
use crate::error::StoreResult;
use crate::repository::{RecordStore, Refresh, TodoRepository};

/// What a user action ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The change (if any) committed and the view received `count` records
    Refreshed { count: usize },
    /// The change committed but the view could not be refreshed
    Stale,
    /// Nothing to do, e.g. blank input
    Skipped,
    /// The action failed; the failure was logged and dropped
    Dropped,
}

pub struct TodoSession<S = TodoRepository> {
    store: S,
}

impl<S: RecordStore<Todo>> TodoSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open the database and render whatever it holds
    pub async fn start(&self) -> StoreResult<Outcome> {
        settle("load todos", self.store.refresh().await)
    }

    /// Create a todo from raw form input
    pub async fn add(&self, input: &str) -> StoreResult<Outcome> {
        let todo = match Todo::new(input) {
            Ok(todo) => todo,
            Err(err) => {
                tracing::debug!(%err, "Ignoring blank todo");
                return Ok(Outcome::Skipped);
            }
        };
        settle("add todo", self.store.add(todo).await)
    }

    /// Flip completion on `todo` and write the full record back
    pub async fn toggle(&self, todo: Todo) -> StoreResult<Outcome> {
        settle("update todo", self.store.update(todo.toggled()).await)
    }
}

fn settle(action: &'static str, result: StoreResult<Refresh>) -> StoreResult<Outcome> {
    match result {
        Ok(Refresh::Delivered { count, .. }) => Ok(Outcome::Refreshed { count }),
        Ok(Refresh::Abandoned { attempts }) => {
            tracing::warn!(action, attempts, "View left stale");
            Ok(Outcome::Stale)
        }
        Err(err) if err.is_blocked() => {
            tracing::error!(action, code = ?err.code(), "Database blocked, reload required");
            Err(err)
        }
        Err(err) => {
            tracing::warn!(action, code = ?err.code(), %err, "Action dropped");
            Ok(Outcome::Dropped)
        }
    }
}
