//! Repository Layer - Core Traits
//!
//! Seams between record storage, the refresh cycle and whatever renders the
//! records.

use async_trait::async_trait;

use super::refresh::Refresh;
use crate::domain::Entity;
use crate::error::StoreResult;

/// Anything the full record set can be read from
pub trait RecordSource<T> {
    /// Read every record in the collection
    fn get_all(&self) -> StoreResult<Vec<T>>;
}

/// Receives the full record set after each successful read
pub trait ViewSink<T>: Send + Sync {
    fn render(&self, records: &[T]);
}

/// Record operations against the single collection.
///
/// Every operation acquires its own handle. Mutations refresh the view on
/// that handle once the write has committed.
#[async_trait]
pub trait RecordStore<T: Entity>: Send + Sync {
    /// Insert a record, assigning a key when it has none
    async fn add(&self, record: T) -> StoreResult<Refresh>;

    /// Overwrite the full record at its key
    async fn update(&self, record: T) -> StoreResult<Refresh>;

    /// Read every record
    async fn get_all(&self) -> StoreResult<Vec<T>>;

    /// Open the database and refresh the view without writing
    async fn refresh(&self) -> StoreResult<Refresh>;
}
