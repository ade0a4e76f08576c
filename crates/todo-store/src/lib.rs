//! Todo Store
//!
//! Storage core for the todo app:
//! - domain: the Todo record and the keyed-entity contract
//! - repository: versioned database handles, record operations, view refresh
//! - session: failure policy applied to user actions

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod session;

pub use config::{Config, LoggingConfig, RetryPolicy, StoreSettings};
pub use domain::{DomainError, DomainResult, Entity, Todo};
pub use error::{StoreError, StoreResult};
pub use repository::{
    Database, Handle, RecordSource, RecordStore, Refresh, Refresher, TodoRepository, ViewSink,
};
pub use session::{Outcome, TodoSession};

#[cfg(test)]
pub(crate) mod testing;
