//! Domain Layer - Keyed Entity Trait
//!
//! Records live in a collection keyed by their own `id` field. A record
//! without a key gets one assigned by the store on insert.

use serde::{Deserialize, Serialize};

/// Contract for records stored in a keyed collection
pub trait Entity: Sized + Send + Sync + Clone + 'static {
    /// The record's key, if it has been assigned one
    fn key(&self) -> Option<i64>;

    /// Returns the record carrying `key`
    fn with_key(self, key: i64) -> Self;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    InvalidInput(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
