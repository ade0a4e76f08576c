//! Domain Layer
//!
//! The Todo record and the keyed-entity contract the record store relies on.
//! This layer has NO storage dependencies (only serde for serialization).

mod entity;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::Todo;
