//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};

/// Todo record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub data: String,
    #[serde(default)]
    pub completed: bool,
}
