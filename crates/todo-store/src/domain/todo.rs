//! Todo Entity

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// A todo record as persisted in the `todos` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned key (absent until the first insert)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Label text
    pub data: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Build a new, unkeyed todo from user input.
    ///
    /// The label is trimmed; input that is empty after trimming is rejected.
    pub fn new(input: &str) -> DomainResult<Self> {
        let data = input.trim();
        if data.is_empty() {
            return Err(DomainError::InvalidInput("todo text is empty".to_string()));
        }
        Ok(Self {
            id: None,
            data: data.to_string(),
            completed: false,
        })
    }

    /// Same record with its completion state flipped
    pub fn toggled(mut self) -> Self {
        self.completed = !self.completed;
        self
    }
}

impl Entity for Todo {
    fn key(&self) -> Option<i64> {
        self.id
    }

    fn with_key(mut self, key: i64) -> Self {
        self.id = Some(key);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_input() {
        let todo = Todo::new("  buy milk \n").unwrap();
        assert_eq!(todo.data, "buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.id, None);
    }

    #[test]
    fn test_new_rejects_blank_input() {
        assert!(matches!(Todo::new(""), Err(DomainError::InvalidInput(_))));
        assert!(matches!(Todo::new(" \t\n "), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_toggled_flips_only_completion() {
        let todo = Todo::new("walk").unwrap().with_key(7);
        let flipped = todo.clone().toggled();
        assert!(flipped.completed);
        assert_eq!(flipped.id, Some(7));
        assert_eq!(flipped.data, todo.data);
        assert!(!flipped.toggled().completed);
    }

    #[test]
    fn test_unkeyed_record_omits_id() {
        let json = serde_json::to_value(Todo::new("x").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "data": "x", "completed": false }));

        let keyed: Todo =
            serde_json::from_value(serde_json::json!({ "id": 3, "data": "y", "completed": true }))
                .unwrap();
        assert_eq!(keyed.key(), Some(3));
    }
}
