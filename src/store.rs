//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo list is
//! only ever replaced wholesale by a fresh read from the backend.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last record set pushed by the backend
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the rendered todos with a fresh read
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}
