//! Tauri Commands for Todos
//!
//! Results reach the frontend through the `todos-refreshed` event. A command
//! only returns an error when the database is blocked and the page must be
//! reloaded.

use tauri::State;
use todo_store::Todo;
use crate::AppState;

/// Open the database and push the stored todos to the view
#[tauri::command]
pub async fn load_todos(state: State<'_, AppState>) -> Result<(), String> {
    state.session.start().await.map(|_| ()).map_err(|e| e.to_string())
}

/// Create a todo from the submitted text
#[tauri::command]
pub async fn add_todo(state: State<'_, AppState>, data: String) -> Result<(), String> {
    state.session.add(&data).await.map(|_| ()).map_err(|e| e.to_string())
}

/// Flip a todo's completion state
#[tauri::command]
pub async fn toggle_todo(state: State<'_, AppState>, todo: Todo) -> Result<(), String> {
    state.session.toggle(todo).await.map(|_| ()).map_err(|e| e.to_string())
}
