//! WebView View Sink
//!
//! Delivers each refreshed record set to the frontend as a Tauri event.

use tauri::{AppHandle, Emitter};
use todo_store::{Todo, ViewSink};

/// Event carrying the full todo list after every refresh
pub const TODOS_REFRESHED: &str = "todos-refreshed";

pub struct EventSink {
    app: AppHandle,
}

impl EventSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ViewSink<Todo> for EventSink {
    fn render(&self, records: &[Todo]) {
        if let Err(e) = self.app.emit(TODOS_REFRESHED, records) {
            tracing::error!(error = %e, "Failed to emit {}", TODOS_REFRESHED);
        }
    }
}
