//! Todo-DB Backend
//!
//! Layered architecture:
//! - todo-store: records, database handles and the refresh cycle
//! - sink: pushes refreshed records to the WebView
//! - commands: Tauri command handlers

use std::sync::Arc;
use tauri::Manager;
use todo_store::config::CONFIG_FILE;
use todo_store::{Config, Database, Refresher, Todo, TodoRepository, TodoSession};

mod commands;
mod logging;
mod sink;

use sink::EventSink;

/// Application state shared across commands
pub struct AppState {
    pub session: TodoSession,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config_path = app.path().app_config_dir()?.join(CONFIG_FILE);
            let (config, config_error) = match Config::load(&config_path) {
                Ok(config) => (config, None),
                Err(e) => (Config::default(), Some(e)),
            };

            let guard = logging::init(&app.path().app_log_dir()?, &config.logging)?;
            app.manage(guard);

            if let Some(err) = config_error {
                tracing::warn!(path = %config_path.display(), %err, "Ignoring unreadable config, using defaults");
            }

            let data_dir = app.path().app_data_dir()?;
            let sink = Arc::new(EventSink::new(app.handle().clone()));
            let repo = TodoRepository::new(
                Database::new(&data_dir, &config.store),
                Refresher::<Todo>::new(sink, config.store.retry),
            );

            tracing::info!(
                db_path = %repo.database().path().display(),
                busy_timeout_ms = config.store.busy_timeout_ms,
                "App setup complete"
            );

            app.manage(AppState {
                session: TodoSession::new(repo),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::load_todos,
            commands::add_todo,
            commands::toggle_todo,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
