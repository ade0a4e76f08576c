//! Todo-DB Frontend App

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NewTodoForm, TodoList};
use crate::store::{store_replace_todos, AppState};

const RELOAD_PROMPT: &str = "Something went wrong, please reload the page";

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    spawn_local(async move {
        // Subscribe first so the initial load's refresh is not missed
        commands::listen_todos_refreshed(move |todos| {
            web_sys::console::log_1(&format!("[APP] Rendering {} todos", todos.len()).into());
            store_replace_todos(&store, todos);
        })
        .await;

        if let Err(e) = commands::load_todos().await {
            prompt_reload(&e);
        }
    });

    view! {
        <main class="container">
            <h1>"Todos"</h1>
            <NewTodoForm />
            <TodoList />
        </main>
    }
}

/// The backend only fails a command when the database is blocked
pub fn prompt_reload(err: &str) {
    web_sys::console::error_1(&format!("[APP] {}", err).into());
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(RELOAD_PROMPT);
    }
}
