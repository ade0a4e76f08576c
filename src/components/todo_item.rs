//! Todo Item Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::prompt_reload;
use crate::commands;
use crate::models::Todo;

/// A single todo row with its completion checkbox
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let completed = todo.completed;
    let label = todo.data.clone();
    let class = if completed { "done" } else { "" };

    view! {
        <li class=class>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| {
                    let todo = todo.clone();
                    spawn_local(async move {
                        if let Err(e) = commands::toggle_todo(&todo).await {
                            prompt_reload(&e);
                        }
                    });
                }
            />
            <span>{label}</span>
        </li>
    }
}
