//! New Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::prompt_reload;
use crate::commands;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = new_text.get().trim().to_string();
        if data.is_empty() { return; }

        set_new_text.set(String::new());
        spawn_local(async move {
            if let Err(e) = commands::add_todo(&data).await {
                prompt_reload(&e);
            }
        });
    };

    view! {
        <form id="add-todo-form" class="new-todo-form" on:submit=add_todo>
            <input
                id="new-todo"
                type="text"
                placeholder="What needs doing?"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
