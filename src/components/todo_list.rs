//! Todo List Component
//!
//! Repaints the whole list from the store on every refresh.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            {move || store.todos().get().into_iter().map(|todo| view! {
                <TodoItem todo=todo />
            }).collect_view()}
        </ul>
    }
}
