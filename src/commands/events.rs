//! Backend Event Subscriptions

use wasm_bindgen::prelude::*;
use serde::Deserialize;
use crate::models::Todo;
use super::listen;

/// Emitted by the backend after every refresh
pub const TODOS_REFRESHED: &str = "todos-refreshed";

#[derive(Deserialize)]
struct Event<T> {
    payload: T,
}

/// Call `on_refresh` with every record set the backend pushes
pub async fn listen_todos_refreshed(mut on_refresh: impl FnMut(Vec<Todo>) + 'static) {
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        match serde_wasm_bindgen::from_value::<Event<Vec<Todo>>>(event) {
            Ok(event) => on_refresh(event.payload),
            Err(e) => web_sys::console::error_1(&format!("[EVENT] Bad {} payload: {}", TODOS_REFRESHED, e).into()),
        }
    });

    let _unlisten = listen(TODOS_REFRESHED, &handler).await;
    // The subscription lasts as long as the page
    handler.forget();
}
