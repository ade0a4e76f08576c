//! Todo Commands
//!
//! Frontend bindings for todo-related backend commands. Results arrive via
//! the `todos-refreshed` event, not as return values.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Todo;
use super::invoke;

#[derive(Serialize)]
struct AddTodoArgs<'a> {
    data: &'a str,
}

#[derive(Serialize)]
struct TodoArgs<'a> {
    todo: &'a Todo,
}

pub async fn load_todos() -> Result<(), String> {
    invoke("load_todos", JsValue::NULL).await.map(|_| ()).map_err(js_error)
}

pub async fn add_todo(data: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&AddTodoArgs { data }).map_err(|e| e.to_string())?;
    invoke("add_todo", js_args).await.map(|_| ()).map_err(js_error)
}

pub async fn toggle_todo(todo: &Todo) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&TodoArgs { todo }).map_err(|e| e.to_string())?;
    invoke("toggle_todo", js_args).await.map(|_| ()).map_err(js_error)
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
