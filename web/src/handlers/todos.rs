//! Todo endpoints.
//!
//! - `POST /lists/:list_id/todos` - Add a todo
//! - `POST /lists/:list_id/todos/:todo_id` - Set a todo's completion flag
//! - `POST /lists/:list_id/todos/:todo_id/destroy` - Delete a todo

use super::dispatch;
use crate::WebResult;
use crate::extractors::{FormBody, PathPositions, SessionCookie};
use crate::session::SessionStore;
use crate::state::AppState;
use axum::{
    extract::State,
    response::Response,
};
use serde::Deserialize;
use todo_lists::ListsAction;

/// Form body carrying a todo name.
#[derive(Debug, Default, Deserialize)]
pub struct TodoNameForm {
    /// Name as typed; a missing field counts as empty
    #[serde(default)]
    pub todo_name: String,
}

/// Form body carrying the completion flag.
#[derive(Debug, Default, Deserialize)]
pub struct CompletedForm {
    /// `"true"` to complete, anything else (or nothing) to reopen
    #[serde(default)]
    pub completed: String,
}

/// `POST /lists/:list_id/todos`
///
/// # Errors
///
/// Returns error if the session store fails.
pub async fn add_todo<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, .. }: PathPositions,
    FormBody(form): FormBody<TodoNameForm>,
) -> WebResult<Response> {
    let action = ListsAction::AddTodo {
        list_id,
        todo_name: form.todo_name,
    };
    dispatch(&app, cookie, action).await
}

/// `POST /lists/:list_id/todos/:todo_id`
///
/// # Errors
///
/// Returns error if the session store fails.
pub async fn toggle_todo<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, todo_id }: PathPositions,
    FormBody(form): FormBody<CompletedForm>,
) -> WebResult<Response> {
    let action = ListsAction::ToggleTodo {
        list_id,
        todo_id,
        completed: form.completed,
    };
    dispatch(&app, cookie, action).await
}

/// `POST /lists/:list_id/todos/:todo_id/destroy`
///
/// # Errors
///
/// Returns error if the session store fails.
pub async fn delete_todo<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, todo_id }: PathPositions,
) -> WebResult<Response> {
    dispatch(&app, cookie, ListsAction::DeleteTodo { list_id, todo_id }).await
}
