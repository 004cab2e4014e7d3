//! List endpoints.
//!
//! - `GET /` - Redirect to the list index
//! - `GET /lists` - All lists, incomplete ones first
//! - `GET /lists/new` - New-list form
//! - `POST /lists` - Create a list
//! - `GET /lists/:list_id` - One list with its todos
//! - `GET /lists/:list_id/edit` - Rename form
//! - `POST /lists/:list_id` - Rename a list
//! - `POST /lists/:list_id/destroy` - Delete a list
//! - `POST /lists/:list_id/complete_all` - Mark every todo completed

use super::dispatch;
use crate::WebResult;
use crate::extractors::{FormBody, PathPositions, SessionCookie};
use crate::session::SessionStore;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Redirect, Response},
};
use serde::Deserialize;
use todo_lists::ListsAction;

/// Form body carrying a list name.
#[derive(Debug, Default, Deserialize)]
pub struct ListNameForm {
    /// Name as typed; a missing field counts as empty
    #[serde(default)]
    pub list_name: String,
}

/// `GET /`
#[allow(clippy::unused_async)]
pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

/// `GET /lists`
///
/// # Errors
///
/// Returns error if the session store or rendering fails.
pub async fn show_lists<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
) -> WebResult<Response> {
    dispatch(&app, cookie, ListsAction::ShowLists).await
}

/// `GET /lists/new`
///
/// # Errors
///
/// Returns error if the session store or rendering fails.
pub async fn new_list<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
) -> WebResult<Response> {
    dispatch(&app, cookie, ListsAction::NewList).await
}

/// `POST /lists`
///
/// # Errors
///
/// Returns error if the session store or rendering fails.
pub async fn create_list<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    FormBody(form): FormBody<ListNameForm>,
) -> WebResult<Response> {
    let action = ListsAction::CreateList {
        list_name: form.list_name,
    };
    dispatch(&app, cookie, action).await
}

/// `GET /lists/:list_id`
///
/// # Errors
///
/// Returns error if the session store or rendering fails.
pub async fn show_list<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, .. }: PathPositions,
) -> WebResult<Response> {
    dispatch(&app, cookie, ListsAction::ShowList { list_id }).await
}

/// `GET /lists/:list_id/edit`
///
/// # Errors
///
/// Returns error if the session store or rendering fails.
pub async fn edit_list<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, .. }: PathPositions,
) -> WebResult<Response> {
    dispatch(&app, cookie, ListsAction::EditList { list_id }).await
}

/// `POST /lists/:list_id`
///
/// # Errors
///
/// Returns error if the session store or rendering fails.
pub async fn update_list<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, .. }: PathPositions,
    FormBody(form): FormBody<ListNameForm>,
) -> WebResult<Response> {
    let action = ListsAction::UpdateList {
        list_id,
        list_name: form.list_name,
    };
    dispatch(&app, cookie, action).await
}

/// `POST /lists/:list_id/destroy`
///
/// # Errors
///
/// Returns error if the session store fails.
pub async fn delete_list<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, .. }: PathPositions,
) -> WebResult<Response> {
    dispatch(&app, cookie, ListsAction::DeleteList { list_id }).await
}

/// `POST /lists/:list_id/complete_all`
///
/// # Errors
///
/// Returns error if the session store fails.
pub async fn complete_all<S: SessionStore>(
    State(app): State<AppState<S>>,
    cookie: SessionCookie,
    PathPositions { list_id, .. }: PathPositions,
) -> WebResult<Response> {
    dispatch(&app, cookie, ListsAction::CompleteAll { list_id }).await
}
