//! Route table.

use crate::error::AppError;
use crate::handlers::{health_check, lists, todos};
use crate::middleware::correlation_id_layer;
use crate::session::SessionStore;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// Every page and form target of the todo lists application, plus `/health`.
/// Unknown paths answer 404.
///
/// # Example
///
/// ```ignore
/// let state = AppState::new(&config, InMemorySessionStore::new(ttl, clock))?;
/// let app = build_router(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn build_router<S: SessionStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(lists::index))
        .route("/health", get(health_check))
        // Lists
        .route(
            "/lists",
            get(lists::show_lists::<S>).post(lists::create_list::<S>),
        )
        .route("/lists/new", get(lists::new_list::<S>))
        .route(
            "/lists/:list_id",
            get(lists::show_list::<S>).post(lists::update_list::<S>),
        )
        .route("/lists/:list_id/edit", get(lists::edit_list::<S>))
        .route("/lists/:list_id/destroy", post(lists::delete_list::<S>))
        .route(
            "/lists/:list_id/complete_all",
            post(lists::complete_all::<S>),
        )
        // Todos
        .route("/lists/:list_id/todos", post(todos::add_todo::<S>))
        .route(
            "/lists/:list_id/todos/:todo_id",
            post(todos::toggle_todo::<S>),
        )
        .route(
            "/lists/:list_id/todos/:todo_id/destroy",
            post(todos::delete_todo::<S>),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
