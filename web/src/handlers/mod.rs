//! HTTP request handlers.
//!
//! Handlers only translate HTTP into [`ListsAction`]s. [`dispatch`] does the
//! rest for all of them: load the client's session, run the reducer, render
//! or redirect as the reducer asked, save the session, refresh the cookie.

pub mod health;
pub mod lists;
pub mod todos;

use crate::error::AppError;
use crate::extractors::SessionCookie;
use crate::session::{session_cookie, SessionId, SessionStore};
use crate::state::AppState;
use crate::WebResult;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use todo_lists::{ListsAction, SessionState};
use todo_lists_core::{effect::Effect, reducer::Reducer};

// Re-export common handler utilities
pub use health::health_check;

/// Run `action` against the client's session and build the response.
///
/// A session that holds nothing after the request (no lists, no pending
/// flash) is not kept: a fresh one is never saved and an existing one is
/// removed. Only kept sessions get a cookie.
///
/// # Errors
///
/// Returns error if the session store fails or a page cannot be rendered.
pub async fn dispatch<S: SessionStore>(
    app: &AppState<S>,
    cookie: SessionCookie,
    action: ListsAction,
) -> WebResult<Response> {
    let action_name = action.name();

    let existing = match cookie.0 {
        Some(id) => app.sessions.load(id).await?.map(|state| (id, state)),
        None => None,
    };
    let is_new = existing.is_none();
    let (session_id, mut session) = existing.unwrap_or_else(|| {
        let id = SessionId::new();
        tracing::debug!(session_id = %id, "Starting new session");
        (id, SessionState::default())
    });

    let queued = session.flash.len();
    let effects = app.reducer.reduce(&mut session, action, &app.environment);

    metrics::counter!("todo_lists_actions_total", "action" => action_name).increment(1);
    for message in session.flash.iter().skip(queued) {
        metrics::counter!("todo_lists_flash_total", "kind" => message.kind.as_str()).increment(1);
    }

    let response = match effects.into_iter().find(Effect::is_response) {
        Some(Effect::Redirect(path)) => {
            tracing::debug!(action = action_name, %path, "Redirecting");
            Redirect::to(&path).into_response()
        }
        Some(Effect::Render(view)) => {
            tracing::debug!(action = action_name, ?view, "Rendering");
            Html(app.templates.render(&view, &mut session)?).into_response()
        }
        Some(Effect::None) | None => {
            return Err(AppError::internal(format!(
                "Action {action_name} produced no response"
            )));
        }
    };

    if session == SessionState::default() {
        if !is_new {
            tracing::debug!(%session_id, "Dropping empty session");
            app.sessions.remove(session_id).await?;
        }
        return Ok(response);
    }

    app.sessions.save(session_id, &session).await?;
    let jar = CookieJar::new().add(session_cookie(&app.cookie_name, session_id, app.session_ttl));

    Ok((jar, response).into_response())
}
