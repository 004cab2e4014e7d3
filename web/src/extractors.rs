//! Custom Axum extractors.
//!
//! - `SessionCookie`: the session id carried by the configured cookie, if any
//! - `PathPositions`: the `:list_id` / `:todo_id` path segments as raw text
//! - `FormBody<T>`: an url-encoded form that falls back to `T::default()`
//!
//! None of them reject a request. Bad positions and missing fields are input
//! errors the reducer reports through flash messages.
//!
//! # Examples
//!
//! ```ignore
//! async fn handler(
//!     State(app): State<AppState<InMemorySessionStore>>,
//!     cookie: SessionCookie,
//!     PathPositions { list_id, .. }: PathPositions,
//!     FormBody(form): FormBody<TodoNameForm>,
//! ) -> WebResult<Response> {
//!     handlers::dispatch(&app, cookie, ListsAction::AddTodo { list_id, todo_name: form.todo_name }).await
//! }
//! ```

use crate::session::{session_id_from_jar, SessionId, SessionStore};
use crate::state::AppState;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, RawPathParams, Request},
    http::request::Parts,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::de::DeserializeOwned;
use std::convert::Infallible;

/// Session id from the request's cookies.
///
/// Holds `None` when the cookie is absent or does not carry a valid id; the
/// dispatcher then starts a fresh session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookie(pub Option<SessionId>);

#[async_trait]
impl<S> FromRequestParts<AppState<S>> for SessionCookie
where
    S: SessionStore,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self(session_id_from_jar(&jar, &state.cookie_name)))
    }
}

/// Position segments of the matched route.
///
/// Segments are percent-decoded when they decode to UTF-8 and kept raw
/// otherwise. A raw segment such as `%FF` never parses as a position, so it
/// takes the not-found path instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPositions {
    /// `:list_id`, empty when the route has none
    pub list_id: String,
    /// `:todo_id`, empty when the route has none
    pub todo_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for PathPositions
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Path::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Path(params)) => params,
            Err(rejection) => {
                tracing::debug!(%rejection, "Using raw path segments");
                RawPathParams::from_request_parts(parts, state)
                    .await
                    .map(|raw| {
                        raw.iter()
                            .map(|(key, value)| (key.to_owned(), value.to_owned()))
                            .collect()
                    })
                    .unwrap_or_default()
            }
        };

        let mut positions = Self::default();
        for (key, value) in params {
            match key.as_str() {
                "list_id" => positions.list_id = value,
                "todo_id" => positions.todo_id = value,
                _ => {}
            }
        }
        Ok(positions)
    }
}

/// Url-encoded form body.
///
/// A missing body, a wrong content type or an undecodable payload all yield
/// `T::default()`, so the reducer validates empty fields instead of the
/// client getting a 4xx.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Treating form body as empty");
                Ok(Self(T::default()))
            }
        }
    }
}
