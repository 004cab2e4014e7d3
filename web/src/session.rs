//! Session transport.
//!
//! Each client's [`SessionState`] lives server-side, keyed by a random
//! session id that travels in a cookie. Sessions expire after an idle TTL;
//! saving a session pushes its expiry forward. An unknown or expired id
//! loads as "no session", and the caller starts over with an empty state.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use todo_lists::SessionState;
use todo_lists_core::environment::Clock;
use uuid::Uuid;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Session storage failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The store's lock was poisoned by a panicking writer
    #[error("Session store lock poisoned")]
    Lock,

    /// Session payload could not be encoded or decoded
    #[error("Session payload is not valid: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Opaque session identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Creates a new random `SessionId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for per-client session state.
pub trait SessionStore: Send + Sync + 'static {
    /// Load the state for `id`, or `None` if it is unknown or expired.
    fn load(&self, id: SessionId) -> impl Future<Output = Result<Option<SessionState>>> + Send;

    /// Store `state` under `id` and refresh its expiry.
    fn save(&self, id: SessionId, state: &SessionState) -> impl Future<Output = Result<()>> + Send;

    /// Forget the session `id`.
    fn remove(&self, id: SessionId) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone)]
struct StoredSession {
    payload: String,
    expires_at: DateTime<Utc>,
}

/// In-memory session store.
///
/// Payloads are kept serialized so that only what survives a round trip
/// through JSON is carried between requests, as with any external store.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, StoredSession>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for InMemorySessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemorySessionStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl InMemorySessionStore {
    /// Create an empty store whose sessions live for `ttl` after their last save.
    #[must_use]
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            clock,
        }
    }

    /// Drop every expired session, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn purge_expired(&self) -> Result<usize> {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Lock)?;
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        Ok(before - sessions.len())
    }

    /// Get count of stored sessions, expired ones included.
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn session_count(&self) -> Result<usize> {
        Ok(self.sessions.lock().map_err(|_| SessionError::Lock)?.len())
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, id: SessionId) -> impl Future<Output = Result<Option<SessionState>>> + Send {
        let sessions = Arc::clone(&self.sessions);
        let now = self.clock.now();

        async move {
            let mut guard = sessions.lock().map_err(|_| SessionError::Lock)?;

            let Some(stored) = guard.get(&id) else {
                return Ok(None);
            };

            if stored.expires_at <= now {
                tracing::debug!(session_id = %id, "Session expired");
                guard.remove(&id);
                return Ok(None);
            }

            Ok(Some(serde_json::from_str(&stored.payload)?))
        }
    }

    fn save(&self, id: SessionId, state: &SessionState) -> impl Future<Output = Result<()>> + Send {
        let sessions = Arc::clone(&self.sessions);
        let payload = serde_json::to_string(state);
        let expires_at = self.clock.now() + self.ttl;

        async move {
            let stored = StoredSession {
                payload: payload?,
                expires_at,
            };
            sessions
                .lock()
                .map_err(|_| SessionError::Lock)?
                .insert(id, stored);
            Ok(())
        }
    }

    fn remove(&self, id: SessionId) -> impl Future<Output = Result<()>> + Send {
        let sessions = Arc::clone(&self.sessions);

        async move {
            sessions
                .lock()
                .map_err(|_| SessionError::Lock)?
                .remove(&id);
            Ok(())
        }
    }
}

/// Find the session id carried by cookie `name`, if any.
#[must_use]
pub fn session_id_from_jar(jar: &CookieJar, name: &str) -> Option<SessionId> {
    jar.get(name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
        .map(SessionId)
}

/// Build the session cookie for `id`, valid for `ttl`.
#[must_use]
pub fn session_cookie(name: &str, id: SessionId, ttl: Duration) -> Cookie<'static> {
    Cookie::build((name.to_owned(), id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::seconds(ttl.num_seconds()))
        .build()
}
