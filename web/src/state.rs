//! Application state for Axum handlers.

use crate::config::Config;
use crate::render::Templates;
use crate::session::SessionStore;
use chrono::Duration;
use std::sync::Arc;
use todo_lists::{ListsEnvironment, ListsReducer};

/// Application state shared across all HTTP handlers.
///
/// Holds no per-client data: every request loads its own session state from
/// the session store and writes it back before answering.
pub struct AppState<S> {
    /// Per-client session storage
    pub sessions: Arc<S>,
    /// Compiled page templates
    pub templates: Arc<Templates>,
    /// Reducer applying every list and todo operation
    pub reducer: ListsReducer,
    /// Reducer environment (rename policy)
    pub environment: ListsEnvironment,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Idle lifetime advertised on the session cookie
    pub session_ttl: Duration,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            templates: Arc::clone(&self.templates),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            cookie_name: self.cookie_name.clone(),
            session_ttl: self.session_ttl,
        }
    }
}

impl<S: SessionStore> AppState<S> {
    /// Create the application state from configuration and a session store.
    ///
    /// # Errors
    ///
    /// Returns error if a bundled template fails to parse.
    pub fn new(config: &Config, sessions: S) -> Result<Self, minijinja::Error> {
        Ok(Self {
            sessions: Arc::new(sessions),
            templates: Arc::new(Templates::new()?),
            reducer: ListsReducer::new(),
            environment: ListsEnvironment::new(config.rename_policy()),
            cookie_name: config.session.cookie_name.clone(),
            session_ttl: config.session_ttl(),
        })
    }
}
