//! Axum web shell for the todo lists application.
//!
//! The list logic lives in the `todo-lists` reducer and never touches HTTP.
//! This crate is the imperative shell around it, following the
//! "Functional Core, Imperative Shell" pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, forms, cookies
//! │  - Request parsing                      │  ← Session store
//! │  - HTML rendering                       │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - ListsReducer                         │  ← Testable at memory speed
//! │  - Validation and lookups               │  ← No I/O, no side effects
//! │  - Redirect / Render effects (values)   │  ← Inspectable
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from the request (path, form, session cookie)
//! 3. **Build Action** from the extracted data
//! 4. **Load session** state for the cookie, or start a fresh one
//! 5. **Reduce** the action against the session state
//! 6. **Render or redirect** as the returned effect asks
//! 7. **Save session** and refresh the cookie
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todo_lists_core::environment::SystemClock;
//! use todo_lists_web::{build_router, AppState, Config, InMemorySessionStore};
//!
//! let config = Config::from_env();
//! let sessions = InMemorySessionStore::new(config.session_ttl(), Arc::new(SystemClock));
//! let app = build_router(AppState::new(&config, sessions)?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod session;
pub mod state;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use extractors::SessionCookie;
pub use middleware::{correlation_id_layer, CorrelationId, CORRELATION_ID_HEADER};
pub use render::Templates;
pub use router::build_router;
pub use session::{InMemorySessionStore, SessionError, SessionId, SessionStore};
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
