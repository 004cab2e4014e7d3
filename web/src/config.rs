//! Configuration management for the todo lists server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory is read first when present.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use todo_lists::RenamePolicy;

/// Default cookie carrying the session id
pub const DEFAULT_COOKIE_NAME: &str = "todo_lists_session";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Session transport configuration
    pub session: SessionConfig,
    /// Whether renaming a list skips the list itself in the uniqueness check
    pub rename_excludes_self: bool,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    pub cookie_name: String,
    /// Idle lifetime of a session in seconds
    pub ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 4567,
            },
            session: SessionConfig {
                cookie_name: DEFAULT_COOKIE_NAME.to_string(),
                ttl_secs: 86_400,
            },
            rename_excludes_self: false,
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys use defaults; unparseable values are logged and ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                host: lookup("TODO_LISTS_HOST").unwrap_or(defaults.server.host),
                port: parsed(&lookup, "TODO_LISTS_PORT", defaults.server.port),
            },
            session: SessionConfig {
                cookie_name: lookup("TODO_LISTS_COOKIE_NAME")
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(defaults.session.cookie_name),
                ttl_secs: parsed(&lookup, "TODO_LISTS_SESSION_TTL_SECS", defaults.session.ttl_secs),
            },
            rename_excludes_self: parsed(
                &lookup,
                "TODO_LISTS_RENAME_EXCLUDES_SELF",
                defaults.rename_excludes_self,
            ),
        }
    }

    /// Address the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Idle lifetime of a session
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        i64::try_from(self.session.ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::days(365))
    }

    /// Uniqueness rule for renames
    #[must_use]
    pub const fn rename_policy(&self) -> RenamePolicy {
        if self.rename_excludes_self {
            RenamePolicy::ExcludeSelf
        } else {
            RenamePolicy::CompareAll
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable configuration value");
            default
        }),
        None => default,
    }
}
