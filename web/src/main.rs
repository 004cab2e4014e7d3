//! Todo lists HTTP server.
//!
//! Configuration comes from `TODO_LISTS_*` environment variables (a `.env`
//! file is honoured). Log verbosity follows `RUST_LOG`.

use std::sync::Arc;
use std::time::Duration;
use todo_lists_core::environment::SystemClock;
use todo_lists_web::{build_router, AppState, Config, InMemorySessionStore};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often expired sessions are swept from memory.
const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_lists_web=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting todo lists HTTP server");

    // Load configuration
    let config = Config::from_env();
    info!(
        address = %config.bind_address(),
        session_ttl_secs = config.session.ttl_secs,
        cookie_name = %config.session.cookie_name,
        rename_excludes_self = config.rename_excludes_self,
        "Configuration loaded"
    );

    // Session storage and its expiry sweeper
    let sessions = InMemorySessionStore::new(config.session_ttl(), Arc::new(SystemClock));
    let state = AppState::new(&config, sessions)?;
    spawn_session_purger(&state);

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Periodically drop sessions whose TTL has passed.
fn spawn_session_purger(state: &AppState<InMemorySessionStore>) {
    let sessions = Arc::clone(&state.sessions);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            match sessions.purge_expired() {
                Ok(0) => {}
                Ok(purged) => info!(purged, "Purged expired sessions"),
                Err(e) => warn!(error = %e, "Session purge failed"),
            }
        }
    });
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        () = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
