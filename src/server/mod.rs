//! HTTP server.
//!
//! Serves the rendered site with axum:
//!
//! ```text
//! GET /                      → home section, page 1
//! GET /{section}             → section listing, page 1
//! GET /{section}/{page}      → section listing, page N (digits only)
//! GET /{section}/{document}  → single document (slug starts with a letter)
//! ```
//!
//! Every response is computed from the filesystem at request time. The only
//! shared state is the config snapshot in [`AppState`](state::AppState), which
//! is swapped on SIGHUP.
//!
//! # Status Codes
//!
//! | Outcome | Status |
//! |---------|--------|
//! | Rendered page | 200 |
//! | Unknown path, bad segment, missing section or document, page out of range | 404 |
//! | Document or template unreadable, template error | 500 |
//! | Content root unreadable or without sections | 501 |

mod app;
mod error;
mod handlers;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;

use crate::config::SiteConfig;
pub use error::ServeError;
use state::AppState;

/// Build the router for `config` without a backing config file.
///
/// Reload requests are ignored; used by tests and embedders.
pub fn router(config: SiteConfig) -> Router {
    app::create_router(Arc::new(AppState::new(config, None)))
}

/// Run the server until Ctrl-C.
///
/// `config_path` is the file `config` was loaded from. When set, SIGHUP
/// re-reads it.
///
/// # Errors
///
/// Returns an error if the bind address is invalid or the listener fails.
pub async fn run_server(config: SiteConfig, config_path: Option<PathBuf>) -> Result<(), ServeError> {
    let addr = config.bind_addr()?;
    tracing::info!(
        content = %config.content_folder.display(),
        templates = %config.template_folder.display(),
        articles_per_page = config.articles_per_page,
        "Serving site"
    );

    let state = Arc::new(AppState::new(config, config_path));
    #[cfg(unix)]
    tokio::spawn(reload_on_hangup(Arc::clone(&state)));

    let app = app::create_router(state);

    tracing::info!(address = %addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Reload the config file each time SIGHUP arrives.
#[cfg(unix)]
async fn reload_on_hangup(state: Arc<AppState>) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(hangup) => hangup,
        Err(e) => {
            tracing::warn!(error = %e, "Cannot listen for SIGHUP, config reload disabled");
            return;
        }
    };
    while hangup.recv().await.is_some() {
        tracing::info!("SIGHUP received, reloading config");
        if let Err(e) = state.reload().await {
            tracing::error!(error = %e, "Config reload failed, keeping previous config");
        }
    }
}
