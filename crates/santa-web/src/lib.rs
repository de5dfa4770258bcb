//! HTTP front end for Santa's Advisory Desk.
//!
//! One page, one form. `GET /` renders the page for the caller's session,
//! `POST /` assesses a wish and stores it as that session's last result.
//! Sessions live only in memory and are keyed by the `santa_session` cookie.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod assets;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;

pub use config::{Config, ConfigError, Variant};
pub use error::WebError;
pub use state::State;

use routes::{asset_handler, assess_handler, health_handler, page_handler, submit_handler};
use session::spawn_sweeper;

/// Upper bound on how often idle sessions are swept.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

pub fn router(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(page_handler).post(submit_handler))
        .route("/assets/{name}", get(asset_handler))
        .route("/api/assess", post(assess_handler))
        .route("/healthz", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Validate `config`, bind, and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: Config) -> Result<(), WebError> {
    config.validate()?;

    info!("Initializing state...");
    let state = State::new(config);

    let sweep_every = (state.config.session_ttl / 2).clamp(Duration::from_secs(1), MAX_SWEEP_INTERVAL);
    let sweeper = spawn_sweeper(state.sessions.clone(), sweep_every);

    let address = state.config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    info!(variant = %state.config.variant, "Server running on {address}");

    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
