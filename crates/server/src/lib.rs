//! Token server for the isochrone map.
//!
//! Serves the Mapbox access token to the browser so it never has to be baked
//! into static assets:
//!
//! * `GET /api/mapbox-token` → `{"token": "..."}`, or a 500 with
//!   `{"error": "Mapbox token is not set"}` when none is configured
//! * `GET /` → liveness text

mod config;
mod routes;

pub use config::ServerConfig;
pub use routes::{configure, TokenState};

use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Bind and serve until the server is stopped.
pub async fn run(config: ServerConfig) -> Result<()> {
    if config.token().is_none() {
        warn!("MAPBOX_TOKEN is not set; /api/mapbox-token will answer 500");
    }
    let state = TokenState::new(config.token());
    let (bind, port) = config.address();

    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new().configure(|cfg| configure(cfg, state))
    })
    .bind((bind, port))
    .with_context(|| format!("Failed to bind {bind}:{port}"))?;

    info!("Server running on http://{bind}:{port}");
    server.run().await.context("HTTP server error")
}
