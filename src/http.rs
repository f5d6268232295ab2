//! Liveness HTTP endpoint.
//!
//! External uptime monitors poll `GET /` to confirm the process is alive.
//! This is deliberately minimal and carries no bot state.

use std::net::SocketAddr;

use axum::{routing::get, Router};

use crate::error::AppError;

pub fn router() -> Router {
    Router::new().route("/", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "Bot is running"
}

/// Binds the liveness listener and serves until shutdown.
pub async fn serve(port: u16) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("HTTP server running on port {}", port);

    axum::serve(listener, router()).await?;

    Ok(())
}
