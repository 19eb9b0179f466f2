//! Base routes for liveness checks and status reporting.

use axum::{response::Response, routing::get, Router};
use serde::Serialize;

use crate::{app::AppContext, controller::format};

/// Represents the health status of the application.
#[derive(Serialize)]
pub struct Health {
    pub ok: bool,
}

/// Check application ping endpoint.
pub async fn ping() -> Response {
    format::json(Health { ok: true })
}

/// Check application health endpoint.
pub async fn health() -> Response {
    format::json(Health { ok: true })
}

/// Defines and returns the probe routes.
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/_ping", get(ping))
        .route("/_health", get(health))
}
