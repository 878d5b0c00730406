//! Liveness endpoint for orchestration and load balancers.

use crate::state::SharedState;
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Creates the health route
pub fn routes() -> Router<SharedState> {
    Router::new().route("/health", get(health))
}

/// Response for `GET /health`
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `running` while the process serves requests
    pub status: String,

    /// Title of the service
    pub service: String,

    /// API version
    pub version: String,
}

/// Endpoint: GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(HealthResponse {
            status: "running".to_string(),
            service: state.metadata.title.clone(),
            version: state.metadata.version.clone(),
        }),
    )
}
