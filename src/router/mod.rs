//! Routing module for the cart service

pub mod health;

use crate::error::{ApiError, DataNotFound};
use crate::state::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue, Uri},
    middleware::Next,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

/// Header carrying the id assigned to each request
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let request_id = Uuid::new_v4().simple().to_string();
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!(%request_id, %method, %uri, "request");

        let mut res = next.run(req).await;
        if res.status().is_success() {
            tracing::debug!(%request_id, status = %res.status(), "response");
        } else {
            tracing::warn!(%request_id, status = %res.status(), "response");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            res.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(health::routes())
        .merge(crate::docs::routes())
        .fallback(fallback)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Raises the not-found signal for any unmatched route
async fn fallback(uri: Uri) -> ApiError {
    DataNotFound::new(format!("no route for {}", uri.path())).into()
}
