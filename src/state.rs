//! Application State
//!
//! Everything request handlers need is resolved at startup and shared
//! read-only behind an `Arc`.

use crate::config::ServiceConfig;
use crate::docs::{ApiDoc, ApiMetadata};
use std::sync::Arc;
use utoipa::OpenApi;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Resolved configuration plus the published API documentation
pub struct AppState {
    /// Configuration the service was started with.
    pub config: ServiceConfig,

    /// Generated OpenAPI document.
    pub openapi: utoipa::openapi::OpenApi,

    /// Title, version and description read from `openapi`.
    pub metadata: ApiMetadata,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl AppState {
    /// Builds the state for `config`, generating the OpenAPI document once
    pub fn new(config: ServiceConfig) -> Self {
        let openapi = ApiDoc::openapi();
        let metadata = ApiMetadata::from_openapi(&openapi);

        Self {
            config,
            openapi,
            metadata,
        }
    }
}
