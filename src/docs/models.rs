//! API Documentation Models
//!
//! The OpenAPI document is the single source of the service metadata;
//! [`ApiMetadata`] is read back from it rather than duplicated.

use crate::error::ErrorBody;
use crate::router::health::HealthResponse;
use serde::Serialize;
use utoipa::{Modify, OpenApi, ToSchema};

// =============================================================================
// Constants
// =============================================================================

/// Title published in the OpenAPI document
pub const API_TITLE: &str = "Cart Restful Web Service";
/// API version published in the OpenAPI document
pub const API_VERSION: &str = "v1";
/// Description published in the OpenAPI document
pub const API_DESCRIPTION: &str = "Cart Restful Web Service documentation";

/// Name of the metadata document
pub const METADATA: &str = "metadata";
/// Name of the JSON rendering
pub const OPENAPI_JSON: &str = "openapi.json";
/// Name of the YAML rendering
pub const OPENAPI_YAML: &str = "openapi.yaml";

// =============================================================================
// OpenAPI Document
// =============================================================================

/// Writes the published title, version and description into the document.
struct InfoAddon;

impl Modify for InfoAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = API_TITLE.to_string();
        openapi.info.version = API_VERSION.to_string();
        openapi.info.description = Some(API_DESCRIPTION.to_string());
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&InfoAddon),
    paths(
        crate::router::health::health,
        crate::docs::handlers::get_metadata,
        crate::docs::handlers::get_document,
    ),
    components(schemas(ApiMetadata, HealthResponse, ErrorBody)),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "docs", description = "API documentation and discovery")
    )
)]
pub struct ApiDoc;

/// Descriptive metadata consumed by documentation and discovery tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApiMetadata {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl ApiMetadata {
    /// Reads the metadata of the service's own document.
    pub fn current() -> Self {
        Self::from_openapi(&ApiDoc::openapi())
    }

    /// Extracts title, version and description from a generated document.
    pub fn from_openapi(doc: &utoipa::openapi::OpenApi) -> Self {
        Self {
            title: doc.info.title.clone(),
            version: doc.info.version.clone(),
            description: doc.info.description.clone().unwrap_or_default(),
        }
    }
}
