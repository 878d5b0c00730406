//! REST API handlers for API documentation
//!
//! `GET /api-docs/metadata` returns the descriptive metadata and
//! `GET /api-docs/{document}` returns a named rendering of the document.

use super::models::*;
use crate::error::{ApiError, ApiResult, DataNotFound, ErrorBody};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::openapi::OpenApi;

/// Creates routes for documentation lookups
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api-docs/:document", get(get_document))
}

/// Looks up a named rendering of `openapi`.
///
/// Known names are [`OPENAPI_JSON`] and [`OPENAPI_YAML`]; any other name
/// raises [`DataNotFound`].
pub fn render(openapi: &OpenApi, document: &str) -> ApiResult<String> {
    match document {
        OPENAPI_JSON => openapi
            .to_pretty_json()
            .map_err(|e| ApiError::Internal(format!("render {document}: {e}"))),
        OPENAPI_YAML => openapi
            .to_yaml()
            .map_err(|e| ApiError::Internal(format!("render {document}: {e}"))),
        other => Err(DataNotFound::new(format!("api document '{other}' not found")).into()),
    }
}

/// Endpoint: GET /api-docs/metadata
/// Returns title, version and description of the API.
#[utoipa::path(
    get,
    path = "/api-docs/metadata",
    tag = "docs",
    responses(
        (status = 200, description = "Service metadata", body = ApiMetadata)
    )
)]
pub async fn get_metadata(State(state): State<SharedState>) -> Json<ApiMetadata> {
    Json(state.metadata.clone())
}

/// Endpoint: GET /api-docs/{document}
/// Serves `openapi.json` or `openapi.yaml`; `metadata` is handed to
/// [`get_metadata`].
#[utoipa::path(
    get,
    path = "/api-docs/{document}",
    tag = "docs",
    params(
        ("document" = String, Path, description = "Document name: metadata, openapi.json or openapi.yaml")
    ),
    responses(
        (status = 200, description = "Rendered OpenAPI document"),
        (status = 404, description = "Unknown document", body = ErrorBody)
    )
)]
pub async fn get_document(
    State(state): State<SharedState>,
    Path(document): Path<String>,
) -> ApiResult<Response> {
    if document == METADATA {
        return Ok(get_metadata(State(state)).await.into_response());
    }

    let body = render(&state.openapi, &document)?;
    let content_type = if document == OPENAPI_YAML {
        "application/yaml"
    } else {
        "application/json"
    };

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use utoipa::OpenApi as _;

    #[test]
    fn test_render_json() {
        let json = render(&ApiDoc::openapi(), OPENAPI_JSON).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["info"]["title"], API_TITLE);
        assert_eq!(value["info"]["version"], API_VERSION);
        assert_eq!(value["info"]["description"], API_DESCRIPTION);
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&ApiDoc::openapi(), OPENAPI_YAML).unwrap();
        assert!(yaml.contains("title: Cart Restful Web Service"));
    }

    #[test]
    fn test_render_unknown_document() {
        let err = render(&ApiDoc::openapi(), "swagger.xml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "api document 'swagger.xml' not found");
    }
}
