//! API Documentation Module
//!
//! This module publishes the service's OpenAPI document, including:
//! - The generated document and its descriptive metadata
//! - Lookup of named renderings (JSON, YAML)
//! - REST handlers exposing both under `/api-docs`

pub mod handlers;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::{render, routes};
pub use models::{ApiDoc, ApiMetadata};
