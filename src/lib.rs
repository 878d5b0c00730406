//! Cart Service Library
//!
//! This library provides the bootstrap of the Cart Restful Web Service: startup
//! from command-line arguments and configuration, the published OpenAPI
//! metadata, and the typed not-found failure used by lookups.

// Domain modules
pub mod docs;
pub mod error;

// Infrastructure
pub mod bootstrap;
pub mod config;
pub mod router;
pub mod state;
pub mod telemetry;
