//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod dna;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

// Re-export key types for convenience
pub use dna::{dna_routes, DnaHandlers};

/// Builds the application router: creative DNA endpoints plus a health probe.
pub fn api_router(handlers: DnaHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/dna", dna_routes(handlers))
}

/// GET /health - Liveness probe
async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
