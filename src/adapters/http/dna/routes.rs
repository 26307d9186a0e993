//! HTTP routes for creative DNA endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    analyze_dna, enhance_prompt, get_dna, get_dna_summary, update_style, DnaHandlers,
};

/// Creates the creative DNA router, mounted under `/api/dna`.
pub fn dna_routes(handlers: DnaHandlers) -> Router {
    Router::new()
        .route("/:user_id", get(get_dna))
        .route("/:user_id/analyze", post(analyze_dna))
        .route("/:user_id/summary", get(get_dna_summary))
        .route("/:user_id/enhance-prompt", post(enhance_prompt))
        .route("/:user_id/styles", put(update_style))
        .with_state(handlers)
}
