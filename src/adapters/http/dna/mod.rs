//! HTTP adapter for creative DNA endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisResponse, DnaResponse, DnaSummaryResponse, EnhancePromptRequest,
    EnhancePromptResponse, ErrorResponse, UpdateStyleRequest,
};
pub use handlers::DnaHandlers;
pub use routes::dna_routes;
