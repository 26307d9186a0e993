//! HTTP handlers for creative DNA endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::dna::{
    AnalyzeDnaCommand, AnalyzeDnaHandler, EnhancePromptHandler, EnhancePromptQuery,
    GetDnaHandler, GetDnaQuery, GetDnaSummaryHandler, GetDnaSummaryQuery,
    UpdateStylePreferenceCommand, UpdateStylePreferenceHandler,
};
use crate::domain::dna::{GenerationType, StyleKind};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};

use super::dto::{
    AnalysisResponse, DnaResponse, DnaSummaryResponse, EnhancePromptRequest,
    EnhancePromptResponse, ErrorResponse, UpdateStyleRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DnaHandlers {
    analyze_handler: Arc<AnalyzeDnaHandler>,
    get_handler: Arc<GetDnaHandler>,
    summary_handler: Arc<GetDnaSummaryHandler>,
    enhance_handler: Arc<EnhancePromptHandler>,
    update_style_handler: Arc<UpdateStylePreferenceHandler>,
}

impl DnaHandlers {
    pub fn new(
        analyze_handler: Arc<AnalyzeDnaHandler>,
        get_handler: Arc<GetDnaHandler>,
        summary_handler: Arc<GetDnaSummaryHandler>,
        enhance_handler: Arc<EnhancePromptHandler>,
        update_style_handler: Arc<UpdateStylePreferenceHandler>,
    ) -> Self {
        Self {
            analyze_handler,
            get_handler,
            summary_handler,
            enhance_handler,
            update_style_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/dna/:user_id/analyze - Run an analysis pass
pub async fn analyze_dna(
    State(handlers): State<DnaHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_dna_error(e.into()),
    };

    match handlers
        .analyze_handler
        .handle(AnalyzeDnaCommand { user_id })
        .await
    {
        Some(result) => {
            let response: AnalysisResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::unavailable("Creative DNA analysis is unavailable")),
        )
            .into_response(),
    }
}

/// GET /api/dna/:user_id - Get the stored profile
pub async fn get_dna(
    State(handlers): State<DnaHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_dna_error(e.into()),
    };

    match handlers
        .get_handler
        .handle(GetDnaQuery {
            user_id: user_id.clone(),
        })
        .await
    {
        Ok(Some(dna)) => {
            let response: DnaResponse = dna.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Creative DNA", user_id.as_str())),
        )
            .into_response(),
        Err(e) => handle_dna_error(e),
    }
}

/// GET /api/dna/:user_id/summary - Get the display summary
pub async fn get_dna_summary(
    State(handlers): State<DnaHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_dna_error(e.into()),
    };

    match handlers
        .summary_handler
        .handle(GetDnaSummaryQuery {
            user_id: user_id.clone(),
        })
        .await
    {
        Ok(Some(summary)) => {
            let response: DnaSummaryResponse = summary.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Creative DNA", user_id.as_str())),
        )
            .into_response(),
        Err(e) => handle_dna_error(e),
    }
}

/// POST /api/dna/:user_id/enhance-prompt - Enrich a generation prompt
pub async fn enhance_prompt(
    State(handlers): State<DnaHandlers>,
    Path(user_id): Path<String>,
    Json(req): Json<EnhancePromptRequest>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_dna_error(e.into()),
    };

    let generation_type = match req.generation_type.parse::<GenerationType>() {
        Ok(t) => t,
        Err(e) => return handle_dna_error(e.into()),
    };

    let query = EnhancePromptQuery {
        user_id,
        generation_type,
        prompt: req.prompt,
    };

    match handlers.enhance_handler.handle(query).await {
        Ok(prompt) => (StatusCode::OK, Json(EnhancePromptResponse { prompt })).into_response(),
        Err(e) => handle_dna_error(e),
    }
}

/// PUT /api/dna/:user_id/styles - Add or curate a style entry
pub async fn update_style(
    State(handlers): State<DnaHandlers>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateStyleRequest>,
) -> Response {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => return handle_dna_error(e.into()),
    };

    let kind = match req.kind.parse::<StyleKind>() {
        Ok(kind) => kind,
        Err(e) => return handle_dna_error(e.into()),
    };

    let cmd = UpdateStylePreferenceCommand {
        user_id,
        kind,
        name: req.name,
        strength: req.strength,
        examples: req.examples,
        keywords: req.keywords,
    };

    match handlers.update_style_handler.handle(cmd).await {
        Ok(dna) => {
            let response: DnaResponse = dna.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dna_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_dna_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ValidationFailed => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation_failed(error.message(), &error.details)),
        )
            .into_response(),
        ErrorCode::DatabaseError | ErrorCode::InternalError => {
            tracing::error!(error = %error, "Creative DNA request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response()
        }
    }
}
