//! HTTP DTOs for creative DNA endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::dna::{
    ContentPreference, CreativeDna, DnaAnalysisResult, DnaInsight, DnaRecommendation, DnaSummary,
    StylePreference, WorkflowPattern,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to enhance a generation prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct EnhancePromptRequest {
    pub generation_type: String,
    pub prompt: String,
}

/// Request to add or curate a style entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStyleRequest {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub strength: Option<f64>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full creative DNA profile.
#[derive(Debug, Clone, Serialize)]
pub struct DnaResponse {
    pub id: String,
    pub user_id: String,
    pub visual_style: Vec<StylePreference>,
    pub writing_style: Vec<StylePreference>,
    pub content_preferences: Vec<ContentPreference>,
    pub workflow_patterns: Vec<WorkflowPattern>,
    pub ai_interaction_level: u8,
    pub adaptability_score: u8,
    pub confidence: f64,
    pub version: f64,
    pub last_updated: String,
}

impl From<CreativeDna> for DnaResponse {
    fn from(dna: CreativeDna) -> Self {
        Self {
            id: dna.id().to_string(),
            user_id: dna.user_id().to_string(),
            visual_style: dna.visual_style().to_vec(),
            writing_style: dna.writing_style().to_vec(),
            content_preferences: dna.content_preferences().to_vec(),
            workflow_patterns: dna.workflow_patterns().to_vec(),
            ai_interaction_level: dna.ai_interaction_level(),
            adaptability_score: dna.adaptability_score(),
            confidence: dna.confidence().value(),
            version: dna.version().as_f64(),
            last_updated: dna.last_updated().as_datetime().to_rfc3339(),
        }
    }
}

/// Result of an analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub dna: DnaResponse,
    pub insights: Vec<DnaInsight>,
    pub recommendations: Vec<DnaRecommendation>,
}

impl From<DnaAnalysisResult> for AnalysisResponse {
    fn from(result: DnaAnalysisResult) -> Self {
        Self {
            dna: result.dna.into(),
            insights: result.insights,
            recommendations: result.recommendations,
        }
    }
}

/// Summary for UI display.
#[derive(Debug, Clone, Serialize)]
pub struct DnaSummaryResponse {
    pub primary_styles: Vec<String>,
    pub key_strengths: Vec<String>,
    pub workflow_insights: Vec<String>,
    pub adaptability_level: String,
    pub confidence_level: String,
}

impl From<DnaSummary> for DnaSummaryResponse {
    fn from(summary: DnaSummary) -> Self {
        Self {
            primary_styles: summary.primary_styles,
            key_strengths: summary
                .key_strengths
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
            workflow_insights: summary.workflow_insights,
            adaptability_level: summary.adaptability_level.description().to_string(),
            confidence_level: summary.confidence_level.description().to_string(),
        }
    }
}

/// Enhanced prompt.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancePromptResponse {
    pub prompt: String,
}

/// Error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Bad request carrying the failing field and any other error details.
    pub fn validation_failed(message: impl Into<String>, details: &HashMap<String, String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: if details.is_empty() {
                None
            } else {
                serde_json::to_value(details).ok()
            },
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "SERVICE_UNAVAILABLE".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
