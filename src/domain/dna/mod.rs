//! Creative DNA module - Style and workflow profiling
//!
//! This module implements the creative DNA feature: a per-user profile
//! that summarizes which styles a user gravitates to, how their time is
//! spread across workflow stages, and how much they lean on AI assistance.
//!
//! # Architecture
//!
//! - **Profile** - The `CreativeDna` aggregate and its value objects
//! - **Activity** - Read-only projects and action log entries
//! - **Analyzer** - Aggregation of activity into the profile
//! - **Insights** - Heuristic insights and prioritized recommendations
//! - **Prompt** - Enrichment of generation prompts from the profile
//! - **Summary** - Digest for display
//!
//! # Domain Invariants
//!
//! 1. Each profile belongs to exactly one user
//! 2. Style strength and confidence stay within [0, 1]
//! 3. Style lists hold at most 10 entries, strongest first
//! 4. Version only increases, by 0.1 per completed analysis
//! 5. A user without projects gets a cold-start result, never an aggregate

pub mod activity;
pub mod analyzer;
pub mod insights;
pub mod profile;
pub mod prompt;
pub mod summary;

pub use activity::{ActionType, Project, UserAction, DEFAULT_ACTION_DURATION};
pub use analyzer::{DnaAnalysisResult, DnaAnalyzer, MAX_TOOLS_PER_STAGE};
pub use insights::{
    generate_insights, generate_recommendations, DnaInsight, DnaRecommendation,
    InsightCategory, InsightData, RecommendationType,
};
pub use profile::{
    ContentPreference, CreativeDna, CreativeDnaParts, DnaVersion, StyleKind, StylePreference,
    WorkflowPattern, MAX_STYLES,
};
pub use prompt::{
    apply_dna_to_generation, GenerationType, HIGH_AUTONOMY_DIRECTIVE, LOW_AUTONOMY_DIRECTIVE,
};
pub use summary::{generate_dna_summary, AdaptabilityLevel, ConfidenceLevel, DnaSummary, KeyStrength};
