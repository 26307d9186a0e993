//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dna;

pub use dna::{
    AnalyzeDnaCommand, AnalyzeDnaHandler, EnhancePromptHandler, EnhancePromptQuery,
    GetDnaHandler, GetDnaQuery, GetDnaSummaryHandler, GetDnaSummaryQuery,
    UpdateStylePreferenceCommand, UpdateStylePreferenceHandler, DEFAULT_ACTION_LIMIT,
};
