//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Commands
    AnalyzeDnaCommand, AnalyzeDnaHandler, UpdateStylePreferenceCommand,
    UpdateStylePreferenceHandler,
    // Queries
    EnhancePromptHandler, EnhancePromptQuery, GetDnaHandler, GetDnaQuery,
    GetDnaSummaryHandler, GetDnaSummaryQuery,
    DEFAULT_ACTION_LIMIT,
};
