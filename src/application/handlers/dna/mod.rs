//! Creative DNA handlers.

mod analyze_dna;
mod enhance_prompt;
mod get_dna;
mod get_dna_summary;
mod update_style_preference;

pub use analyze_dna::{AnalyzeDnaCommand, AnalyzeDnaHandler, DEFAULT_ACTION_LIMIT};
pub use enhance_prompt::{EnhancePromptHandler, EnhancePromptQuery};
pub use get_dna::{GetDnaHandler, GetDnaQuery};
pub use get_dna_summary::{GetDnaSummaryHandler, GetDnaSummaryQuery};
pub use update_style_preference::{UpdateStylePreferenceCommand, UpdateStylePreferenceHandler};
