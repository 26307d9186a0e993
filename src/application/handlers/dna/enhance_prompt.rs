//! EnhancePrompt - Query handler that enriches a generation prompt.

use std::sync::Arc;

use crate::domain::dna::{apply_dna_to_generation, GenerationType};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::CreativeDnaRepository;

/// Query to enhance a prompt with the user's profile.
#[derive(Debug, Clone)]
pub struct EnhancePromptQuery {
    pub user_id: UserId,
    pub generation_type: GenerationType,
    pub prompt: String,
}

/// Handler for prompt enhancement.
pub struct EnhancePromptHandler {
    repository: Arc<dyn CreativeDnaRepository>,
}

impl EnhancePromptHandler {
    pub fn new(repository: Arc<dyn CreativeDnaRepository>) -> Self {
        Self { repository }
    }

    /// Users without a profile get their prompt back unchanged.
    pub async fn handle(&self, query: EnhancePromptQuery) -> Result<String, DomainError> {
        let enhanced = match self.repository.find_by_user(&query.user_id).await? {
            Some(dna) => apply_dna_to_generation(&dna, query.generation_type, &query.prompt),
            None => query.prompt,
        };
        Ok(enhanced)
    }
}
