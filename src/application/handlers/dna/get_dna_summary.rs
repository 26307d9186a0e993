//! GetDnaSummary - Query handler for the display digest of a profile.

use std::sync::Arc;

use crate::domain::dna::{generate_dna_summary, DnaSummary};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::CreativeDnaRepository;

/// Query for a user's DNA summary.
#[derive(Debug, Clone)]
pub struct GetDnaSummaryQuery {
    pub user_id: UserId,
}

/// Handler for profile summaries.
pub struct GetDnaSummaryHandler {
    repository: Arc<dyn CreativeDnaRepository>,
}

impl GetDnaSummaryHandler {
    pub fn new(repository: Arc<dyn CreativeDnaRepository>) -> Self {
        Self { repository }
    }

    /// Returns `None` when the user has never been analyzed.
    pub async fn handle(&self, query: GetDnaSummaryQuery) -> Result<Option<DnaSummary>, DomainError> {
        let dna = self.repository.find_by_user(&query.user_id).await?;
        Ok(dna.as_ref().map(generate_dna_summary))
    }
}
