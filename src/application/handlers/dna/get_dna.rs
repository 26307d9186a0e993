//! GetDna - Query handler for a user's stored creative DNA.

use std::sync::Arc;

use crate::domain::dna::CreativeDna;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::CreativeDnaRepository;

/// Query for a user's profile.
#[derive(Debug, Clone)]
pub struct GetDnaQuery {
    pub user_id: UserId,
}

/// Handler for loading profiles.
pub struct GetDnaHandler {
    repository: Arc<dyn CreativeDnaRepository>,
}

impl GetDnaHandler {
    pub fn new(repository: Arc<dyn CreativeDnaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDnaQuery) -> Result<Option<CreativeDna>, DomainError> {
        self.repository.find_by_user(&query.user_id).await
    }
}
