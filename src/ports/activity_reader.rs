//! ActivityReader port for the user's project and action history

use async_trait::async_trait;

use crate::domain::{
    dna::{Project, UserAction},
    foundation::{DomainError, UserId},
};

/// Query operations over a user's creative activity
#[async_trait]
pub trait ActivityReader: Send + Sync {
    /// All projects owned by the user, newest first
    async fn list_projects(&self, user_id: &UserId) -> Result<Vec<Project>, DomainError>;

    /// The user's most recent actions, newest first, at most `limit`
    async fn recent_actions(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<UserAction>, DomainError>;
}
