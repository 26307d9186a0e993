//! CreativeDnaRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::{
    dna::CreativeDna,
    foundation::{DomainError, UserId},
};

/// Repository for creative DNA profiles (one per user)
#[async_trait]
pub trait CreativeDnaRepository: Send + Sync {
    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CreativeDna>, DomainError>;

    /// Insert or replace the user's profile
    ///
    /// No version check is made; concurrent writers race and the last
    /// write wins.
    async fn upsert(&self, dna: &CreativeDna) -> Result<(), DomainError>;
}
