//! In-Memory Creative DNA Store
//!
//! Holds profiles, projects and actions in memory and implements both
//! `CreativeDnaRepository` and `ActivityReader`.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dna::{CreativeDna, Project, UserAction};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{ActivityReader, CreativeDnaRepository};

/// In-memory storage for profiles and activity
#[derive(Debug, Clone, Default)]
pub struct InMemoryDnaStore {
    profiles: Arc<RwLock<HashMap<UserId, CreativeDna>>>,
    projects: Arc<RwLock<Vec<Project>>>,
    actions: Arc<RwLock<Vec<UserAction>>>,
}

impl InMemoryDnaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a project
    pub async fn add_project(&self, project: Project) {
        self.projects.write().await.push(project);
    }

    /// Record an action
    pub async fn add_action(&self, action: UserAction) {
        self.actions.write().await.push(action);
    }

    /// Get the number of stored profiles
    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl CreativeDnaRepository for InMemoryDnaStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<CreativeDna>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn upsert(&self, dna: &CreativeDna) -> Result<(), DomainError> {
        self.profiles
            .write()
            .await
            .insert(dna.user_id().clone(), dna.clone());
        Ok(())
    }
}

#[async_trait]
impl ActivityReader for InMemoryDnaStore {
    async fn list_projects(&self, user_id: &UserId) -> Result<Vec<Project>, DomainError> {
        let mut projects: Vec<Project> = self
            .projects
            .read()
            .await
            .iter()
            .filter(|p| &p.user_id == user_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn recent_actions(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<UserAction>, DomainError> {
        let mut actions: Vec<UserAction> = self
            .actions
            .read()
            .await
            .iter()
            .filter(|a| &a.user_id == user_id)
            .cloned()
            .collect();
        actions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        actions.truncate(limit);
        Ok(actions)
    }
}
