//! AnalyzeDna - Command handler that rebuilds a user's creative DNA.
//!
//! Analysis is best-effort: a failed read yields `None` and a failed save
//! is logged while the computed result is still returned.

use std::sync::Arc;

use crate::domain::dna::{CreativeDna, DnaAnalysisResult, DnaAnalyzer};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{ActivityReader, CreativeDnaRepository};

/// Default number of most recent actions considered per analysis.
pub const DEFAULT_ACTION_LIMIT: usize = 500;

/// Command to analyze a user's activity history.
#[derive(Debug, Clone)]
pub struct AnalyzeDnaCommand {
    pub user_id: UserId,
}

/// Handler for DNA analysis.
pub struct AnalyzeDnaHandler {
    repository: Arc<dyn CreativeDnaRepository>,
    activity: Arc<dyn ActivityReader>,
    action_limit: usize,
}

impl AnalyzeDnaHandler {
    pub fn new(
        repository: Arc<dyn CreativeDnaRepository>,
        activity: Arc<dyn ActivityReader>,
    ) -> Self {
        Self {
            repository,
            activity,
            action_limit: DEFAULT_ACTION_LIMIT,
        }
    }

    /// Overrides how many recent actions are loaded.
    pub fn with_action_limit(mut self, action_limit: usize) -> Self {
        self.action_limit = action_limit;
        self
    }

    pub async fn handle(&self, cmd: AnalyzeDnaCommand) -> Option<DnaAnalysisResult> {
        let user_id = &cmd.user_id;

        // 1. Load existing profile or start fresh
        let dna = match self.repository.find_by_user(user_id).await {
            Ok(Some(dna)) => dna,
            Ok(None) => CreativeDna::initial(user_id.clone(), Timestamp::now()),
            Err(err) => {
                tracing::error!(user_id = %user_id, error = %err, "Failed to load creative DNA");
                return None;
            }
        };

        // 2. Load activity history
        let projects = match self.activity.list_projects(user_id).await {
            Ok(projects) => projects,
            Err(err) => {
                tracing::error!(user_id = %user_id, error = %err, "Failed to load projects");
                return None;
            }
        };

        let actions = match self.activity.recent_actions(user_id, self.action_limit).await {
            Ok(actions) => actions,
            Err(err) => {
                tracing::error!(user_id = %user_id, error = %err, "Failed to load user actions");
                return None;
            }
        };

        // 3. Aggregate
        let result = DnaAnalyzer::analyze(dna, &projects, &actions, Timestamp::now());

        if result.is_cold_start() {
            tracing::debug!(user_id = %user_id, "No projects yet, returning cold-start analysis");
            return Some(result);
        }

        // 4. Persist; the analysis stands even if the save fails
        if let Err(err) = self.repository.upsert(&result.dna).await {
            tracing::warn!(user_id = %user_id, error = %err, "Failed to save creative DNA");
        }

        tracing::debug!(
            user_id = %user_id,
            projects = projects.len(),
            actions = actions.len(),
            version = %result.dna.version(),
            "Creative DNA analyzed"
        );

        Some(result)
    }
}
