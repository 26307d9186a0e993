//! Analysis tuning

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for `action_limit`
pub const MAX_ACTION_LIMIT: usize = 10_000;

/// Settings for the creative DNA analysis pass
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Most recent actions loaded per analysis
    #[serde(default = "default_action_limit")]
    pub action_limit: usize,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.action_limit == 0 || self.action_limit > MAX_ACTION_LIMIT {
            return Err(ValidationError::InvalidActionLimit {
                max: MAX_ACTION_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            action_limit: default_action_limit(),
        }
    }
}

fn default_action_limit() -> usize {
    crate::application::DEFAULT_ACTION_LIMIT
}
