//! Read-only activity inputs: projects and logged user actions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ActionId, ProjectId, Timestamp, UserId};

/// Duration credited to an action that did not record one
pub const DEFAULT_ACTION_DURATION: f64 = 1.0;

/// A user's creative project with its style tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub style_tags: Vec<String>,
    pub created_at: Timestamp,
}

impl Project {
    pub fn new(user_id: UserId, name: impl Into<String>, style_tags: Vec<String>) -> Self {
        Self {
            id: ProjectId::new(),
            user_id,
            name: name.into(),
            style_tags,
            created_at: Timestamp::now(),
        }
    }
}

/// Kind of a logged action, where it matters to analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    Iteration,
    AiInteraction,
    Other(String),
}

impl From<String> for ActionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "iteration" => Self::Iteration,
            "ai_interaction" => Self::AiInteraction,
            _ => Self::Other(value),
        }
    }
}

impl From<ActionType> for String {
    fn from(value: ActionType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iteration => write!(f, "iteration"),
            Self::AiInteraction => write!(f, "ai_interaction"),
            Self::Other(other) => write!(f, "{}", other),
        }
    }
}

/// A timestamped action from the user's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAction {
    pub id: ActionId,
    pub user_id: UserId,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub action_type: Option<ActionType>,
    pub timestamp: Timestamp,
}

impl UserAction {
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: ActionId::new(),
            user_id,
            stage: None,
            tool: None,
            duration: None,
            action_type: None,
            timestamp: Timestamp::now(),
        }
    }

    pub fn in_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn of_type(mut self, action_type: ActionType) -> Self {
        self.action_type = Some(action_type);
        self
    }

    pub fn at(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Stage name, treating blank names as absent
    pub fn stage_name(&self) -> Option<&str> {
        self.stage.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Tool name, treating blank names as absent
    pub fn tool_name(&self) -> Option<&str> {
        self.tool.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Recorded duration, or the default credit when none was logged
    pub fn effective_duration(&self) -> f64 {
        match self.duration {
            Some(d) if d.is_finite() && d >= 0.0 => d,
            _ => DEFAULT_ACTION_DURATION,
        }
    }

    pub fn is_iteration(&self) -> bool {
        self.action_type == Some(ActionType::Iteration)
    }

    pub fn is_ai_interaction(&self) -> bool {
        self.action_type == Some(ActionType::AiInteraction)
    }
}
