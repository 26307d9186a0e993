//! Prompt enhancement from a creative DNA profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::CreativeDna;

/// AI level at or below which the user keeps control of choices.
pub const LOW_AUTONOMY_LEVEL: u8 = 3;

/// AI level at or above which the model may act autonomously.
pub const HIGH_AUTONOMY_LEVEL: u8 = 8;

/// Appended for users who prefer to stay in control.
pub const LOW_AUTONOMY_DIRECTIVE: &str =
    " Offer more options and decision points so the user stays in control.";

/// Appended for users who prefer finished output.
pub const HIGH_AUTONOMY_DIRECTIVE: &str =
    " Deliver complete, polished output that minimizes the need for user intervention.";

const TOP_STYLES: usize = 3;
const MAX_KEYWORDS: usize = 10;
const MAX_TOOLS: usize = 5;

/// Kind of content a prompt will generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationType {
    Text,
    Image,
    Workflow,
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
            Self::Workflow => write!(f, "workflow"),
        }
    }
}

impl FromStr for GenerationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "workflow" => Ok(Self::Workflow),
            other => Err(ValidationError::invalid_format(
                "generation_type",
                format!("unknown generation type '{}'", other),
            )),
        }
    }
}

/// Appends style, keyword or tool hints and an autonomy directive to `prompt`.
pub fn apply_dna_to_generation(dna: &CreativeDna, generation_type: GenerationType, prompt: &str) -> String {
    let mut enhanced = prompt.to_string();

    match generation_type {
        GenerationType::Text => {
            let top = &dna.writing_style()[..dna.writing_style().len().min(TOP_STYLES)];
            if !top.is_empty() {
                let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
                enhanced.push_str(&format!(" Write in a {} style.", names.join(", ")));

                let keywords: Vec<&str> = top
                    .iter()
                    .flat_map(|s| s.keywords.iter().map(String::as_str))
                    .take(MAX_KEYWORDS)
                    .collect();
                if !keywords.is_empty() {
                    enhanced.push_str(&format!(
                        " Consider using these keywords: {}.",
                        keywords.join(", ")
                    ));
                }
            }
        }
        GenerationType::Image => {
            let names: Vec<&str> = dna
                .visual_style()
                .iter()
                .take(TOP_STYLES)
                .map(|s| s.name.as_str())
                .collect();
            if !names.is_empty() {
                enhanced.push_str(&format!(" Style: {}.", names.join(", ")));
            }
        }
        GenerationType::Workflow => {
            let mut tools: Vec<&str> = Vec::new();
            for tool in dna
                .workflow_patterns()
                .iter()
                .flat_map(|p| p.preferred_tools.iter().map(String::as_str))
            {
                if !tools.contains(&tool) {
                    tools.push(tool);
                }
                if tools.len() == MAX_TOOLS {
                    break;
                }
            }
            if !tools.is_empty() {
                enhanced.push_str(&format!(" Prefer these tools: {}.", tools.join(", ")));
            }
        }
    }

    let level = dna.ai_interaction_level();
    if level <= LOW_AUTONOMY_LEVEL {
        enhanced.push_str(LOW_AUTONOMY_DIRECTIVE);
    } else if level >= HIGH_AUTONOMY_LEVEL {
        enhanced.push_str(HIGH_AUTONOMY_DIRECTIVE);
    }

    enhanced
}
