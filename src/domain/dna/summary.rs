//! Presentation-ready digest of a creative DNA profile.

use serde::{Deserialize, Serialize};

use super::{CreativeDna, StylePreference};

/// How broadly the user ranges across styles and project types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptabilityLevel {
    Focused,
    Balanced,
    Versatile,
}

impl AdaptabilityLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 4 {
            Self::Focused
        } else if score > 7 {
            Self::Versatile
        } else {
            Self::Balanced
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Focused => "Focused (prefers a consistent style and workflow)",
            Self::Balanced => "Balanced (keeps a core style with some flexibility)",
            Self::Versatile => "Versatile (adapts to different project types and styles)",
        }
    }
}

/// How much history backs the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Preliminary,
    Developing,
    HighlyAccurate,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence < 0.4 {
            Self::Preliminary
        } else if confidence < 0.7 {
            Self::Developing
        } else {
            Self::HighlyAccurate
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Preliminary => "Preliminary (create more projects to improve accuracy)",
            Self::Developing => "Developing (a basic picture that is still being refined)",
            Self::HighlyAccurate => "Highly accurate (based on a rich project history)",
        }
    }
}

/// A labeled strength surfaced in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrength {
    EfficientDecisionMaking,
    StyleConsistency,
    AiToolLeverage,
    OriginalExpression,
}

impl KeyStrength {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EfficientDecisionMaking => "Efficient decision-making",
            Self::StyleConsistency => "Style consistency",
            Self::AiToolLeverage => "AI tool leverage",
            Self::OriginalExpression => "Original expression",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaSummary {
    pub primary_styles: Vec<String>,
    pub key_strengths: Vec<KeyStrength>,
    pub workflow_insights: Vec<String>,
    pub adaptability_level: AdaptabilityLevel,
    pub confidence_level: ConfidenceLevel,
}

/// Projects a profile into its summary. Total over every valid profile.
pub fn generate_dna_summary(dna: &CreativeDna) -> DnaSummary {
    let mut styles: Vec<&StylePreference> = dna
        .visual_style()
        .iter()
        .chain(dna.writing_style().iter())
        .collect();
    styles.sort_by(|a, b| b.strength.value().total_cmp(&a.strength.value()));
    let primary_styles = styles.iter().take(5).map(|s| s.name.clone()).collect();

    let mut key_strengths = Vec::new();
    if dna
        .workflow_patterns()
        .iter()
        .any(|p| p.iteration_frequency < 3 && p.time_spent.value() > 0.2)
    {
        key_strengths.push(KeyStrength::EfficientDecisionMaking);
    }
    if dna.visual_style().iter().any(|s| s.strength.value() > 0.8) {
        key_strengths.push(KeyStrength::StyleConsistency);
    }
    let ai_level = dna.ai_interaction_level();
    if ai_level > 7 {
        key_strengths.push(KeyStrength::AiToolLeverage);
    } else if ai_level < 4 {
        key_strengths.push(KeyStrength::OriginalExpression);
    }

    let mut patterns: Vec<_> = dna.workflow_patterns().iter().collect();
    patterns.sort_by(|a, b| b.time_spent.value().total_cmp(&a.time_spent.value()));
    let workflow_insights = patterns
        .iter()
        .take(3)
        .map(|p| format!("{}% of time spent in the {} stage", p.time_spent.as_percent(), p.stage))
        .collect();

    DnaSummary {
        primary_styles,
        key_strengths,
        workflow_insights,
        adaptability_level: AdaptabilityLevel::from_score(dna.adaptability_score()),
        confidence_level: ConfidenceLevel::from_confidence(dna.confidence().value()),
    }
}
