//! Insight and recommendation rules derived from an analyzed profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UnitScore;

use super::{CreativeDna, StylePreference, WorkflowPattern};

/// Top style strength above which the profile counts as stylistically consistent.
pub const STYLE_CONSISTENCY_THRESHOLD: f64 = 0.7;

/// Time share above which a stage is flagged as time-heavy.
pub const TIME_HEAVY_THRESHOLD: f64 = 0.4;

/// Iteration count above which a stage is flagged as iteration-heavy.
pub const ITERATION_HEAVY_THRESHOLD: u32 = 10;

/// AI interaction level above which reliance is considered high.
pub const HIGH_AI_LEVEL: u8 = 7;

/// AI interaction level below which usage is considered low.
pub const LOW_AI_LEVEL: u8 = 3;

/// Profile confidence below which more projects are recommended.
pub const PROVISIONAL_CONFIDENCE: f64 = 0.5;

/// What an insight is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    DataCollection,
    VisualStyle,
    WorkflowEfficiency,
    IterationEfficiency,
    AiCollaboration,
}

/// Evidence attached to an insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightData {
    None,
    Style(StylePreference),
    Workflow(WorkflowPattern),
    AiLevel { level: u8 },
}

/// A natural-language observation about the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaInsight {
    pub category: InsightCategory,
    pub description: String,
    pub confidence: UnitScore,
    pub related_data: InsightData,
}

/// What a recommendation asks the user to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Engagement,
    WorkflowOptimization,
    AiFeatureExploration,
    DnaImprovement,
    ResourceRecommendation,
}

/// A prioritized suggestion. Priority and difficulty are on a 1-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaRecommendation {
    pub recommendation_type: RecommendationType,
    pub description: String,
    pub priority: u8,
    pub implementation_difficulty: u8,
}

impl DnaRecommendation {
    fn new(
        recommendation_type: RecommendationType,
        description: impl Into<String>,
        priority: u8,
        implementation_difficulty: u8,
    ) -> Self {
        Self {
            recommendation_type,
            description: description.into(),
            priority,
            implementation_difficulty,
        }
    }
}

/// The insight returned when there is no project history yet.
pub fn cold_start_insight() -> DnaInsight {
    DnaInsight {
        category: InsightCategory::DataCollection,
        description: "Create more projects to sharpen your creative DNA".to_string(),
        confidence: UnitScore::new(0.5),
        related_data: InsightData::None,
    }
}

/// The recommendation returned when there is no project history yet.
pub fn cold_start_recommendation() -> DnaRecommendation {
    DnaRecommendation::new(
        RecommendationType::Engagement,
        "Finish a complete project to get a more accurate creative DNA analysis",
        9,
        3,
    )
}

/// Derives insights from an analyzed profile.
///
/// Rules are independent: style consistency, then at most one workflow
/// finding, then the AI collaboration narrative which is always present.
pub fn generate_insights(dna: &CreativeDna, action_count: usize) -> Vec<DnaInsight> {
    let mut insights = Vec::new();

    if let Some(top) = dna.top_visual_style() {
        if top.strength.value() > STYLE_CONSISTENCY_THRESHOLD {
            insights.push(DnaInsight {
                category: InsightCategory::VisualStyle,
                description: format!(
                    "You show a strong, consistent preference for the {} style",
                    top.name
                ),
                confidence: UnitScore::new(top.strength.value() + 0.2),
                related_data: InsightData::Style(top.clone()),
            });
        }
    }

    if let Some(insight) = workflow_efficiency_insight(dna.workflow_patterns()) {
        insights.push(insight);
    }

    let level = dna.ai_interaction_level();
    let description = if level > HIGH_AI_LEVEL {
        "You lean heavily on AI assistance; consider balancing your own ideas with generated content"
    } else if level < LOW_AI_LEVEL {
        "You rarely use AI features; exploring AI assistance could speed up your work"
    } else {
        "You keep a healthy balance between your own ideas and AI assistance"
    };
    insights.push(DnaInsight {
        category: InsightCategory::AiCollaboration,
        description: description.to_string(),
        confidence: UnitScore::new(0.6 + action_count as f64 / 1000.0),
        related_data: InsightData::AiLevel { level },
    });

    insights
}

/// Time-heavy stages take precedence over iteration-heavy ones.
fn workflow_efficiency_insight(patterns: &[WorkflowPattern]) -> Option<DnaInsight> {
    if let Some(stage) = patterns
        .iter()
        .find(|p| p.time_spent.value() > TIME_HEAVY_THRESHOLD)
    {
        return Some(DnaInsight {
            category: InsightCategory::WorkflowEfficiency,
            description: format!(
                "You spend a large share of your time in the {} stage ({}%); consider streamlining it",
                stage.stage,
                stage.time_spent.as_percent()
            ),
            confidence: UnitScore::new(0.7),
            related_data: InsightData::Workflow(stage.clone()),
        });
    }

    patterns
        .iter()
        .find(|p| p.iteration_frequency > ITERATION_HEAVY_THRESHOLD)
        .map(|stage| DnaInsight {
            category: InsightCategory::IterationEfficiency,
            description: format!(
                "The {} stage sees frequent iteration; an earlier design or decision pass may help",
                stage.stage
            ),
            confidence: UnitScore::new(0.65),
            related_data: InsightData::Workflow(stage.clone()),
        })
}

/// Derives recommendations from insights and the profile's current confidence.
///
/// Callers pass the profile before its confidence is recomputed, so the
/// "complete more projects" nudge reflects what was known going in.
pub fn generate_recommendations(dna: &CreativeDna, insights: &[DnaInsight]) -> Vec<DnaRecommendation> {
    let mut recommendations = Vec::new();

    for insight in insights {
        match (&insight.category, &insight.related_data) {
            (InsightCategory::WorkflowEfficiency, InsightData::Workflow(pattern)) => {
                recommendations.push(DnaRecommendation::new(
                    RecommendationType::WorkflowOptimization,
                    format!(
                        "Try templates or automation to cut the time spent in the {} stage",
                        pattern.stage
                    ),
                    8,
                    5,
                ));
            }
            (InsightCategory::AiCollaboration, InsightData::AiLevel { level })
                if *level < LOW_AI_LEVEL =>
            {
                recommendations.push(DnaRecommendation::new(
                    RecommendationType::AiFeatureExploration,
                    "Explore smart text and image generation to save time",
                    7,
                    3,
                ));
            }
            _ => {}
        }
    }

    if dna.confidence().value() < PROVISIONAL_CONFIDENCE {
        recommendations.push(DnaRecommendation::new(
            RecommendationType::DnaImprovement,
            "Complete more projects to improve the accuracy of your creative DNA",
            9,
            2,
        ));
    }

    if let Some(top) = dna.top_visual_style() {
        recommendations.push(DnaRecommendation::new(
            RecommendationType::ResourceRecommendation,
            format!("Explore more templates and resources in the {} style", top.name),
            6,
            2,
        ));
    }

    recommendations
}
