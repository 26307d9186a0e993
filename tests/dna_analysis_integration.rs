//! Integration tests for the creative DNA analysis flow.
//!
//! These tests run the application handlers against the in-memory store:
//! 1. Analysis aggregates styles and workflow and persists the profile
//! 2. Re-analysis bumps the version and keeps curated keywords
//! 3. Summaries and prompt enhancement read the persisted profile

use std::sync::Arc;

use creative_dna::adapters::InMemoryDnaStore;
use creative_dna::application::{
    AnalyzeDnaCommand, AnalyzeDnaHandler, EnhancePromptHandler, EnhancePromptQuery,
    GetDnaHandler, GetDnaQuery, GetDnaSummaryHandler, GetDnaSummaryQuery,
    UpdateStylePreferenceCommand, UpdateStylePreferenceHandler,
};
use creative_dna::domain::dna::{
    ActionType, ConfidenceLevel, GenerationType, InsightCategory, Project, RecommendationType,
    StyleKind, UserAction,
};
use creative_dna::domain::foundation::{Timestamp, UserId};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    store: Arc<InMemoryDnaStore>,
    analyze: AnalyzeDnaHandler,
    get: GetDnaHandler,
    summary: GetDnaSummaryHandler,
    enhance: EnhancePromptHandler,
    update_style: UpdateStylePreferenceHandler,
}

impl Fixture {
    fn new() -> Self {
        let store = Arc::new(InMemoryDnaStore::new());
        Self {
            analyze: AnalyzeDnaHandler::new(store.clone(), store.clone()),
            get: GetDnaHandler::new(store.clone()),
            summary: GetDnaSummaryHandler::new(store.clone()),
            enhance: EnhancePromptHandler::new(store.clone()),
            update_style: UpdateStylePreferenceHandler::new(store.clone()),
            store,
        }
    }

    async fn seed_projects(&self, tag_sets: &[&[&str]]) {
        for (i, tags) in tag_sets.iter().enumerate() {
            self.store
                .add_project(Project::new(
                    user(),
                    format!("project-{}", i),
                    tags.iter().map(|t| t.to_string()).collect(),
                ))
                .await;
        }
    }

    async fn analyze(&self) -> creative_dna::domain::dna::DnaAnalysisResult {
        self.analyze
            .handle(AnalyzeDnaCommand { user_id: user() })
            .await
            .expect("analysis should succeed against the in-memory store")
    }
}

fn user() -> UserId {
    UserId::new("artist-42").unwrap()
}

// =============================================================================
// Analysis
// =============================================================================

#[tokio::test]
async fn shared_tags_get_equal_strength() {
    let fixture = Fixture::new();
    fixture
        .seed_projects(&[&["minimalist"], &["minimalist", "bold"], &["bold"]])
        .await;

    let result = fixture.analyze().await;

    let styles = result.dna.visual_style();
    assert_eq!(styles.len(), 2);
    assert_eq!(styles[0].name, "minimalist");
    assert_eq!(styles[1].name, "bold");
    for style in styles {
        assert!((style.strength.value() - 2.0 / 3.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn stage_time_share_follows_durations() {
    let fixture = Fixture::new();
    fixture.seed_projects(&[&["ink"]]).await;
    fixture
        .store
        .add_action(UserAction::new(user()).in_stage("draft").with_duration(30.0))
        .await;
    fixture
        .store
        .add_action(UserAction::new(user()).in_stage("edit").with_duration(70.0))
        .await;

    let result = fixture.analyze().await;

    let edit = result
        .dna
        .workflow_patterns()
        .iter()
        .find(|p| p.stage == "edit")
        .unwrap();
    assert!((edit.time_spent.value() - 0.7).abs() < 1e-9);
    assert!(result
        .insights
        .iter()
        .any(|i| i.category == InsightCategory::WorkflowEfficiency));
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.recommendation_type == RecommendationType::WorkflowOptimization));
}

#[tokio::test]
async fn analysis_persists_and_increments_version() {
    let fixture = Fixture::new();
    fixture.seed_projects(&[&["noir"], &["noir"]]).await;

    let first = fixture.analyze().await;
    let second = fixture.analyze().await;

    assert!((first.dna.version().as_f64() - 1.1).abs() < 1e-9);
    assert!((second.dna.version().as_f64() - 1.2).abs() < 1e-9);
    assert_eq!(first.dna.id(), second.dna.id());

    let stored = fixture
        .get
        .handle(GetDnaQuery { user_id: user() })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, second.dna);
}

#[tokio::test]
async fn cold_start_leaves_store_empty() {
    let fixture = Fixture::new();

    let result = fixture.analyze().await;

    assert!(result.is_cold_start());
    assert_eq!(result.insights.len(), 1);
    assert_eq!(result.recommendations.len(), 1);
    assert_eq!(fixture.store.profile_count().await, 0);
}

#[tokio::test]
async fn ai_heavy_history_raises_interaction_level() {
    let fixture = Fixture::new();
    fixture.seed_projects(&[&["pixel"]]).await;
    for _ in 0..9 {
        fixture
            .store
            .add_action(
                UserAction::new(user())
                    .in_stage("generate")
                    .of_type(ActionType::AiInteraction)
                    .at(Timestamp::now().minus_minutes(5)),
            )
            .await;
    }
    fixture
        .store
        .add_action(UserAction::new(user()).in_stage("polish"))
        .await;

    let result = fixture.analyze().await;

    assert_eq!(result.dna.ai_interaction_level(), 9);
    let ai_insight = result
        .insights
        .iter()
        .find(|i| i.category == InsightCategory::AiCollaboration)
        .unwrap();
    assert!(ai_insight.description.contains("heavily"));
    assert!((ai_insight.confidence.value() - 0.61).abs() < 1e-9);
}

// =============================================================================
// Curation, summary and prompt enhancement
// =============================================================================

#[tokio::test]
async fn curated_keywords_survive_reanalysis() {
    let fixture = Fixture::new();
    fixture.seed_projects(&[&["bauhaus"], &["bauhaus", "swiss"]]).await;
    fixture.analyze().await;

    fixture
        .update_style
        .handle(UpdateStylePreferenceCommand {
            user_id: user(),
            kind: StyleKind::Visual,
            name: "bauhaus".to_string(),
            strength: None,
            examples: vec!["poster-01.png".to_string()],
            keywords: vec!["grid".to_string(), "primary".to_string()],
        })
        .await
        .unwrap();

    let result = fixture.analyze().await;

    let bauhaus = &result.dna.visual_style()[0];
    assert_eq!(bauhaus.name, "bauhaus");
    assert_eq!(bauhaus.strength.value(), 1.0);
    assert_eq!(bauhaus.keywords, vec!["grid", "primary"]);
    assert_eq!(bauhaus.examples, vec!["poster-01.png"]);
}

#[tokio::test]
async fn summary_reflects_analyzed_profile() {
    let fixture = Fixture::new();
    assert!(fixture
        .summary
        .handle(GetDnaSummaryQuery { user_id: user() })
        .await
        .unwrap()
        .is_none());

    fixture.seed_projects(&[&["noir"], &["noir", "pulp"]]).await;
    fixture.analyze().await;

    let summary = fixture
        .summary
        .handle(GetDnaSummaryQuery { user_id: user() })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(summary.primary_styles, vec!["noir", "pulp"]);
    // 0.3 + 2 projects * 0.05 + consistent top style 0.1
    assert_eq!(summary.confidence_level, ConfidenceLevel::Developing);
}

#[tokio::test]
async fn enhanced_image_prompt_names_top_styles() {
    let fixture = Fixture::new();
    fixture
        .seed_projects(&[&["watercolor"], &["watercolor", "botanical"]])
        .await;
    fixture.analyze().await;

    let prompt = fixture
        .enhance
        .handle(EnhancePromptQuery {
            user_id: user(),
            generation_type: GenerationType::Image,
            prompt: "A fern.".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(prompt, "A fern. Style: watercolor, botanical.");
}
