//! DNA Analyzer - Aggregates project and action history into a profile.
//!
//! Pure functions only; loading and saving live in the application layer.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::foundation::{Timestamp, UnitScore};

use super::insights::{
    cold_start_insight, cold_start_recommendation, generate_insights, generate_recommendations,
    STYLE_CONSISTENCY_THRESHOLD,
};
use super::profile::MAX_STYLES;
use super::{CreativeDna, DnaInsight, DnaRecommendation, Project, StylePreference, UserAction, WorkflowPattern};

/// Maximum number of preferred tools kept per stage.
pub const MAX_TOOLS_PER_STAGE: usize = 5;

/// Outcome of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaAnalysisResult {
    pub dna: CreativeDna,
    pub insights: Vec<DnaInsight>,
    pub recommendations: Vec<DnaRecommendation>,
    #[serde(skip)]
    cold_start: bool,
}

impl DnaAnalysisResult {
    /// Degraded result for users without project history; the profile is untouched.
    pub fn cold_start(dna: CreativeDna) -> Self {
        Self {
            dna,
            insights: vec![cold_start_insight()],
            recommendations: vec![cold_start_recommendation()],
            cold_start: true,
        }
    }

    /// True when no aggregation ran because there was no project history.
    pub fn is_cold_start(&self) -> bool {
        self.cold_start
    }
}

/// Stateless aggregator over a user's activity history.
pub struct DnaAnalyzer;

impl DnaAnalyzer {
    /// Runs a full analysis pass over the given history.
    ///
    /// With no projects, returns the cold-start result without touching the
    /// profile. Otherwise aggregates styles and (when present) actions,
    /// derives insights and recommendations, recomputes confidence and
    /// bumps the version.
    pub fn analyze(
        mut dna: CreativeDna,
        projects: &[Project],
        actions: &[UserAction],
        now: Timestamp,
    ) -> DnaAnalysisResult {
        if projects.is_empty() {
            return DnaAnalysisResult::cold_start(dna);
        }

        let visual_style = Self::aggregate_styles(dna.visual_style(), projects);
        dna.replace_visual_style(visual_style);

        if !actions.is_empty() {
            dna.replace_workflow_patterns(Self::aggregate_workflow(actions));
            let level = Self::ai_interaction_level(actions, dna.ai_interaction_level());
            dna.set_ai_interaction_level(level);
        }

        let insights = generate_insights(&dna, actions.len());
        let recommendations = generate_recommendations(&dna, &insights);

        let confidence = Self::calculate_confidence(dna.visual_style(), projects.len(), actions.len());
        dna.complete_analysis(confidence, now);

        DnaAnalysisResult {
            dna,
            insights,
            recommendations,
            cold_start: false,
        }
    }

    /// Counts style tags across projects and ranks them by share of projects.
    ///
    /// Ties keep first-seen order. Examples and keywords of a style already
    /// in `previous` are carried over by name.
    pub fn aggregate_styles(previous: &[StylePreference], projects: &[Project]) -> Vec<StylePreference> {
        if projects.is_empty() {
            return previous.to_vec();
        }

        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in projects.iter().flat_map(|p| p.style_tags.iter()) {
            let tag = tag.as_str();
            if tag.trim().is_empty() {
                continue;
            }
            let count = counts.entry(tag).or_insert_with(|| {
                order.push(tag);
                0
            });
            *count += 1;
        }

        let total = projects.len() as f64;
        let mut styles: Vec<StylePreference> = order
            .into_iter()
            .map(|name| {
                let strength = UnitScore::new(counts[name] as f64 / total);
                let existing = previous.iter().find(|s| s.name == name);
                StylePreference {
                    name: name.to_string(),
                    strength,
                    examples: existing.map(|s| s.examples.clone()).unwrap_or_default(),
                    keywords: existing.map(|s| s.keywords.clone()).unwrap_or_default(),
                }
            })
            .collect();

        styles.sort_by(|a, b| b.strength.value().total_cmp(&a.strength.value()));
        styles.truncate(MAX_STYLES);
        styles
    }

    /// Builds per-stage time shares, iteration counts and preferred tools.
    ///
    /// Stages appear in first-seen order. A stage's tools are the tools used
    /// in that stage, ranked by how often each tool is used overall.
    pub fn aggregate_workflow(actions: &[UserAction]) -> Vec<WorkflowPattern> {
        let mut stage_order: Vec<&str> = Vec::new();
        let mut stage_time: HashMap<&str, f64> = HashMap::new();
        let mut stage_iterations: HashMap<&str, u32> = HashMap::new();
        let mut stage_tools: HashMap<&str, HashSet<&str>> = HashMap::new();
        let mut tool_order: Vec<&str> = Vec::new();
        let mut tool_usage: HashMap<&str, usize> = HashMap::new();

        for action in actions {
            let stage = action.stage_name();
            let tool = action.tool_name();

            if let Some(stage) = stage {
                let time = stage_time.entry(stage).or_insert_with(|| {
                    stage_order.push(stage);
                    0.0
                });
                *time += action.effective_duration();

                if action.is_iteration() {
                    *stage_iterations.entry(stage).or_insert(0) += 1;
                }
            }

            if let Some(tool) = tool {
                let uses = tool_usage.entry(tool).or_insert_with(|| {
                    tool_order.push(tool);
                    0
                });
                *uses += 1;

                if let Some(stage) = stage {
                    stage_tools.entry(stage).or_default().insert(tool);
                }
            }
        }

        let total_time: f64 = stage_time.values().sum();

        stage_order
            .into_iter()
            .map(|stage| {
                let time_spent = if total_time > 0.0 {
                    UnitScore::new(stage_time[stage] / total_time)
                } else {
                    UnitScore::ZERO
                };

                let used_here = stage_tools.get(stage);
                let mut tools: Vec<&str> = tool_order
                    .iter()
                    .copied()
                    .filter(|tool| used_here.is_some_and(|set| set.contains(tool)))
                    .collect();
                tools.sort_by(|a, b| tool_usage[b].cmp(&tool_usage[a]));
                tools.truncate(MAX_TOOLS_PER_STAGE);

                WorkflowPattern {
                    stage: stage.to_string(),
                    time_spent,
                    iteration_frequency: stage_iterations.get(stage).copied().unwrap_or(0),
                    preferred_tools: tools.into_iter().map(String::from).collect(),
                }
            })
            .collect()
    }

    /// Share of AI interactions scaled to 0-10; keeps `prior` when there are none.
    pub fn ai_interaction_level(actions: &[UserAction], prior: u8) -> u8 {
        let ai_count = actions.iter().filter(|a| a.is_ai_interaction()).count();
        if ai_count == 0 {
            return prior;
        }
        let ratio = ai_count as f64 / actions.len() as f64;
        (ratio * 10.0).round() as u8
    }

    /// Heuristic confidence: base 0.3, up to +0.3 for projects, up to +0.2
    /// for actions, +0.1 when the top style is consistent. Capped at 1.0.
    pub fn calculate_confidence(
        visual_style: &[StylePreference],
        project_count: usize,
        action_count: usize,
    ) -> UnitScore {
        let mut confidence = 0.3;
        confidence += (project_count as f64 * 0.05).min(0.3);
        confidence += (action_count as f64 * 0.001).min(0.2);

        if visual_style
            .first()
            .is_some_and(|s| s.strength.value() > STYLE_CONSISTENCY_THRESHOLD)
        {
            confidence += 0.1;
        }

        UnitScore::new(confidence.min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dna::{ActionType, InsightCategory, RecommendationType};
    use crate::domain::foundation::UserId;
    use proptest::prelude::*;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn project(tags: &[&str]) -> Project {
        Project::new(user(), "Project", tags.iter().map(|t| t.to_string()).collect())
    }

    fn action(stage: &str) -> UserAction {
        UserAction::new(user()).in_stage(stage)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn style_strength_is_share_of_projects() {
        let projects = vec![
            project(&["minimalist"]),
            project(&["minimalist", "bold"]),
            project(&["bold"]),
        ];

        let styles = DnaAnalyzer::aggregate_styles(&[], &projects);
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0].name, "minimalist");
        assert_eq!(styles[1].name, "bold");
        assert!(approx(styles[0].strength.value(), 2.0 / 3.0));
        assert!(approx(styles[1].strength.value(), 2.0 / 3.0));
    }

    #[test]
    fn style_strength_caps_at_one_for_repeated_tags() {
        let projects = vec![project(&["grunge", "grunge", "grunge"])];
        let styles = DnaAnalyzer::aggregate_styles(&[], &projects);
        assert_eq!(styles[0].strength.value(), 1.0);
    }

    #[test]
    fn style_list_keeps_top_ten_sorted() {
        let mut projects = Vec::new();
        for i in 0..12 {
            let tags: Vec<String> = (0..=i).map(|t| format!("style-{}", t)).collect();
            projects.push(Project::new(user(), "p", tags));
        }

        let styles = DnaAnalyzer::aggregate_styles(&[], &projects);
        assert_eq!(styles.len(), MAX_STYLES);
        assert_eq!(styles[0].name, "style-0");
        assert!(styles
            .windows(2)
            .all(|w| w[0].strength.value() >= w[1].strength.value()));
    }

    #[test]
    fn style_merge_preserves_prior_examples_and_keywords() {
        let previous = vec![StylePreference::new("bold", UnitScore::new(0.2))
            .unwrap()
            .with_examples(vec!["poster-3".to_string()])
            .with_keywords(vec!["contrast".to_string()])];
        let projects = vec![project(&["bold"]), project(&["calm"])];

        let styles = DnaAnalyzer::aggregate_styles(&previous, &projects);
        let bold = styles.iter().find(|s| s.name == "bold").unwrap();
        assert_eq!(bold.examples, vec!["poster-3"]);
        assert_eq!(bold.keywords, vec!["contrast"]);
        assert!(approx(bold.strength.value(), 0.5));

        let calm = styles.iter().find(|s| s.name == "calm").unwrap();
        assert!(calm.examples.is_empty());
    }

    #[test]
    fn styles_absent_from_projects_are_dropped() {
        let previous = vec![StylePreference::new("vintage", UnitScore::new(0.9)).unwrap()];
        let styles = DnaAnalyzer::aggregate_styles(&previous, &[project(&["modern"])]);
        assert!(styles.iter().all(|s| s.name != "vintage"));
    }

    #[test]
    fn workflow_time_share_follows_durations() {
        let actions = vec![
            action("draft").with_duration(30.0),
            action("edit").with_duration(70.0),
        ];

        let patterns = DnaAnalyzer::aggregate_workflow(&actions);
        let edit = patterns.iter().find(|p| p.stage == "edit").unwrap();
        assert!(approx(edit.time_spent.value(), 0.7));
        assert_eq!(patterns[0].stage, "draft");
    }

    #[test]
    fn workflow_missing_duration_counts_as_one() {
        let actions = vec![action("draft"), action("draft"), action("edit").with_duration(2.0)];
        let patterns = DnaAnalyzer::aggregate_workflow(&actions);
        assert!(approx(patterns[0].time_spent.value(), 0.5));
        assert!(approx(patterns[1].time_spent.value(), 0.5));
    }

    #[test]
    fn workflow_zero_total_time_yields_zero_share() {
        let actions = vec![action("draft").with_duration(0.0)];
        let patterns = DnaAnalyzer::aggregate_workflow(&actions);
        assert_eq!(patterns[0].time_spent, UnitScore::ZERO);
    }

    #[test]
    fn workflow_counts_iterations_per_stage() {
        let actions = vec![
            action("edit").of_type(ActionType::Iteration),
            action("edit").of_type(ActionType::Iteration),
            action("draft"),
            UserAction::new(user()).of_type(ActionType::Iteration),
        ];
        let patterns = DnaAnalyzer::aggregate_workflow(&actions);
        let edit = patterns.iter().find(|p| p.stage == "edit").unwrap();
        let draft = patterns.iter().find(|p| p.stage == "draft").unwrap();
        assert_eq!(edit.iteration_frequency, 2);
        assert_eq!(draft.iteration_frequency, 0);
    }

    #[test]
    fn workflow_tools_ranked_by_overall_usage_within_stage() {
        let actions = vec![
            action("edit").with_tool("crop"),
            action("draft").with_tool("brush"),
            action("draft").with_tool("brush"),
            action("draft").with_tool("brush"),
            action("edit").with_tool("brush"),
            UserAction::new(user()).with_tool("crop"),
            UserAction::new(user()).with_tool("crop"),
            UserAction::new(user()).with_tool("crop"),
            UserAction::new(user()).with_tool("crop"),
        ];

        let patterns = DnaAnalyzer::aggregate_workflow(&actions);
        let edit = patterns.iter().find(|p| p.stage == "edit").unwrap();
        let draft = patterns.iter().find(|p| p.stage == "draft").unwrap();
        assert_eq!(edit.preferred_tools, vec!["crop", "brush"]);
        assert_eq!(draft.preferred_tools, vec!["brush"]);
    }

    #[test]
    fn workflow_tools_capped_at_five() {
        let actions: Vec<_> = (0..8)
            .map(|i| action("edit").with_tool(format!("tool-{}", i)))
            .collect();
        let patterns = DnaAnalyzer::aggregate_workflow(&actions);
        assert_eq!(patterns[0].preferred_tools.len(), MAX_TOOLS_PER_STAGE);
    }

    #[test]
    fn ai_level_is_rounded_ratio() {
        let mut actions = vec![action("draft"); 3];
        actions.push(action("draft").of_type(ActionType::AiInteraction));
        // 1/4 * 10 = 2.5 rounds away from zero
        assert_eq!(DnaAnalyzer::ai_interaction_level(&actions, 5), 3);
    }

    #[test]
    fn ai_level_keeps_prior_without_ai_actions() {
        let actions = vec![action("draft"); 4];
        assert_eq!(DnaAnalyzer::ai_interaction_level(&actions, 6), 6);
    }

    #[test]
    fn confidence_formula() {
        let styles = vec![StylePreference::new("bold", UnitScore::new(0.8)).unwrap()];
        // 0.3 + 0.15 + 0.1 + 0.1
        let c = DnaAnalyzer::calculate_confidence(&styles, 3, 100);
        assert!(approx(c.value(), 0.65));

        let c = DnaAnalyzer::calculate_confidence(&[], 100, 10_000);
        assert!(approx(c.value(), 0.8));

        let c = DnaAnalyzer::calculate_confidence(&styles, 100, 10_000);
        assert!(approx(c.value(), 0.9));
    }

    #[test]
    fn analyze_without_projects_is_cold_start() {
        let dna = CreativeDna::initial(user(), Timestamp::now());
        let result = DnaAnalyzer::analyze(dna.clone(), &[], &[action("draft")], Timestamp::now());

        assert!(result.is_cold_start());
        assert_eq!(result.dna, dna);
        assert_eq!(result.insights.len(), 1);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.insights[0].category, InsightCategory::DataCollection);
        assert_eq!(
            result.recommendations[0].recommendation_type,
            RecommendationType::Engagement
        );
    }

    #[test]
    fn analyze_without_projects_returns_stored_profile_unchanged() {
        let mut dna = CreativeDna::initial(user(), Timestamp::now());
        dna.replace_visual_style(vec![StylePreference::new("noir", UnitScore::new(0.8)).unwrap()]);
        dna.replace_workflow_patterns(vec![WorkflowPattern {
            stage: "sketch".to_string(),
            time_spent: UnitScore::ONE,
            iteration_frequency: 2,
            preferred_tools: vec![],
        }]);
        dna.complete_analysis(UnitScore::new(0.7), Timestamp::now());

        let actions = vec![action("draft").of_type(ActionType::AiInteraction); 3];
        let result = DnaAnalyzer::analyze(dna.clone(), &[], &actions, Timestamp::now());

        assert!(result.is_cold_start());
        assert_eq!(result.dna, dna);
        assert_eq!(result.dna.version().as_f64(), 1.1);
        assert_eq!(result.dna.ai_interaction_level(), 5);
    }

    #[test]
    fn cold_start_flag_is_set_only_by_the_cold_start_branch() {
        let dna = CreativeDna::initial(user(), Timestamp::now());
        let result = DnaAnalyzer::analyze(dna, &[project(&["bold"])], &[], Timestamp::now());
        assert!(!result.is_cold_start());

        // A warm result whose only insight mirrors the cold-start text is still warm
        let mut lookalike = result.clone();
        lookalike.insights = vec![cold_start_insight()];
        assert!(!lookalike.is_cold_start());
    }

    #[test]
    fn analyze_without_actions_keeps_prior_workflow() {
        let mut dna = CreativeDna::initial(user(), Timestamp::now());
        dna.replace_workflow_patterns(vec![WorkflowPattern {
            stage: "sketch".to_string(),
            time_spent: UnitScore::ONE,
            iteration_frequency: 0,
            preferred_tools: vec![],
        }]);
        dna.set_ai_interaction_level(9);

        let result = DnaAnalyzer::analyze(dna, &[project(&["bold"])], &[], Timestamp::now());
        assert_eq!(result.dna.workflow_patterns().len(), 1);
        assert_eq!(result.dna.ai_interaction_level(), 9);
    }

    #[test]
    fn analyze_uses_incoming_confidence_for_recommendations() {
        let dna = CreativeDna::initial(user(), Timestamp::now());
        let projects: Vec<_> = (0..6).map(|_| project(&["bold"])).collect();
        let actions = vec![action("draft"); 200];

        let result = DnaAnalyzer::analyze(dna, &projects, &actions, Timestamp::now());
        // 0.3 + 0.3 + 0.2 + 0.1 after recompute, but the nudge saw 0.3
        assert!(approx(result.dna.confidence().value(), 0.9));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.recommendation_type == RecommendationType::DnaImprovement));
    }

    #[test]
    fn analyze_is_not_idempotent() {
        let dna = CreativeDna::initial(user(), Timestamp::now());
        let projects = vec![project(&["bold"])];
        let first = DnaAnalyzer::analyze(dna, &projects, &[], Timestamp::now());
        let second = DnaAnalyzer::analyze(first.dna.clone(), &projects, &[], Timestamp::now());

        assert_eq!(first.dna.version().as_f64(), 1.1);
        assert_eq!(second.dna.version().as_f64(), 1.2);
        assert!(second.dna.last_updated() >= first.dna.last_updated());
        assert_eq!(first.dna.visual_style(), second.dna.visual_style());
    }

    fn arb_projects() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(
            prop::collection::vec("[a-e]{1,2}", 0..6),
            1..20,
        )
    }

    fn arb_actions() -> impl Strategy<Value = Vec<(Option<String>, Option<f64>, u8)>> {
        prop::collection::vec(
            (
                prop::option::of("[a-c]"),
                prop::option::of(0.0f64..500.0),
                0u8..3,
            ),
            0..60,
        )
    }

    proptest! {
        #[test]
        fn analysis_keeps_scores_in_unit_range(
            tag_sets in arb_projects(),
            raw_actions in arb_actions(),
        ) {
            let projects: Vec<_> = tag_sets
                .into_iter()
                .map(|tags| Project::new(user(), "p", tags))
                .collect();
            let actions: Vec<_> = raw_actions
                .into_iter()
                .map(|(stage, duration, kind)| {
                    let mut a = UserAction::new(user());
                    a.stage = stage;
                    a.duration = duration;
                    a.action_type = match kind {
                        0 => Some(ActionType::Iteration),
                        1 => Some(ActionType::AiInteraction),
                        _ => None,
                    };
                    a
                })
                .collect();

            let dna = CreativeDna::initial(user(), Timestamp::now());
            let result = DnaAnalyzer::analyze(dna, &projects, &actions, Timestamp::now());

            let confidence = result.dna.confidence().value();
            prop_assert!((0.0..=1.0).contains(&confidence));
            prop_assert!(result.dna.visual_style().len() <= MAX_STYLES);
            prop_assert!(result.dna.ai_interaction_level() <= 10);
            for style in result.dna.visual_style() {
                prop_assert!((0.0..=1.0).contains(&style.strength.value()));
            }
            for pair in result.dna.visual_style().windows(2) {
                prop_assert!(pair[0].strength.value() >= pair[1].strength.value());
            }
            for pattern in result.dna.workflow_patterns() {
                prop_assert!(pattern.preferred_tools.len() <= MAX_TOOLS_PER_STAGE);
            }
        }
    }
}
