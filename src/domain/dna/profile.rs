//! CreativeDna aggregate root and its component value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CreativeDnaId, Timestamp, UnitScore, UserId, ValidationError};

/// Neutral starting point for AI reliance and adaptability
pub const NEUTRAL_LEVEL: u8 = 5;

/// Upper bound of the 1-10 behavioral scales
pub const MAX_LEVEL: u8 = 10;

/// Confidence assigned to a freshly created profile
pub const INITIAL_CONFIDENCE: f64 = 0.3;

/// Maximum number of styles kept per list
pub const MAX_STYLES: usize = 10;

/// Profile version, a monotonic decimal bumped by 0.1 per analysis
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DnaVersion(f64);

impl DnaVersion {
    /// Create initial version (1.0)
    pub fn initial() -> Self {
        Self(1.0)
    }

    /// Create from a stored value
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 1.0 {
            return Err(ValidationError::out_of_range(
                "version",
                1.0,
                f64::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Next version, rounded to one decimal so repeated bumps do not drift
    pub fn increment(&self) -> Self {
        Self(((self.0 + 0.1) * 10.0).round() / 10.0)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for DnaVersion {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for DnaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Which style list a preference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Visual,
    Writing,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visual => write!(f, "visual"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

impl FromStr for StyleKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visual" => Ok(Self::Visual),
            "writing" => Ok(Self::Writing),
            other => Err(ValidationError::invalid_format(
                "style_kind",
                format!("unknown style kind '{}'", other),
            )),
        }
    }
}

/// A single aesthetic preference with its observed strength
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreference {
    pub name: String,
    pub strength: UnitScore,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl StylePreference {
    pub fn new(name: impl Into<String>, strength: UnitScore) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("style_name"));
        }
        Ok(Self {
            name,
            strength,
            examples: Vec::new(),
            keywords: Vec::new(),
        })
    }

    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

/// Interest in a content category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPreference {
    pub category: String,
    pub interest: UnitScore,
    pub avoidance: bool,
    pub frequency: UnitScore,
}

/// Time allocation and habits for one workflow stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowPattern {
    pub stage: String,
    /// Share of total logged time spent in this stage
    pub time_spent: UnitScore,
    pub iteration_frequency: u32,
    pub preferred_tools: Vec<String>,
}

/// CreativeDna aggregate root
///
/// One per user. Created lazily with neutral defaults and only mutated by
/// analysis or explicit style curation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeDna {
    id: CreativeDnaId,
    user_id: UserId,
    visual_style: Vec<StylePreference>,
    writing_style: Vec<StylePreference>,
    content_preferences: Vec<ContentPreference>,
    workflow_patterns: Vec<WorkflowPattern>,
    ai_interaction_level: u8,
    adaptability_score: u8,
    confidence: UnitScore,
    version: DnaVersion,
    last_updated: Timestamp,
}

/// Stored state used to rebuild a profile at the persistence boundary
#[derive(Debug, Clone)]
pub struct CreativeDnaParts {
    pub id: CreativeDnaId,
    pub user_id: UserId,
    pub visual_style: Vec<StylePreference>,
    pub writing_style: Vec<StylePreference>,
    pub content_preferences: Vec<ContentPreference>,
    pub workflow_patterns: Vec<WorkflowPattern>,
    pub ai_interaction_level: i32,
    pub adaptability_score: i32,
    pub confidence: f64,
    pub version: f64,
    pub last_updated: Timestamp,
}

impl CreativeDna {
    /// Create the neutral profile used before any analysis has run
    pub fn initial(user_id: UserId, timestamp: Timestamp) -> Self {
        Self {
            id: CreativeDnaId::new(),
            user_id,
            visual_style: Vec::new(),
            writing_style: Vec::new(),
            content_preferences: Vec::new(),
            workflow_patterns: Vec::new(),
            ai_interaction_level: NEUTRAL_LEVEL,
            adaptability_score: NEUTRAL_LEVEL,
            confidence: UnitScore::new(INITIAL_CONFIDENCE),
            version: DnaVersion::initial(),
            last_updated: timestamp,
        }
    }

    /// Rebuild a profile from stored state, validating every bounded field
    pub fn from_parts(parts: CreativeDnaParts) -> Result<Self, ValidationError> {
        let ai_interaction_level = level_in_range("ai_interaction_level", parts.ai_interaction_level, 0)?;
        let adaptability_score = level_in_range("adaptability_score", parts.adaptability_score, 1)?;
        let confidence = UnitScore::try_new(parts.confidence).map_err(|_| {
            ValidationError::out_of_range("confidence", 0.0, 1.0, parts.confidence)
        })?;
        let version = DnaVersion::from_f64(parts.version)?;

        Ok(Self {
            id: parts.id,
            user_id: parts.user_id,
            visual_style: parts.visual_style,
            writing_style: parts.writing_style,
            content_preferences: parts.content_preferences,
            workflow_patterns: parts.workflow_patterns,
            ai_interaction_level,
            adaptability_score,
            confidence,
            version,
            last_updated: parts.last_updated,
        })
    }

    // Getters
    pub fn id(&self) -> CreativeDnaId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn visual_style(&self) -> &[StylePreference] {
        &self.visual_style
    }

    pub fn writing_style(&self) -> &[StylePreference] {
        &self.writing_style
    }

    pub fn content_preferences(&self) -> &[ContentPreference] {
        &self.content_preferences
    }

    pub fn workflow_patterns(&self) -> &[WorkflowPattern] {
        &self.workflow_patterns
    }

    pub fn ai_interaction_level(&self) -> u8 {
        self.ai_interaction_level
    }

    pub fn adaptability_score(&self) -> u8 {
        self.adaptability_score
    }

    pub fn confidence(&self) -> UnitScore {
        self.confidence
    }

    pub fn version(&self) -> DnaVersion {
        self.version
    }

    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Strongest visual style, if any
    pub fn top_visual_style(&self) -> Option<&StylePreference> {
        self.visual_style.first()
    }

    pub fn styles(&self, kind: StyleKind) -> &[StylePreference] {
        match kind {
            StyleKind::Visual => &self.visual_style,
            StyleKind::Writing => &self.writing_style,
        }
    }

    pub(crate) fn replace_visual_style(&mut self, styles: Vec<StylePreference>) {
        self.visual_style = styles;
    }

    pub(crate) fn replace_workflow_patterns(&mut self, patterns: Vec<WorkflowPattern>) {
        self.workflow_patterns = patterns;
    }

    pub(crate) fn set_ai_interaction_level(&mut self, level: u8) {
        self.ai_interaction_level = level.min(MAX_LEVEL);
    }

    /// Close an analysis pass: store the new confidence, bump the version
    pub(crate) fn complete_analysis(&mut self, confidence: UnitScore, timestamp: Timestamp) {
        self.confidence = confidence;
        self.version = self.version.increment();
        self.last_updated = timestamp;
    }

    /// Insert or curate a style entry, keeping the list ordered by strength
    ///
    /// Existing entries keep their strength unless one is given; examples and
    /// keywords are replaced by the curated values. The list is cut back to
    /// `MAX_STYLES`, so a new entry weaker than every existing one is dropped.
    pub fn curate_style(
        &mut self,
        kind: StyleKind,
        name: &str,
        strength: Option<UnitScore>,
        examples: Vec<String>,
        keywords: Vec<String>,
        timestamp: Timestamp,
    ) -> Result<(), ValidationError> {
        let list = match kind {
            StyleKind::Visual => &mut self.visual_style,
            StyleKind::Writing => &mut self.writing_style,
        };

        match list.iter_mut().find(|s| s.name == name) {
            Some(existing) => {
                if let Some(strength) = strength {
                    existing.strength = strength;
                }
                existing.examples = examples;
                existing.keywords = keywords;
            }
            None => {
                let preference = StylePreference::new(name, strength.unwrap_or(UnitScore::ZERO))?
                    .with_examples(examples)
                    .with_keywords(keywords);
                list.push(preference);
            }
        }

        list.sort_by(|a, b| b.strength.value().total_cmp(&a.strength.value()));
        list.truncate(MAX_STYLES);
        self.last_updated = timestamp;
        Ok(())
    }
}

fn level_in_range(field: &str, value: i32, min: u8) -> Result<u8, ValidationError> {
    if value < i32::from(min) || value > i32::from(MAX_LEVEL) {
        return Err(ValidationError::out_of_range(
            field,
            f64::from(min),
            f64::from(MAX_LEVEL),
            f64::from(value),
        ));
    }
    Ok(value as u8)
}
