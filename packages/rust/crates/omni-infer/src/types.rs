//! Type definitions for scored labels and inference results.
//!
//! Core data structures emitted by the classifier.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Label families produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Topic tags
    Tags,
    /// Workflow steps
    Steps,
    /// Project kinds
    Kinds,
}

impl Category {
    /// Catalog key for this category.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Steps => "steps",
            Self::Kinds => "kinds",
        }
    }

    /// All categories in catalog order.
    pub const ALL: [Self; 3] = [Self::Tags, Self::Steps, Self::Kinds];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A label paired with its confidence in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLabel {
    /// Label identifier
    pub label: String,
    /// Heuristic confidence
    pub confidence: f64,
}

/// Scored labels of one category, in rule order.
///
/// Serializes as a JSON object `{label: confidence}` preserving that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelScores {
    entries: Vec<ScoredLabel>,
}

impl LabelScores {
    /// Create an empty set of scores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score for `label`.
    pub fn push(&mut self, label: impl Into<String>, confidence: f64) {
        self.entries.push(ScoredLabel {
            label: label.into(),
            confidence,
        });
    }

    /// Drop every label scoring below `min_confidence`.
    #[must_use]
    pub fn above(mut self, min_confidence: f64) -> Self {
        self.entries.retain(|entry| entry.confidence >= min_confidence);
        self
    }

    /// Confidence of `label`, if scored.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.confidence)
    }

    /// Label identifiers in rule order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.label.clone()).collect()
    }

    /// Iterate over scored labels.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredLabel> {
        self.entries.iter()
    }

    /// Number of scored labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no label was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a LabelScores {
    type Item = &'a ScoredLabel;
    type IntoIter = std::slice::Iter<'a, ScoredLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for LabelScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.confidence)?;
        }
        map.end()
    }
}

/// Per-category confidence mappings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ConfidenceReport {
    /// Tag scores
    pub tags: LabelScores,
    /// Step scores
    pub steps: LabelScores,
    /// Kind scores
    pub kinds: LabelScores,
}

/// Summary statistics of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct InferenceStats {
    /// Document length in characters
    pub content_length: usize,
    /// Number of reported tags
    pub tags_found: usize,
    /// Number of reported steps
    pub steps_found: usize,
    /// Number of reported kinds
    pub kinds_found: usize,
}

/// Complete result of one inference run.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct InferenceResult {
    /// Reported tags
    pub tags: Vec<String>,
    /// Reported workflow steps
    pub steps: Vec<String>,
    /// Reported project kinds
    pub kinds: Vec<String>,
    /// Scores behind the reported labels
    pub confidence: ConfidenceReport,
    /// Summary statistics
    pub stats: InferenceStats,
}

impl InferenceResult {
    /// Assemble a result from thresholded scores.
    #[must_use]
    pub fn from_scores(content_length: usize, confidence: ConfidenceReport) -> Self {
        let tags = confidence.tags.labels();
        let steps = confidence.steps.labels();
        let kinds = confidence.kinds.labels();
        let stats = InferenceStats {
            content_length,
            tags_found: tags.len(),
            steps_found: steps.len(),
            kinds_found: kinds.len(),
        };
        Self {
            tags,
            steps,
            kinds,
            confidence,
            stats,
        }
    }

    /// Scores for one category.
    #[must_use]
    pub fn scores(&self, category: Category) -> &LabelScores {
        match category {
            Category::Tags => &self.confidence.tags,
            Category::Steps => &self.confidence.steps,
            Category::Kinds => &self.confidence.kinds,
        }
    }

    /// Reported labels for one category.
    #[must_use]
    pub fn labels(&self, category: Category) -> &[String] {
        match category {
            Category::Tags => &self.tags,
            Category::Steps => &self.steps,
            Category::Kinds => &self.kinds,
        }
    }
}
