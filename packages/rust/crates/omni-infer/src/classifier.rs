//! Keyword classifier for tags, steps and kinds.
//!
//! # Architecture
//!
//! ```text
//! KeywordRule (label, keywords)        StepRule (step, predicate, confidence)
//!      ↓ eligibility gate (catalog)         ↓ eligibility gate (catalog)
//! count distinct keywords present      evaluate predicate
//!      ↓                                    ↓
//! min(1.0, matches × 0.25)             fixed confidence
//!      ↓                                    ↓
//!      └────────── threshold (0.3) ─────────┘
//!                        ↓
//!                   LabelScores
//! ```

use crate::catalog::{Catalog, LabelSet};
use crate::document::Document;
use crate::patterns::{
    KEYWORD_WEIGHT, KIND_RULES, KeywordRule, MIN_CONFIDENCE, STEP_RULES, StepPredicate, StepRule,
    TAG_RULES,
};
use crate::types::{ConfidenceReport, InferenceResult, LabelScores};

impl KeywordRule {
    /// Number of this rule's keywords present in the document.
    ///
    /// Each keyword counts once, however often it occurs.
    #[must_use]
    pub fn matches(&self, document: &Document) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| document.contains(keyword))
            .count()
    }

    /// Confidence for `matches` distinct keyword hits, clamped to 1.0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn confidence_for(matches: usize) -> f64 {
        (matches as f64 * KEYWORD_WEIGHT).min(1.0)
    }
}

impl StepRule {
    /// Whether the step applies to the document.
    #[must_use]
    pub fn applies(&self, document: &Document) -> bool {
        match self.predicate {
            StepPredicate::FencedCodeBlock => document.has_fenced_code_block(),
            StepPredicate::AnyKeyword(keywords) => {
                keywords.iter().any(|keyword| document.contains(keyword))
            }
        }
    }
}

/// Stateless heuristic classifier over the compiled-in policy.
///
/// # Example
///
/// ```rust,ignore
/// use omni_infer::{Catalog, Document, MetadataClassifier};
///
/// let catalog = Catalog::from_json(r#"{"tags":["golang"],"steps":[],"kinds":[]}"#)?;
/// let tags = MetadataClassifier::infer_tags(&Document::new("golang func main()"), &catalog.tags);
/// assert_eq!(tags.get("golang"), Some(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataClassifier;

impl MetadataClassifier {
    /// Score topic tags.
    #[must_use]
    pub fn infer_tags(document: &Document, eligible: &LabelSet) -> LabelScores {
        score_keyword_rules(TAG_RULES, document, eligible)
    }

    /// Score workflow steps.
    #[must_use]
    pub fn infer_steps(document: &Document, eligible: &LabelSet) -> LabelScores {
        score_step_rules(STEP_RULES, document, eligible)
    }

    /// Score project kinds.
    #[must_use]
    pub fn infer_kinds(document: &Document, eligible: &LabelSet) -> LabelScores {
        score_keyword_rules(KIND_RULES, document, eligible)
    }

    /// Run all three inferences and assemble the result.
    #[must_use]
    pub fn classify(document: &Document, catalog: &Catalog) -> InferenceResult {
        let confidence = ConfidenceReport {
            tags: Self::infer_tags(document, &catalog.tags),
            steps: Self::infer_steps(document, &catalog.steps),
            kinds: Self::infer_kinds(document, &catalog.kinds),
        };
        let result = InferenceResult::from_scores(document.char_len(), confidence);
        tracing::info!(
            content_length = result.stats.content_length,
            tags_found = result.stats.tags_found,
            steps_found = result.stats.steps_found,
            kinds_found = result.stats.kinds_found,
            "classified document"
        );
        result
    }
}

fn score_keyword_rules(
    rules: &[KeywordRule],
    document: &Document,
    eligible: &LabelSet,
) -> LabelScores {
    let mut scores = LabelScores::new();
    for rule in rules {
        if !eligible.contains(rule.label) {
            continue;
        }
        let matches = rule.matches(document);
        if matches == 0 {
            continue;
        }
        let confidence = KeywordRule::confidence_for(matches);
        tracing::debug!(label = rule.label, matches, confidence, "keyword rule matched");
        scores.push(rule.label, confidence);
    }
    scores.above(MIN_CONFIDENCE)
}

fn score_step_rules(rules: &[StepRule], document: &Document, eligible: &LabelSet) -> LabelScores {
    let mut scores = LabelScores::new();
    for rule in rules {
        if eligible.contains(rule.step) && rule.applies(document) {
            tracing::debug!(
                step = rule.step,
                confidence = rule.confidence,
                "step rule matched"
            );
            scores.push(rule.step, rule.confidence);
        }
    }
    scores.above(MIN_CONFIDENCE)
}
