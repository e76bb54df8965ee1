//! Compiled-in keyword policy.
//!
//! Centralized keyword tables for tag and kind inference, plus the
//! per-step rules used for step inference. All keywords are lowercase and
//! are matched against the lowercased document text.

/// Minimum confidence for a label to be reported.
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Confidence contributed by each distinct matching keyword.
pub const KEYWORD_WEIGHT: f64 = 0.25;

/// A label with the keywords that vote for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordRule {
    /// Label identifier (e.g., "golang", "api")
    pub label: &'static str,
    /// Substrings searched in the lowercased text
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    const fn new(label: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { label, keywords }
    }
}

/// Predicate deciding whether a step applies to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPredicate {
    /// Raw text holds a ```` ``` ```` fenced block
    FencedCodeBlock,
    /// Lowercased text contains at least one of the keywords
    AnyKeyword(&'static [&'static str]),
}

/// A workflow step with its predicate and fixed confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRule {
    /// Step identifier (e.g., "implementer")
    pub step: &'static str,
    /// When the step applies
    pub predicate: StepPredicate,
    /// Confidence assigned when the predicate holds
    pub confidence: f64,
}

/// Topic tags.
pub const TAG_RULES: &[KeywordRule] = &[
    KeywordRule::new(
        "golang",
        &["golang", "go ", "func ", "package ", "struct {"],
    ),
    KeywordRule::new(
        "python",
        &["python", "def ", "pip ", "pytest", "__init__"],
    ),
    KeywordRule::new(
        "nodejs",
        &["nodejs", "node.js", "npm", "const ", "require("],
    ),
    KeywordRule::new(
        "testing",
        &["test", "testing", "assert", "mock", "unittest"],
    ),
    KeywordRule::new("qa", &["qa", "quality assurance", "test plan"]),
    KeywordRule::new(
        "standards",
        &["estándar", "convención", "guía", "best practice"],
    ),
    KeywordRule::new(
        "security",
        &["seguridad", "security", "auth", "encryption"],
    ),
    KeywordRule::new(
        "architecture",
        &["arquitectura", "architecture", "pattern", "microservice"],
    ),
    KeywordRule::new(
        "performance",
        &["performance", "optimización", "cache", "benchmark"],
    ),
];

/// Project kinds.
pub const KIND_RULES: &[KeywordRule] = &[
    KeywordRule::new("api", &["api", "rest", "graphql", "endpoint", "http"]),
    KeywordRule::new("web", &["web", "frontend", "react", "vue", "html"]),
    KeywordRule::new("cli", &["cli", "command line", "terminal", "shell"]),
    KeywordRule::new("mobile", &["mobile", "ios", "android", "flutter"]),
    KeywordRule::new(
        "service",
        &["microservicio", "service", "backend", "daemon"],
    ),
];

/// Workflow steps, evaluated independently in this order.
pub const STEP_RULES: &[StepRule] = &[
    StepRule {
        step: "implementer",
        predicate: StepPredicate::FencedCodeBlock,
        confidence: 0.9,
    },
    StepRule {
        step: "code_review",
        predicate: StepPredicate::AnyKeyword(&["review", "best practice", "lint"]),
        confidence: 0.7,
    },
    StepRule {
        step: "qa",
        predicate: StepPredicate::AnyKeyword(&["test", "qa", "quality"]),
        confidence: 0.7,
    },
    StepRule {
        step: "planner",
        predicate: StepPredicate::AnyKeyword(&["plan", "sprint", "roadmap"]),
        confidence: 0.6,
    },
    StepRule {
        step: "constitution",
        predicate: StepPredicate::AnyKeyword(&["setup", "config", "bootstrap"]),
        confidence: 0.6,
    },
];
