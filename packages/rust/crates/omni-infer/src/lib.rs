//! Keyword-based metadata inference for markdown documents.
//!
//! Scans a document for keyword occurrences against small compiled-in
//! vocabularies and assigns three families of labels, each gated by a
//! caller-supplied catalog:
//!
//! - **tags**: topic tags (`golang`, `security`, ...)
//! - **steps**: workflow steps the document applies to (`implementer`, `qa`, ...)
//! - **kinds**: project kinds the document applies to (`api`, `cli`, ...)
//!
//! # Architecture (ODF-REP Compliant)
//!
//! ```text
//! omni-infer/src/
//! ├── lib.rs         # Re-exports (this file)
//! ├── error.rs       # SourceError, InferError, ErrorPayload
//! ├── patterns.rs    # Keyword tables and step rules
//! ├── types.rs       # Category, ScoredLabel, LabelScores, InferenceResult
//! ├── document.rs    # Document (raw + lowercased text)
//! ├── catalog.rs     # Catalog parsing and eligibility
//! ├── source.rs      # TextSource (stdin or file)
//! ├── classifier.rs  # MetadataClassifier
//! ├── driver.rs      # infer_metadata(): read → parse → classify
//! └── bin/infer_metadata.rs  # CLI entry point
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use omni_infer::{Catalog, Document, MetadataClassifier};
//!
//! let catalog = Catalog::from_json(r#"{"tags":["golang"],"steps":[],"kinds":[]}"#)?;
//! let document = Document::new("A golang package with func main()");
//! let result = MetadataClassifier::classify(&document, &catalog);
//! assert_eq!(result.tags, vec!["golang"]);
//! ```

// ============================================================================
// Module Declarations (ODF-REP: Atomic Structure)
// ============================================================================

mod catalog;
mod classifier;
mod document;
mod driver;
mod error;
mod patterns;
mod source;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use catalog::{Catalog, LabelSet};
pub use classifier::MetadataClassifier;
pub use document::Document;
pub use driver::{USAGE, infer_metadata};
pub use error::{ErrorPayload, InferError, SourceError};
pub use patterns::{
    KEYWORD_WEIGHT, KIND_RULES, KeywordRule, MIN_CONFIDENCE, STEP_RULES, StepPredicate, StepRule,
    TAG_RULES,
};
pub use source::{STDIN_MARKER, TextSource};
pub use types::{
    Category, ConfidenceReport, InferenceResult, InferenceStats, LabelScores, ScoredLabel,
};
