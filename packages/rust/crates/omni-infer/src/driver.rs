//! Read → parse → classify pipeline behind the CLI.

use crate::catalog::Catalog;
use crate::classifier::MetadataClassifier;
use crate::document::Document;
use crate::error::InferError;
use crate::source::TextSource;
use crate::types::InferenceResult;

/// Usage line reported on argument errors.
pub const USAGE: &str = "infer-metadata <file|-> <catalogs_json>";

/// Infer metadata for the text behind `source` against `catalog_json`.
///
/// The source is read before the catalog is parsed, so a read failure wins
/// over a malformed catalog.
///
/// # Errors
///
/// Returns [`InferError::Read`] if the source cannot be read, and the
/// catalog variants documented on [`Catalog::from_json`].
pub fn infer_metadata(
    source: &TextSource,
    catalog_json: &str,
) -> Result<InferenceResult, InferError> {
    let content = source.read_text()?;
    let catalog = Catalog::from_json(catalog_json)?;
    tracing::debug!(
        %source,
        tags = catalog.tags.len(),
        steps = catalog.steps.len(),
        kinds = catalog.kinds.len(),
        "catalog loaded"
    );
    let document = Document::new(content);
    Ok(MetadataClassifier::classify(&document, &catalog))
}
