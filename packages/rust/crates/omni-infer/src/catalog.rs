//! Catalog of eligible labels.
//!
//! The catalog arrives as a JSON object with three required arrays:
//!
//! ```json
//! {"tags": ["golang"], "steps": ["implementer"], "kinds": ["api"]}
//! ```
//!
//! A label absent from its category's set is never inferred.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::InferError;
use crate::types::Category;

/// Set of eligible label identifiers for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(HashSet<String>);

impl LabelSet {
    /// Whether `label` is eligible.
    #[inline]
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Number of distinct eligible labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no label is eligible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Eligible tags, steps and kinds supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Eligible topic tags
    pub tags: LabelSet,
    /// Eligible workflow steps
    pub steps: LabelSet,
    /// Eligible project kinds
    pub kinds: LabelSet,
}

impl Catalog {
    /// Parse the catalog JSON.
    ///
    /// # Errors
    ///
    /// - [`InferError::CatalogParse`] if `raw` is not valid JSON
    /// - [`InferError::MissingKeys`] if it is not an object holding `tags`, `steps` and `kinds`
    /// - [`InferError::InvalidKey`] if one of those keys is not an array of strings
    pub fn from_json(raw: &str) -> Result<Self, InferError> {
        let value: Value = serde_json::from_str(raw).map_err(InferError::CatalogParse)?;
        let empty = Map::new();
        let object = value.as_object().unwrap_or(&empty);

        let missing: Vec<&'static str> = Category::ALL
            .iter()
            .map(|category| category.key())
            .filter(|key| !object.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(InferError::MissingKeys(missing));
        }

        Ok(Self {
            tags: label_set(object, Category::Tags)?,
            steps: label_set(object, Category::Steps)?,
            kinds: label_set(object, Category::Kinds)?,
        })
    }

    /// Eligible labels for one category.
    #[must_use]
    pub fn labels(&self, category: Category) -> &LabelSet {
        match category {
            Category::Tags => &self.tags,
            Category::Steps => &self.steps,
            Category::Kinds => &self.kinds,
        }
    }
}

fn label_set(object: &Map<String, Value>, category: Category) -> Result<LabelSet, InferError> {
    let key = category.key();
    let raw = object.get(key).cloned().unwrap_or(Value::Null);
    let labels: Vec<String> =
        serde_json::from_value(raw).map_err(|source| InferError::InvalidKey { key, source })?;
    Ok(labels.into_iter().collect())
}
