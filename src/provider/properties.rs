//! provider::properties
//!
//! Feature provider over a flat properties source.
//!
//! # Value grammar
//!
//! Each source entry declares one feature. The key is the feature name;
//! the value uses a compact mini-grammar:
//!
//! ```text
//! value := [ label [ ";" default [ ";" groupList ] ] ]
//! label := any text not containing ";" (may be empty)
//! default := "true" | "false" | "" (case-insensitive; absent/empty => false)
//! groupList := group ( "," group )*       -- trailing separators ignored
//! ```
//!
//! An empty label segment (or an empty value) falls back to the feature's
//! own name. Segments past the third are ignored: this is intentional
//! leniency so that values written by richer future grammars keep parsing
//! under this one. Dangling `,` or `;` separators never produce spurious
//! empty-label groups. Attributes are not derivable from this grammar and
//! are always empty.
//!
//! # Example
//!
//! ```
//! use flagstone::core::types::FeatureName;
//! use flagstone::provider::{FeatureProvider, PropertiesFeatureProvider, PropertiesSource};
//!
//! let source = PropertiesSource::parse("SEARCH=New search;true;Beta\n").unwrap();
//! let provider = PropertiesFeatureProvider::new(&source).unwrap();
//!
//! let meta = provider.metadata(&FeatureName::new("SEARCH").unwrap()).unwrap();
//! assert_eq!(meta.label(), "New search");
//! assert!(meta.is_enabled_by_default());
//! assert_eq!(meta.groups().len(), 1);
//! ```

use indexmap::IndexMap;
use std::collections::BTreeSet;
use tracing::debug;

use crate::core::group::FeatureGroup;
use crate::core::metadata::FeatureMetadata;
use crate::core::types::FeatureName;
use crate::provider::source::PropertiesSource;
use crate::provider::{FeatureProvider, ProviderError};

/// A provider that derives features and their metadata from a
/// [`PropertiesSource`].
///
/// The whole source is parsed eagerly at construction; lookups afterwards
/// are pure reads with no re-parsing and no failure mode beyond the
/// unknown-feature case.
#[derive(Debug, Clone)]
pub struct PropertiesFeatureProvider {
    features: IndexMap<FeatureName, FeatureMetadata>,
}

impl PropertiesFeatureProvider {
    /// Build a provider from a properties source.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidName` if a source key is not a
    /// valid feature name. Value content itself can never fail: the
    /// grammar is total over arbitrary strings.
    pub fn new(source: &PropertiesSource) -> Result<Self, ProviderError> {
        let mut features = IndexMap::new();

        for (key, value) in source.entries() {
            let name = FeatureName::new(key)?;
            let metadata = parse_value(&name, value);
            features.insert(name, metadata);
        }

        debug!(features = features.len(), "initialized properties feature provider");
        Ok(Self { features })
    }
}

impl FeatureProvider for PropertiesFeatureProvider {
    fn features(&self) -> BTreeSet<FeatureName> {
        self.features.keys().cloned().collect()
    }

    fn metadata(&self, feature: &FeatureName) -> Result<FeatureMetadata, ProviderError> {
        self.features
            .get(feature)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownFeature(feature.clone()))
    }
}

/// Parse one value of the `label;default;groupList` mini-grammar.
fn parse_value(feature: &FeatureName, value: &str) -> FeatureMetadata {
    let mut segments = value.split(';');
    let label = segments.next().unwrap_or("");
    let default = segments.next().unwrap_or("");
    let group_list = segments.next().unwrap_or("");
    // Segments past the third are dropped on purpose; see the module docs.

    let label = if label.is_empty() {
        feature.as_str()
    } else {
        label
    };

    let mut builder =
        FeatureMetadata::builder(label).enabled_by_default(default.eq_ignore_ascii_case("true"));

    for token in group_list.split(',') {
        if !token.is_empty() {
            builder = builder.group(FeatureGroup::new(token));
        }
    }

    builder.build()
}
