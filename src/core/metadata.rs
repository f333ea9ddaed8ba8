//! core::metadata
//!
//! The resolved metadata record for one feature.
//!
//! # Contract
//!
//! [`FeatureMetadata`] is the normalized representation every resolver
//! produces, whatever the source:
//!
//! - `label` is never empty; resolvers fall back to the feature's own name
//! - `enabled_by_default` defaults to `false`
//! - `groups` deduplicate by label
//! - `attributes` preserve insertion order; the last write for a key wins
//!
//! Instances are immutable once built and exposed only through read-only
//! accessors, so a provider can hand them to any number of concurrent
//! readers.
//!
//! # Example
//!
//! ```
//! use flagstone::core::group::FeatureGroup;
//! use flagstone::core::metadata::FeatureMetadata;
//!
//! let meta = FeatureMetadata::builder("Shiny new checkout")
//!     .enabled_by_default(true)
//!     .group(FeatureGroup::new("Commerce"))
//!     .attribute("owner", "checkout-team")
//!     .build();
//!
//! assert_eq!(meta.label(), "Shiny new checkout");
//! assert!(meta.is_enabled_by_default());
//! assert_eq!(meta.groups().len(), 1);
//! assert_eq!(meta.attributes().get("owner").map(String::as_str), Some("checkout-team"));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

use crate::core::group::FeatureGroup;
use crate::core::types::FeatureName;
use crate::core::weighted;

/// Immutable descriptive metadata for one feature.
///
/// Constructed through [`FeatureMetadata::builder`] by a resolving
/// provider; value equality backs the guarantee that resolving the same
/// feature from the same source twice yields equal metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureMetadata {
    label: String,
    enabled_by_default: bool,
    groups: HashSet<FeatureGroup>,
    attributes: IndexMap<String, String>,
}

impl FeatureMetadata {
    /// Create a builder with the given label.
    pub fn builder(label: impl Into<String>) -> FeatureMetadataBuilder {
        FeatureMetadataBuilder::new(label)
    }

    /// The all-defaults metadata for a feature: label = feature name,
    /// disabled, no groups, no attributes.
    pub fn named(feature: &FeatureName) -> Self {
        Self::builder(feature.as_str()).build()
    }

    /// Get the human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check whether the feature is enabled by default.
    pub fn is_enabled_by_default(&self) -> bool {
        self.enabled_by_default
    }

    /// Get the set of groups this feature belongs to.
    pub fn groups(&self) -> &HashSet<FeatureGroup> {
        &self.groups
    }

    /// Get the feature attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Get the groups ordered ascending by priority, ties broken by label.
    ///
    /// The group set itself is unordered; this accessor gives a
    /// deterministic order for presentation.
    ///
    /// # Example
    ///
    /// ```
    /// use flagstone::core::group::FeatureGroup;
    /// use flagstone::core::metadata::FeatureMetadata;
    ///
    /// let meta = FeatureMetadata::builder("F")
    ///     .group(FeatureGroup::with_priority("Later", 10))
    ///     .group(FeatureGroup::with_priority("First", 1))
    ///     .build();
    ///
    /// let labels: Vec<_> = meta.sorted_groups().iter().map(|g| g.label()).collect();
    /// assert_eq!(labels, ["First", "Later"]);
    /// ```
    pub fn sorted_groups(&self) -> Vec<&FeatureGroup> {
        let mut groups: Vec<&FeatureGroup> = self.groups.iter().collect();
        groups.sort_by(|a, b| {
            weighted::by_priority(*a, *b).then_with(|| a.label().cmp(b.label()))
        });
        groups
    }
}

/// Builder for [`FeatureMetadata`].
#[derive(Debug)]
pub struct FeatureMetadataBuilder {
    label: String,
    enabled_by_default: bool,
    groups: HashSet<FeatureGroup>,
    attributes: IndexMap<String, String>,
}

impl FeatureMetadataBuilder {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled_by_default: false,
            groups: HashSet::new(),
            attributes: IndexMap::new(),
        }
    }

    /// Set whether the feature is enabled by default.
    pub fn enabled_by_default(mut self, enabled: bool) -> Self {
        self.enabled_by_default = enabled;
        self
    }

    /// Add a group. Duplicates collapse by label.
    pub fn group(mut self, group: FeatureGroup) -> Self {
        self.groups.insert(group);
        self
    }

    /// Set an attribute. A later write for the same key overwrites the
    /// earlier value while keeping the key's original position.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Build the immutable metadata.
    pub fn build(self) -> FeatureMetadata {
        FeatureMetadata {
            label: self.label,
            enabled_by_default: self.enabled_by_default,
            groups: self.groups,
            attributes: self.attributes,
        }
    }
}
