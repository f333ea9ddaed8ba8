//! marker::catalog
//!
//! Declarative in-memory marker source.
//!
//! # Design
//!
//! Rust has no runtime annotation reflection, so the catalog plays the
//! role a reflective enumeration subsystem plays elsewhere: features are
//! declared as data (a validated name, an optional label, an
//! "enabled by default" presence flag, and an ordered marker list) and
//! the catalog serves them through the [`MarkerSource`] seam.
//!
//! # Example
//!
//! ```
//! use flagstone::marker::{FeatureCatalog, FeatureDefinition, Marker};
//!
//! let catalog = FeatureCatalog::new()
//!     .define(
//!         FeatureDefinition::new("SEARCH_V2")
//!             .unwrap()
//!             .label("Improved search")
//!             .enabled_by_default()
//!             .marker(Marker::attribute("owner", "search-team")),
//!     )
//!     .define(FeatureDefinition::new("DARK_MODE").unwrap());
//!
//! assert_eq!(catalog.len(), 2);
//! ```

use indexmap::IndexMap;

use crate::core::types::{FeatureName, TypeError};
use crate::marker::{Marker, MarkerSource};

/// The declaration of one feature: its name plus attached markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDefinition {
    name: FeatureName,
    label: Option<String>,
    enabled_by_default: bool,
    markers: Vec<Marker>,
}

impl FeatureDefinition {
    /// Start a definition for the given feature name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFeatureName` if the name is not a valid
    /// [`FeatureName`].
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        Ok(Self {
            name: FeatureName::new(name)?,
            label: None,
            enabled_by_default: false,
            markers: Vec::new(),
        })
    }

    /// Attach an explicit human-readable label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach the "enabled by default" presence marker.
    ///
    /// Presence means enabled; there is no boolean-valued variant.
    pub fn enabled_by_default(mut self) -> Self {
        self.enabled_by_default = true;
        self
    }

    /// Attach a marker. Markers keep their declaration order.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// The feature name this definition declares.
    pub fn name(&self) -> &FeatureName {
        &self.name
    }
}

/// An ordered collection of feature definitions.
///
/// The catalog owns the definitions and serves them through
/// [`MarkerSource`]. A later definition for an already-defined name
/// replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    definitions: IndexMap<FeatureName, FeatureDefinition>,
}

impl FeatureCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, replacing any earlier definition for the same
    /// name.
    pub fn define(mut self, definition: FeatureDefinition) -> Self {
        self.definitions
            .insert(definition.name().clone(), definition);
        self
    }

    /// Iterate the defined feature names in definition order.
    pub fn features(&self) -> impl Iterator<Item = &FeatureName> {
        self.definitions.keys()
    }

    /// Whether the catalog defines the given feature.
    pub fn contains(&self, feature: &FeatureName) -> bool {
        self.definitions.contains_key(feature)
    }

    /// Number of defined features.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl MarkerSource for FeatureCatalog {
    fn label(&self, feature: &FeatureName) -> Option<String> {
        self.definitions
            .get(feature)
            .and_then(|definition| definition.label.clone())
    }

    fn enabled_by_default(&self, feature: &FeatureName) -> bool {
        self.definitions
            .get(feature)
            .is_some_and(|definition| definition.enabled_by_default)
    }

    fn markers(&self, feature: &FeatureName) -> Vec<Marker> {
        self.definitions
            .get(feature)
            .map(|definition| definition.markers.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(name: &str) -> FeatureName {
        FeatureName::new(name).unwrap()
    }

    #[test]
    fn invalid_names_rejected_at_definition() {
        assert!(FeatureDefinition::new("").is_err());
        assert!(FeatureDefinition::new(" padded ").is_err());
    }

    #[test]
    fn definition_order_is_preserved() {
        let catalog = FeatureCatalog::new()
            .define(FeatureDefinition::new("B").unwrap())
            .define(FeatureDefinition::new("A").unwrap());

        let names: Vec<_> = catalog.features().map(FeatureName::as_str).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn redefinition_replaces_earlier() {
        let catalog = FeatureCatalog::new()
            .define(FeatureDefinition::new("F").unwrap().label("Old"))
            .define(FeatureDefinition::new("F").unwrap().label("New"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.label(&feature("F")), Some("New".to_string()));
    }

    #[test]
    fn source_answers_for_known_features() {
        let catalog = FeatureCatalog::new().define(
            FeatureDefinition::new("F")
                .unwrap()
                .label("Labelled")
                .enabled_by_default()
                .marker(Marker::new("custom")),
        );

        assert_eq!(catalog.label(&feature("F")), Some("Labelled".to_string()));
        assert!(catalog.enabled_by_default(&feature("F")));
        assert_eq!(catalog.markers(&feature("F")).len(), 1);
    }

    #[test]
    fn source_is_empty_for_unknown_features() {
        let catalog = FeatureCatalog::new();

        assert_eq!(catalog.label(&feature("GHOST")), None);
        assert!(!catalog.enabled_by_default(&feature("GHOST")));
        assert!(catalog.markers(&feature("GHOST")).is_empty());
    }

    #[test]
    fn marker_order_is_declaration_order() {
        let catalog = FeatureCatalog::new().define(
            FeatureDefinition::new("F")
                .unwrap()
                .marker(Marker::new("second"))
                .marker(Marker::new("first")),
        );

        let kinds: Vec<_> = catalog
            .markers(&feature("F"))
            .into_iter()
            .map(|m| m.kind().to_string())
            .collect();
        assert_eq!(kinds, ["second", "first"]);
    }
}
