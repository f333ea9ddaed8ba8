//! marker::resolver
//!
//! Marker-based metadata resolution.
//!
//! # Algorithm
//!
//! Given a feature, the resolver:
//!
//! 1. Takes the explicit label from the [`MarkerSource`], falling back to
//!    the feature's own name
//! 2. Takes the "enabled by default" presence flag from the source
//! 3. Runs two independent checks on every marker, group resolution via
//!    the [`GroupRegistry`] and [`try_as_attribute`], and folds the
//!    recognized ones into the result. The checks are not mutually
//!    exclusive: one marker may contribute both a group and an attribute
//! 4. Builds the immutable [`FeatureMetadata`]
//!
//! A feature with no markers resolves to the all-defaults metadata, and
//! unrecognized marker kinds are skipped. Resolution never fails.

use tracing::trace;

use crate::core::metadata::FeatureMetadata;
use crate::core::types::FeatureName;
use crate::marker::groups::GroupRegistry;
use crate::marker::{Marker, MarkerSource, ATTRIBUTE_KIND};

/// Interpret a marker as a feature attribute declaration.
///
/// A marker declares an attribute when its kind is [`ATTRIBUTE_KIND`] and
/// it carries both a `key` and a `value` parameter. Anything else is not
/// an attribute marker.
///
/// # Example
///
/// ```
/// use flagstone::marker::resolver::try_as_attribute;
/// use flagstone::marker::Marker;
///
/// let attr = Marker::attribute("owner", "search-team");
/// assert_eq!(
///     try_as_attribute(&attr),
///     Some(("owner".to_string(), "search-team".to_string()))
/// );
///
/// assert_eq!(try_as_attribute(&Marker::new("something.else")), None);
/// ```
pub fn try_as_attribute(marker: &Marker) -> Option<(String, String)> {
    if marker.kind() != ATTRIBUTE_KIND {
        return None;
    }
    let key = marker.param("key")?;
    let value = marker.param("value")?;
    Some((key.to_string(), value.to_string()))
}

/// Resolves [`FeatureMetadata`] from the markers attached to a feature.
///
/// The resolver borrows its two collaborators, the marker enumeration
/// source and the group definition registry, and treats both as black
/// boxes.
///
/// # Example
///
/// ```
/// use flagstone::core::types::FeatureName;
/// use flagstone::marker::{
///     FeatureCatalog, FeatureDefinition, Marker, MarkerMetadataResolver, StaticGroupRegistry,
/// };
///
/// let catalog = FeatureCatalog::new().define(
///     FeatureDefinition::new("SEARCH")
///         .unwrap()
///         .label("New search")
///         .marker(Marker::attribute("owner", "search-team")),
/// );
/// let registry = StaticGroupRegistry::new();
///
/// let resolver = MarkerMetadataResolver::new(&catalog, &registry);
/// let meta = resolver.resolve(&FeatureName::new("SEARCH").unwrap());
/// assert_eq!(meta.label(), "New search");
/// ```
pub struct MarkerMetadataResolver<'a> {
    source: &'a dyn MarkerSource,
    groups: &'a dyn GroupRegistry,
}

impl<'a> MarkerMetadataResolver<'a> {
    /// Create a resolver over a marker source and a group registry.
    pub fn new(source: &'a dyn MarkerSource, groups: &'a dyn GroupRegistry) -> Self {
        Self { source, groups }
    }

    /// Resolve the metadata for a feature.
    ///
    /// Resolution is total: a feature the source knows nothing about
    /// yields the all-defaults metadata.
    pub fn resolve(&self, feature: &FeatureName) -> FeatureMetadata {
        let label = self
            .source
            .label(feature)
            .unwrap_or_else(|| feature.as_str().to_string());

        let mut builder = FeatureMetadata::builder(label)
            .enabled_by_default(self.source.enabled_by_default(feature));

        for marker in self.source.markers(feature) {
            // Both checks run on every marker; they are independent.
            if let Some(group) = self.groups.group_for(&marker) {
                builder = builder.group(group);
            }
            if let Some((key, value)) = try_as_attribute(&marker) {
                builder = builder.attribute(key, value);
            }
        }

        trace!(feature = %feature, "resolved marker metadata");
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::group::FeatureGroup;
    use crate::marker::{FeatureCatalog, FeatureDefinition, StaticGroupRegistry};

    fn feature(name: &str) -> FeatureName {
        FeatureName::new(name).unwrap()
    }

    mod attribute_check {
        use super::*;

        #[test]
        fn recognizes_attribute_markers() {
            let marker = Marker::attribute("k", "v");
            assert_eq!(
                try_as_attribute(&marker),
                Some(("k".to_string(), "v".to_string()))
            );
        }

        #[test]
        fn rejects_other_kinds() {
            assert!(try_as_attribute(&Marker::new("group.admin")).is_none());
        }

        #[test]
        fn rejects_incomplete_declarations() {
            let missing_value = Marker::new(ATTRIBUTE_KIND).with_param("key", "k");
            assert!(try_as_attribute(&missing_value).is_none());

            let missing_key = Marker::new(ATTRIBUTE_KIND).with_param("value", "v");
            assert!(try_as_attribute(&missing_key).is_none());
        }
    }

    mod resolution {
        use super::*;

        #[test]
        fn no_markers_yields_defaults() {
            let catalog = FeatureCatalog::new()
                .define(FeatureDefinition::new("BARE").unwrap());
            let registry = StaticGroupRegistry::new();
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            let meta = resolver.resolve(&feature("BARE"));
            assert_eq!(meta.label(), "BARE");
            assert!(!meta.is_enabled_by_default());
            assert!(meta.groups().is_empty());
            assert!(meta.attributes().is_empty());
        }

        #[test]
        fn explicit_label_wins_over_name() {
            let catalog = FeatureCatalog::new()
                .define(FeatureDefinition::new("F").unwrap().label("Fancy"));
            let registry = StaticGroupRegistry::new();
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            assert_eq!(resolver.resolve(&feature("F")).label(), "Fancy");
        }

        #[test]
        fn default_enabled_is_presence_based() {
            let catalog = FeatureCatalog::new()
                .define(FeatureDefinition::new("ON").unwrap().enabled_by_default())
                .define(FeatureDefinition::new("OFF").unwrap());
            let registry = StaticGroupRegistry::new();
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            assert!(resolver.resolve(&feature("ON")).is_enabled_by_default());
            assert!(!resolver.resolve(&feature("OFF")).is_enabled_by_default());
        }

        #[test]
        fn group_markers_resolve_through_registry() {
            let catalog = FeatureCatalog::new().define(
                FeatureDefinition::new("F")
                    .unwrap()
                    .marker(Marker::new("perf"))
                    .marker(Marker::new("unregistered")),
            );
            let mut registry = StaticGroupRegistry::new();
            registry.register("perf", FeatureGroup::new("Performance"));
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            let meta = resolver.resolve(&feature("F"));
            assert_eq!(meta.groups().len(), 1);
            assert!(meta.groups().contains(&FeatureGroup::new("Performance")));
        }

        #[test]
        fn duplicate_group_markers_collapse() {
            let catalog = FeatureCatalog::new().define(
                FeatureDefinition::new("F")
                    .unwrap()
                    .marker(Marker::new("a"))
                    .marker(Marker::new("b")),
            );
            // Two kinds mapping to the same label: one group in the result.
            let mut registry = StaticGroupRegistry::new();
            registry.register("a", FeatureGroup::new("Shared"));
            registry.register("b", FeatureGroup::new("Shared"));
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            assert_eq!(resolver.resolve(&feature("F")).groups().len(), 1);
        }

        #[test]
        fn attribute_markers_overwrite_by_key() {
            let catalog = FeatureCatalog::new().define(
                FeatureDefinition::new("F")
                    .unwrap()
                    .marker(Marker::attribute("owner", "old"))
                    .marker(Marker::attribute("owner", "new")),
            );
            let registry = StaticGroupRegistry::new();
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            let meta = resolver.resolve(&feature("F"));
            assert_eq!(
                meta.attributes().get("owner").map(String::as_str),
                Some("new")
            );
        }

        #[test]
        fn one_marker_can_be_group_and_attribute() {
            let catalog = FeatureCatalog::new().define(
                FeatureDefinition::new("F")
                    .unwrap()
                    .marker(Marker::attribute("tier", "gold")),
            );
            // The attribute kind is also registered as a group kind; both
            // checks must fire for the same marker.
            let mut registry = StaticGroupRegistry::new();
            registry.register(ATTRIBUTE_KIND, FeatureGroup::new("Tagged"));
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            let meta = resolver.resolve(&feature("F"));
            assert_eq!(meta.groups().len(), 1);
            assert_eq!(
                meta.attributes().get("tier").map(String::as_str),
                Some("gold")
            );
        }

        #[test]
        fn unknown_feature_resolves_to_defaults() {
            let catalog = FeatureCatalog::new();
            let registry = StaticGroupRegistry::new();
            let resolver = MarkerMetadataResolver::new(&catalog, &registry);

            let meta = resolver.resolve(&feature("GHOST"));
            assert_eq!(meta.label(), "GHOST");
            assert!(meta.groups().is_empty());
        }
    }
}
