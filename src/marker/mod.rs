//! marker
//!
//! Declarative markers attached to feature definitions.
//!
//! # Design
//!
//! A [`Marker`] is a declarative tag (a kind identifier plus named
//! parameters) attached to the definition of a feature. The resolution
//! engine never hard-wires how markers are discovered: it consumes the
//! [`MarkerSource`] trait, so alternate discovery strategies (an in-memory
//! catalog, a code-generated registry, external declarative config) can
//! substitute without changing the resolution algorithm.
//!
//! # Modules
//!
//! - [`catalog`] - Declarative in-memory marker source
//! - [`groups`] - Group definition registry seam
//! - [`resolver`] - Marker-based metadata resolution

pub mod catalog;
pub mod groups;
pub mod resolver;

pub use catalog::{FeatureCatalog, FeatureDefinition};
pub use groups::{GroupRegistry, StaticGroupRegistry};
pub use resolver::MarkerMetadataResolver;

use indexmap::IndexMap;

use crate::core::types::FeatureName;

/// Marker kind reserved for feature attributes.
///
/// A marker of this kind declares a `(key, value)` pair to be surfaced as
/// a feature attribute; see [`resolver::try_as_attribute`].
pub const ATTRIBUTE_KIND: &str = "feature.attribute";

/// A declarative tag attached to a feature's definition.
///
/// Markers are open-ended: any kind string is valid, and kinds the
/// resolution engine does not recognize are simply skipped. Parameters
/// keep their declaration order.
///
/// # Example
///
/// ```
/// use flagstone::marker::Marker;
///
/// let marker = Marker::new("rollout.stage").with_param("stage", "canary");
/// assert_eq!(marker.kind(), "rollout.stage");
/// assert_eq!(marker.param("stage"), Some("canary"));
/// assert_eq!(marker.param("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    kind: String,
    params: IndexMap<String, String>,
}

impl Marker {
    /// Create a marker of the given kind with no parameters.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: IndexMap::new(),
        }
    }

    /// Create an attribute marker declaring a `(key, value)` pair.
    ///
    /// # Example
    ///
    /// ```
    /// use flagstone::marker::{Marker, ATTRIBUTE_KIND};
    ///
    /// let marker = Marker::attribute("owner", "search-team");
    /// assert_eq!(marker.kind(), ATTRIBUTE_KIND);
    /// assert_eq!(marker.param("key"), Some("owner"));
    /// assert_eq!(marker.param("value"), Some("search-team"));
    /// ```
    pub fn attribute(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ATTRIBUTE_KIND)
            .with_param("key", key)
            .with_param("value", value)
    }

    /// Add a named parameter. A later write for the same name overwrites
    /// the earlier value.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Get the marker kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Iterate parameters in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// The marker enumeration subsystem consumed by the resolution engine.
///
/// Implementations answer three questions about a feature's defining
/// symbol: its explicit label (if any), whether the "enabled by default"
/// presence marker is attached, and the full ordered sequence of markers.
/// How markers are discovered is the implementation's business.
pub trait MarkerSource {
    /// The explicit label attached to the feature, if any.
    fn label(&self, feature: &FeatureName) -> Option<String>;

    /// Whether the feature carries the "enabled by default" presence
    /// marker. Presence means `true`; there is no configurable value.
    fn enabled_by_default(&self, feature: &FeatureName) -> bool;

    /// The full ordered sequence of markers attached to the feature.
    ///
    /// Features unknown to the source yield an empty sequence.
    fn markers(&self, feature: &FeatureName) -> Vec<Marker>;
}
