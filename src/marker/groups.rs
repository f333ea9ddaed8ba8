//! marker::groups
//!
//! Group definition registry seam.
//!
//! # Design
//!
//! The resolution engine does not decide which marker kinds denote
//! feature groups. It consults a [`GroupRegistry`]: given a marker, the
//! registry either constructs the [`FeatureGroup`] (label and priority)
//! that marker kind stands for, or answers `None` for kinds it does not
//! recognize. Unrecognized kinds are never an error.

use std::collections::HashMap;

use crate::core::group::FeatureGroup;
use crate::marker::Marker;

/// Resolves markers to the group definitions they stand for.
pub trait GroupRegistry {
    /// The group this marker denotes, or `None` if its kind is not a
    /// group marker.
    fn group_for(&self, marker: &Marker) -> Option<FeatureGroup>;
}

/// A registry backed by a static marker-kind-to-group map.
///
/// The default registry is empty: no marker resolves to a group.
///
/// # Example
///
/// ```
/// use flagstone::core::group::FeatureGroup;
/// use flagstone::marker::{GroupRegistry, Marker, StaticGroupRegistry};
///
/// let mut registry = StaticGroupRegistry::new();
/// registry.register("perf", FeatureGroup::with_priority("Performance", 10));
///
/// let group = registry.group_for(&Marker::new("perf")).unwrap();
/// assert_eq!(group.label(), "Performance");
/// assert!(registry.group_for(&Marker::new("unknown")).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticGroupRegistry {
    by_kind: HashMap<String, FeatureGroup>,
}

impl StaticGroupRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a marker kind with a group definition.
    ///
    /// A later registration for the same kind replaces the earlier one.
    pub fn register(&mut self, kind: impl Into<String>, group: FeatureGroup) {
        self.by_kind.insert(kind.into(), group);
    }

    /// Number of registered marker kinds.
    pub fn len(&self) -> usize {
        self.by_kind.len()
    }

    /// Whether no marker kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.by_kind.is_empty()
    }
}

impl GroupRegistry for StaticGroupRegistry {
    fn group_for(&self, marker: &Marker) -> Option<FeatureGroup> {
        self.by_kind.get(marker.kind()).cloned()
    }
}
