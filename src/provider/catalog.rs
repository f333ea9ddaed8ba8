//! provider::catalog
//!
//! Feature provider over a declarative catalog.
//!
//! # Design
//!
//! The provider owns a [`FeatureCatalog`] and a [`GroupRegistry`] and
//! answers the [`FeatureProvider`] contract by running the marker
//! resolver per lookup. Resolution is cheap (one pass over a feature's
//! markers) and repeat lookups yield value-equal metadata.
//!
//! # Example
//!
//! ```
//! use flagstone::core::group::FeatureGroup;
//! use flagstone::core::types::FeatureName;
//! use flagstone::marker::{FeatureCatalog, FeatureDefinition, Marker, StaticGroupRegistry};
//! use flagstone::provider::{CatalogFeatureProvider, FeatureProvider};
//!
//! let catalog = FeatureCatalog::new().define(
//!     FeatureDefinition::new("SEARCH")
//!         .unwrap()
//!         .label("New search")
//!         .marker(Marker::new("beta")),
//! );
//!
//! let mut registry = StaticGroupRegistry::new();
//! registry.register("beta", FeatureGroup::new("Beta"));
//!
//! let provider = CatalogFeatureProvider::with_groups(catalog, registry);
//! let meta = provider.metadata(&FeatureName::new("SEARCH").unwrap()).unwrap();
//! assert_eq!(meta.groups().len(), 1);
//! ```

use std::collections::BTreeSet;
use tracing::trace;

use crate::core::metadata::FeatureMetadata;
use crate::core::types::FeatureName;
use crate::marker::groups::{GroupRegistry, StaticGroupRegistry};
use crate::marker::resolver::MarkerMetadataResolver;
use crate::marker::FeatureCatalog;
use crate::provider::{FeatureProvider, ProviderError};

/// A provider that derives features and their metadata from a
/// [`FeatureCatalog`].
pub struct CatalogFeatureProvider {
    catalog: FeatureCatalog,
    groups: Box<dyn GroupRegistry + Send + Sync>,
}

impl CatalogFeatureProvider {
    /// Build a provider with the empty group registry: no marker resolves
    /// to a group.
    pub fn new(catalog: FeatureCatalog) -> Self {
        Self::with_groups(catalog, StaticGroupRegistry::new())
    }

    /// Build a provider with an explicit group registry.
    pub fn with_groups(
        catalog: FeatureCatalog,
        groups: impl GroupRegistry + Send + Sync + 'static,
    ) -> Self {
        Self {
            catalog,
            groups: Box::new(groups),
        }
    }
}

impl FeatureProvider for CatalogFeatureProvider {
    fn features(&self) -> BTreeSet<FeatureName> {
        self.catalog.features().cloned().collect()
    }

    fn metadata(&self, feature: &FeatureName) -> Result<FeatureMetadata, ProviderError> {
        if !self.catalog.contains(feature) {
            return Err(ProviderError::UnknownFeature(feature.clone()));
        }

        trace!(feature = %feature, "resolving catalog metadata");
        let resolver = MarkerMetadataResolver::new(&self.catalog, self.groups.as_ref());
        Ok(resolver.resolve(feature))
    }
}

impl std::fmt::Debug for CatalogFeatureProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogFeatureProvider")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
