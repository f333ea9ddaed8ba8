//! provider
//!
//! The caller-facing feature provider contract and its implementations.
//!
//! # Design
//!
//! A provider enumerates the features it knows and resolves metadata for
//! each. Both the properties-backed [`PropertiesFeatureProvider`] and the
//! catalog-backed [`CatalogFeatureProvider`] produce metadata satisfying
//! the same contract, so callers are agnostic to where a feature was
//! declared.
//!
//! Providers are read-only views over their source: construction-time (or
//! lookup-time) resolution only, no mutation afterwards, which is what
//! makes concurrent readers safe without synchronization.
//!
//! # Modules
//!
//! - [`source`] - Flat key/value properties text source
//! - [`properties`] - Provider over a properties source
//! - [`catalog`] - Provider over a declarative feature catalog

pub mod catalog;
pub mod properties;
pub mod source;

pub use catalog::CatalogFeatureProvider;
pub use properties::PropertiesFeatureProvider;
pub use source::{PropertiesSource, SourceError};

use std::collections::BTreeSet;
use thiserror::Error;

use crate::core::metadata::FeatureMetadata;
use crate::core::types::{FeatureName, TypeError};

/// Errors from provider operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Metadata was requested for a feature the provider does not know.
    #[error("unknown feature '{0}'")]
    UnknownFeature(FeatureName),

    /// A source key could not be used as a feature name.
    #[error("invalid feature name: {0}")]
    InvalidName(#[from] TypeError),
}

/// A component that enumerates known features and resolves their
/// metadata from one specific source.
pub trait FeatureProvider {
    /// All features known to this provider.
    fn features(&self) -> BTreeSet<FeatureName>;

    /// Resolve the metadata for a feature.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownFeature`] if the feature is not
    /// known to this provider. A silent default is never returned;
    /// callers that want to avoid the error can check membership via
    /// [`features`](FeatureProvider::features) first.
    fn metadata(&self, feature: &FeatureName) -> Result<FeatureMetadata, ProviderError>;
}
