//! Flagstone - feature flag metadata resolution
//!
//! Flagstone resolves descriptive metadata (human-readable label, default
//! enablement, grouping, and arbitrary key/value attributes) for a set of
//! named feature flags, so that a feature-flag management layer can present
//! and evaluate them consistently regardless of where the flags were
//! declared.
//!
//! # Architecture
//!
//! The crate is layered around one contract, [`provider::FeatureProvider`],
//! with two independent implementations:
//!
//! - [`core`] - Value objects: `FeatureName`, `FeatureGroup`,
//!   `FeatureMetadata`, and the `Weighted` ordering utility
//! - [`marker`] - Declarative markers, the marker enumeration and group
//!   registry seams, and the marker-based metadata resolver
//! - [`provider`] - The `FeatureProvider` contract, the properties-backed
//!   provider with its flat key/value source, and the catalog-backed
//!   provider
//!
//! # Correctness Invariants
//!
//! Flagstone maintains the following invariants:
//!
//! 1. Resolved metadata is immutable: value objects are constructed once
//!    and exposed only through read-only accessors
//! 2. Both providers satisfy the same contract, so callers are agnostic
//!    to the source a feature was declared in
//! 3. A feature with no declared metadata resolves to usable defaults
//!    (label = feature name, disabled, no groups, no attributes), never
//!    to an error
//! 4. Metadata lookup for a feature unknown to a provider fails
//!    explicitly; it never returns a silent default

pub mod core;
pub mod marker;
pub mod provider;
