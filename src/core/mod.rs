//! core
//!
//! Core value objects for feature metadata.
//!
//! # Modules
//!
//! - [`types`] - Strong types: `FeatureName`
//! - [`group`] - `FeatureGroup` value object
//! - [`metadata`] - `FeatureMetadata` value object and builder
//! - [`weighted`] - Priority-based ordering utility
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid identifiers at construction time
//! - Value objects are immutable once built; thread-safety falls out of
//!   construction-time-only writes
//! - Equality is structural, so resolving the same feature twice yields
//!   equal metadata

pub mod group;
pub mod metadata;
pub mod types;
pub mod weighted;
