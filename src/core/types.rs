//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`FeatureName`] - Validated feature flag identifier
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use flagstone::core::types::FeatureName;
//!
//! // Valid constructions
//! let name = FeatureName::new("SEARCH_V2").unwrap();
//! assert_eq!(name.as_str(), "SEARCH_V2");
//!
//! // Invalid constructions fail at creation time
//! assert!(FeatureName::new("").is_err());
//! assert!(FeatureName::new(" padded ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid feature name: {0}")]
    InvalidFeatureName(String),
}

/// A validated feature flag identifier.
///
/// Feature names are unique within a provider's universe and must be
/// usable as keys in a flat key/value configuration source:
/// - Cannot be empty
/// - Cannot contain ASCII control characters
/// - Cannot start or end with whitespace (a source key is trimmed before
///   it becomes a name, so edge whitespace can only be a caller bug)
///
/// # Example
///
/// ```
/// use flagstone::core::types::FeatureName;
///
/// // Valid feature names
/// let name = FeatureName::new("PERFORMANCE_BOOST").unwrap();
/// assert_eq!(name.as_str(), "PERFORMANCE_BOOST");
///
/// let with_space = FeatureName::new("legacy checkout").unwrap();
/// assert_eq!(with_space.as_str(), "legacy checkout");
///
/// // Invalid feature names
/// assert!(FeatureName::new("").is_err());
/// assert!(FeatureName::new("tab\tseparated").is_err());
/// assert!(FeatureName::new(" leading").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeatureName(String);

impl FeatureName {
    /// Create a new validated feature name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFeatureName` if the name is empty,
    /// contains control characters, or has leading/trailing whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a feature name.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidFeatureName(
                "feature name cannot be empty".into(),
            ));
        }

        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidFeatureName(
                "feature name cannot contain control characters".into(),
            ));
        }

        if name != name.trim() {
            return Err(TypeError::InvalidFeatureName(
                "feature name cannot start or end with whitespace".into(),
            ));
        }

        Ok(())
    }

    /// Get the feature name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FeatureName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FeatureName> for String {
    fn from(name: FeatureName) -> Self {
        name.0
    }
}

impl AsRef<str> for FeatureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeatureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
