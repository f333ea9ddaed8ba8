//! core::weighted
//!
//! Priority-based ordering for entities that carry an externally assigned
//! weight.
//!
//! # Features
//!
//! - The [`Weighted`] trait for any entity exposing an integer priority
//! - An ascending comparator and a stable in-place sort helper
//!
//! Lower priority values sort first. Ties keep their relative insertion
//! order (the sort is stable), so orderings are deterministic.

use std::cmp::Ordering;

/// Common interface for entities that have different priorities.
///
/// Lower numeric values sort first.
pub trait Weighted {
    /// The priority of this entity. Lower sorts first.
    fn priority(&self) -> i32;
}

/// Compare two weighted entities, ascending by priority.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use flagstone::core::group::FeatureGroup;
/// use flagstone::core::weighted::by_priority;
///
/// let low = FeatureGroup::with_priority("Early", 1);
/// let high = FeatureGroup::with_priority("Late", 10);
/// assert_eq!(by_priority(&low, &high), Ordering::Less);
/// ```
pub fn by_priority(left: &dyn Weighted, right: &dyn Weighted) -> Ordering {
    left.priority().cmp(&right.priority())
}

/// Sort a slice ascending by priority.
///
/// The sort is stable: entities with equal priority retain their relative
/// insertion order.
///
/// # Example
///
/// ```
/// use flagstone::core::group::FeatureGroup;
/// use flagstone::core::weighted::sort_by_priority;
///
/// let mut groups = vec![
///     FeatureGroup::with_priority("C", 5),
///     FeatureGroup::with_priority("A", 1),
///     FeatureGroup::with_priority("B", 3),
/// ];
/// sort_by_priority(&mut groups);
///
/// let labels: Vec<_> = groups.iter().map(|g| g.label()).collect();
/// assert_eq!(labels, ["A", "B", "C"]);
/// ```
pub fn sort_by_priority<T: Weighted>(items: &mut [T]) {
    items.sort_by_key(|item| item.priority());
}
