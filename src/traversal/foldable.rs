//! Foldable - the single iteration contract over every container shape.
//!
//! This module provides the `Foldable` trait. An implementor only supplies
//! [`Foldable::elements`], an ordered stream of [`Element`]s; every
//! traversal, query and fold in the crate is expressed on top of it.
//!
//! # Laws
//!
//! ## Consistency with `elements`
//!
//! ```text
//! fa.fold_left(init, f) == fa.elements().fold(init, f)
//! fa.length()           == fa.elements().count()
//! ```
//!
//! ## Quantifier duality
//!
//! ```text
//! fa.for_all(p) == !fa.exists(|element| !p(element))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use enumerables::container::IntRange;
//! use enumerables::traversal::Foldable;
//!
//! let range = IntRange::inclusive(1, 10);
//! let sum = range.fold_left(0, |accumulator, element| {
//!     accumulator + element.into_value().as_integer().unwrap_or(0)
//! });
//! assert_eq!(sum, 55);
//! ```

use crate::container::{Container, Element, Elements, IntRange, Mapping};
use crate::value::Value;

/// A structure whose elements can be visited in a fixed order.
///
/// # Required Methods
///
/// - `elements`: The ordered element stream
///
/// # Provided Methods
///
/// - `fold_left` / `try_fold_left`: Left-associative folds
/// - `length`, `is_empty`: Cardinality
/// - `to_list`: Elements as owned values
/// - `find`, `exists`, `for_all`: Short-circuiting searches
pub trait Foldable {
    /// Returns the elements in natural enumeration order.
    fn elements(&self) -> Elements<'_>;

    /// Folds the elements from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::traversal::Foldable;
    ///
    /// let values = enumerables::seq![1, 2, 3];
    /// let count = values.fold_left(0, |accumulator, _| accumulator + 1);
    /// assert_eq!(count, 3);
    /// ```
    fn fold_left<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, Element<'a>) -> B,
    {
        self.elements().fold(init, function)
    }

    /// Folds from left to right, stopping at the first error.
    fn try_fold_left<'a, B, E, F>(&'a self, init: B, mut function: F) -> Result<B, E>
    where
        F: FnMut(B, Element<'a>) -> Result<B, E>,
    {
        let mut accumulator = init;
        for element in self.elements() {
            accumulator = function(accumulator, element)?;
        }
        Ok(accumulator)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize {
        self.elements().count()
    }

    /// Returns whether the structure yields no elements.
    fn is_empty(&self) -> bool {
        self.elements().next().is_none()
    }

    /// Collects the elements as owned values; pairs become `[key, value]`.
    fn to_list(&self) -> Vec<Value> {
        self.elements().map(Element::into_value).collect()
    }

    /// Finds the first element satisfying a predicate.
    fn find<'a, P>(&'a self, mut predicate: P) -> Option<Element<'a>>
    where
        P: FnMut(&Element<'a>) -> bool,
    {
        self.elements().find(|element| predicate(element))
    }

    /// Checks if any element satisfies the predicate; `false` when empty.
    fn exists<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(&Element<'a>) -> bool,
    {
        self.elements().any(|element| predicate(&element))
    }

    /// Checks if every element satisfies the predicate; `true` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::traversal::Foldable;
    ///
    /// let empty: Vec<enumerables::value::Value> = vec![];
    /// assert!(empty.for_all(|_| false));
    /// ```
    fn for_all<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(&Element<'a>) -> bool,
    {
        self.elements().all(|element| predicate(&element))
    }
}

// =============================================================================
// [Value] Implementation
// =============================================================================

impl Foldable for [Value] {
    fn elements(&self) -> Elements<'_> {
        Elements::Sequence(self.iter())
    }

    /// Optimized implementation for slices.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Mapping Implementation
// =============================================================================

impl Foldable for Mapping {
    fn elements(&self) -> Elements<'_> {
        Elements::Mapping(self.entries().iter())
    }

    /// Optimized implementation for Mapping.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// IntRange Implementation
// =============================================================================

impl Foldable for IntRange {
    fn elements(&self) -> Elements<'_> {
        Elements::Range(self.iter())
    }

    /// Optimized implementation for IntRange: no materialization.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Container Implementation
// =============================================================================

impl Foldable for Container {
    fn elements(&self) -> Elements<'_> {
        match self {
            Self::Sequence(values) => values.elements(),
            Self::Mapping(mapping) => mapping.elements(),
            Self::Range(range) => range.elements(),
        }
    }

    /// Optimized implementation for Container.
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
