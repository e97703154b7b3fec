//! Lazy, restartable views of a pending traversal.
//!
//! Operations called without a block do no work. They return an
//! [`Enumerator`] that remembers the container and the operation; nothing is
//! visited until the enumerator is iterated or given a block, and it can be
//! iterated any number of times with the same result.
//!
//! # Examples
//!
//! ```rust
//! use enumerables::enumerable::{Callable, Enumerable, PendingOperation};
//! use enumerables::container::IntRange;
//! use enumerables::value::Value;
//!
//! let range = IntRange::inclusive(1, 3);
//! let enumerator = range.my_map(None).enumerator().unwrap();
//! assert_eq!(enumerator.operation(), PendingOperation::Map);
//!
//! // Restartable: two passes see the same elements.
//! assert_eq!(enumerator.to_values(), enumerator.to_values());
//!
//! // Supplying the block later runs the pending operation.
//! let tripled = enumerator.with_block(Callable::unary(|n| n.as_integer().map(|n| n * 3)));
//! assert_eq!(tripled, Value::Array(enumerables::seq![3, 6, 9]));
//! ```

use std::fmt;

use super::operations::{each_in, each_with_index_in, map_in, select_in};
use super::{Callable, Enumerable};
use crate::container::{Container, Element, Elements, Shape};
use crate::traversal::Foldable;
use crate::value::Value;

/// The operation an [`Enumerator`] stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingOperation {
    /// `my_each` without a block.
    Each,
    /// `my_each_with_index` without a block.
    EachWithIndex,
    /// `my_select` without a block.
    Select,
    /// `my_map` without a block.
    Map,
}

impl fmt::Display for PendingOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Each => "my_each",
            Self::EachWithIndex => "my_each_with_index",
            Self::Select => "my_select",
            Self::Map => "my_map",
        };
        formatter.write_str(name)
    }
}

/// A deferred traversal over an immutable snapshot of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    source: Container,
    operation: PendingOperation,
}

impl Enumerator {
    /// Creates an enumerator; no element is visited.
    pub fn new(source: Container, operation: PendingOperation) -> Self {
        tracing::trace!(
            %operation,
            shape = ?source.shape(),
            "no block given; deferring traversal"
        );
        Self { source, operation }
    }

    /// The operation this enumerator stands in for.
    #[inline]
    pub const fn operation(&self) -> PendingOperation {
        self.operation
    }

    /// The snapshot being traversed.
    #[inline]
    pub const fn source(&self) -> &Container {
        &self.source
    }

    /// Number of elements a full traversal visits.
    pub fn size(&self) -> usize {
        self.source.len()
    }

    /// Starts a fresh traversal.
    pub fn iter(&self) -> Elements<'_> {
        self.source.elements()
    }

    /// Collects one traversal as owned values; pairs become `[key, value]`.
    pub fn to_values(&self) -> Vec<Value> {
        self.source.to_list()
    }

    /// Runs the pending operation with `block` and returns its result.
    ///
    /// `my_each` and `my_each_with_index` return the source itself,
    /// `my_select` the filtered container and `my_map` an array.
    pub fn with_block(&self, block: Callable<'_>) -> Value {
        match self.operation {
            PendingOperation::Each => {
                each_in(&self.source, &block);
                self.source.to_value()
            }
            PendingOperation::EachWithIndex => {
                each_with_index_in(&self.source, &block);
                self.source.to_value()
            }
            PendingOperation::Select => select_in(&self.source, self.source.shape(), &block).into_value(),
            PendingOperation::Map => Value::Array(map_in(&self.source, &block)),
        }
    }

    /// Runs the pending operation with a block that also receives the
    /// zero-based position of each element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::enumerable::{Callable, Enumerable};
    /// use enumerables::value::Value;
    /// use enumerables::seq;
    ///
    /// let letters = seq!["a", "b", "c"];
    /// let enumerator = letters.my_select(None).enumerator().unwrap();
    /// let even_positions = enumerator.with_index(Callable::binary(|_, index| index.is_even()));
    /// assert_eq!(even_positions, Value::Array(seq!["a", "c"]));
    /// ```
    pub fn with_index(&self, block: Callable<'_>) -> Value {
        match self.operation {
            PendingOperation::Each | PendingOperation::EachWithIndex => {
                each_with_index_in(&self.source, &block);
                self.source.to_value()
            }
            PendingOperation::Select => {
                let kept = self
                    .source
                    .elements()
                    .enumerate()
                    .filter(|(index, element)| block.call_indexed(element, *index).is_truthy())
                    .map(|(_, element)| element);
                self.source.shape().rebuild(kept).into_value()
            }
            PendingOperation::Map => Value::Array(
                self.source
                    .elements()
                    .enumerate()
                    .map(|(index, element)| block.call_indexed(&element, index))
                    .collect(),
            ),
        }
    }
}

impl Foldable for Enumerator {
    fn elements(&self) -> Elements<'_> {
        self.source.elements()
    }

    #[inline]
    fn length(&self) -> usize {
        self.size()
    }
}

impl Enumerable for Enumerator {
    fn shape(&self) -> Shape {
        self.source.shape()
    }

    fn snapshot(&self) -> Container {
        self.source.clone()
    }
}

impl<'a> IntoIterator for &'a Enumerator {
    type Item = Element<'a>;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
