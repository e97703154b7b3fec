//! The closed set of container shapes and their reconstruction strategy.

use std::ops::{Range, RangeInclusive};

use super::{Element, IntRange, Mapping};
use crate::value::Value;

/// The shape family of a container.
///
/// The shape decides how a filtered result is rebuilt: mappings rebuild as
/// mappings, while sequences and ranges both rebuild as sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An ordered list of values.
    Sequence,
    /// An insertion-ordered set of key/value pairs.
    Mapping,
    /// An ascending integer interval.
    Range,
}

impl Shape {
    /// Rebuilds a container of this shape family from kept elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::container::{Container, IntRange, Shape};
    /// use enumerables::traversal::Foldable;
    ///
    /// let range = IntRange::inclusive(1, 3);
    /// let rebuilt = Shape::Range.rebuild(range.elements());
    /// assert_eq!(rebuilt, Container::Sequence(enumerables::seq![1, 2, 3]));
    /// ```
    pub fn rebuild<'a>(self, elements: impl IntoIterator<Item = Element<'a>>) -> Container {
        match self {
            Self::Mapping => Container::Mapping(elements.into_iter().map(Element::into_entry).collect()),
            Self::Sequence | Self::Range => {
                Container::Sequence(elements.into_iter().map(Element::into_value).collect())
            }
        }
    }
}

/// A receiver of enumeration operations: one of three shapes.
///
/// # Examples
///
/// ```rust
/// use enumerables::container::{Container, IntRange, Shape};
/// use enumerables::value::Value;
///
/// let sequence = Container::from(enumerables::seq![1, 2, 3]);
/// assert_eq!(sequence.shape(), Shape::Sequence);
/// assert_eq!(sequence.len(), 3);
///
/// let range = Container::from(1..=10);
/// assert_eq!(range.len(), 10);
/// assert_eq!(range.to_value(), Value::Range(IntRange::inclusive(1, 10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Container {
    /// An ordered, possibly empty list of values.
    Sequence(Vec<Value>),
    /// Unique keys to values, in insertion order.
    Mapping(Mapping),
    /// An integer interval.
    Range(IntRange),
}

impl Container {
    /// Returns the shape family.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
            Self::Range(_) => Shape::Range,
        }
    }

    /// Number of elements: sequence length, pair count or range cardinality.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(values) => values.len(),
            Self::Mapping(mapping) => mapping.len(),
            Self::Range(range) => range.len(),
        }
    }

    /// Returns `true` if traversal yields no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts the container into the equivalent [`Value`].
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Consumes the container into the equivalent [`Value`].
    pub fn into_value(self) -> Value {
        match self {
            Self::Sequence(values) => Value::Array(values),
            Self::Mapping(mapping) => Value::Hash(mapping),
            Self::Range(range) => Value::Range(range),
        }
    }
}

impl From<Vec<Value>> for Container {
    fn from(values: Vec<Value>) -> Self {
        Self::Sequence(values)
    }
}

impl From<&[Value]> for Container {
    fn from(values: &[Value]) -> Self {
        Self::Sequence(values.to_vec())
    }
}

impl From<Mapping> for Container {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<IntRange> for Container {
    fn from(range: IntRange) -> Self {
        Self::Range(range)
    }
}

impl From<RangeInclusive<i64>> for Container {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::Range(range.into())
    }
}

impl From<Range<i64>> for Container {
    fn from(range: Range<i64>) -> Self {
        Self::Range(range.into())
    }
}

impl TryFrom<Value> for Container {
    type Error = Value;

    /// Arrays, hashes and ranges are containers; anything else is returned.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Ok(Self::Sequence(values)),
            Value::Hash(mapping) => Ok(Self::Mapping(mapping)),
            Value::Range(range) => Ok(Self::Range(range)),
            other => Err(other),
        }
    }
}
