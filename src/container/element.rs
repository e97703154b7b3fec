//! The unit of traversal.
//!
//! Sequences and ranges yield their values as [`Element::Item`]; mappings
//! yield [`Element::Pair`]. Wherever a single value is needed, a pair is
//! presented as the two-element array `[key, value]`.

use std::borrow::Cow;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;
use std::slice;

use crate::value::{Value, ValueKind};

/// One element produced while traversing a container.
///
/// # Examples
///
/// ```rust
/// use enumerables::container::Element;
/// use enumerables::value::{Symbol, Value};
///
/// let key = Value::from(Symbol::new("one"));
/// let value = Value::Nil;
/// let pair = Element::Pair(&key, &value);
///
/// // A pair reads as `[key, value]`, but its truthiness is the value's.
/// assert_eq!(pair.to_value().into_owned(), Value::pair(Symbol::new("one"), Value::Nil));
/// assert!(!pair.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<'a> {
    /// A sequence value or range member.
    Item(Cow<'a, Value>),
    /// A mapping entry.
    Pair(&'a Value, &'a Value),
}

impl Element<'_> {
    /// Returns the element as a single value; pairs become `[key, value]`.
    pub fn to_value(&self) -> Cow<'_, Value> {
        match self {
            Self::Item(value) => Cow::Borrowed(value.as_ref()),
            Self::Pair(key, value) => Cow::Owned(Value::pair((*key).clone(), (*value).clone())),
        }
    }

    /// Consumes the element into an owned value; pairs become `[key, value]`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Item(value) => value.into_owned(),
            Self::Pair(key, value) => Value::pair(key.clone(), value.clone()),
        }
    }

    /// Splits the element into the two arguments of a two-parameter block.
    ///
    /// Pairs split into key and value. An array item splats into its first
    /// two entries, missing entries reading as `nil`. Any other item is
    /// passed as `(item, nil)`.
    pub fn split(&self) -> (Cow<'_, Value>, Cow<'_, Value>) {
        const NIL: &Value = &Value::Nil;
        match self {
            Self::Pair(key, value) => (Cow::Borrowed(*key), Cow::Borrowed(*value)),
            Self::Item(item) => match item.as_ref() {
                Value::Array(entries) => (
                    Cow::Borrowed(entries.first().unwrap_or(NIL)),
                    Cow::Borrowed(entries.get(1).unwrap_or(NIL)),
                ),
                other => (Cow::Borrowed(other), Cow::Borrowed(NIL)),
            },
        }
    }

    /// Consumes the element into a mapping entry.
    ///
    /// Pairs keep their key and value; items split as in [`Element::split`].
    pub fn into_entry(self) -> (Value, Value) {
        match self {
            Self::Pair(key, value) => (key.clone(), value.clone()),
            Self::Item(_) => {
                let (key, value) = self.split();
                (key.into_owned(), value.into_owned())
            }
        }
    }

    /// Default truthiness: the item itself, or the value component of a pair.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Item(value) => value.is_truthy(),
            Self::Pair(_, value) => value.is_truthy(),
        }
    }

    /// Kind of the element as a single value; pairs are arrays.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Item(value) => value.kind(),
            Self::Pair(..) => ValueKind::Array,
        }
    }

    /// Returns `true` if the element, read as a single value, equals `other`.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Item(value), _) => value.as_ref() == other,
            (Self::Pair(key, value), Value::Array(entries)) => {
                entries.len() == 2 && entries[0] == **key && entries[1] == **value
            }
            (Self::Pair(..), _) => false,
        }
    }
}

/// Ordered iterator over the elements of one container.
///
/// Created by [`Foldable::elements`](crate::traversal::Foldable::elements);
/// borrows the container and never mutates it.
#[derive(Debug, Clone)]
pub enum Elements<'a> {
    /// Values of a sequence.
    Sequence(slice::Iter<'a, Value>),
    /// Entries of a mapping.
    Mapping(slice::Iter<'a, (Value, Value)>),
    /// Members of a range.
    Range(RangeInclusive<i64>),
}

impl<'a> Iterator for Elements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(values) => values.next().map(|value| Element::Item(Cow::Borrowed(value))),
            Self::Mapping(entries) => entries.next().map(|(key, value)| Element::Pair(key, value)),
            Self::Range(members) => members
                .next()
                .map(|member| Element::Item(Cow::Owned(Value::Integer(member)))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(values) => values.size_hint(),
            Self::Mapping(entries) => entries.size_hint(),
            Self::Range(members) => members.size_hint(),
        }
    }
}

impl FusedIterator for Elements<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;
    use rstest::rstest;

    #[rstest]
    fn split_pair_into_key_and_value() {
        let key = Value::from(Symbol::new("one"));
        let value = Value::from(1);
        let element = Element::Pair(&key, &value);
        let (left, right) = element.split();
        assert_eq!(left.as_ref(), &key);
        assert_eq!(right.as_ref(), &value);
    }

    #[rstest]
    #[case(Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)]), Value::from(1), Value::from(2))]
    #[case(Value::Array(vec![Value::from(1)]), Value::from(1), Value::Nil)]
    #[case(Value::Array(vec![]), Value::Nil, Value::Nil)]
    #[case(Value::from(7), Value::from(7), Value::Nil)]
    fn split_item_splats_arrays(#[case] item: Value, #[case] first: Value, #[case] second: Value) {
        let element = Element::Item(Cow::Owned(item));
        let (left, right) = element.split();
        assert_eq!(left.into_owned(), first);
        assert_eq!(right.into_owned(), second);
    }

    #[rstest]
    fn pair_equals_two_element_array() {
        let key = Value::from(Symbol::new("one"));
        let value = Value::from(1);
        let element = Element::Pair(&key, &value);
        assert!(element.equals(&Value::pair(Symbol::new("one"), 1)));
        assert!(!element.equals(&Value::from(1)));
        assert_eq!(element.kind(), ValueKind::Array);
    }

    #[rstest]
    fn range_elements_are_owned_integers() {
        let collected: Vec<Value> = Elements::Range(1..=3).map(Element::into_value).collect();
        assert_eq!(collected, vec![Value::from(1), Value::from(2), Value::from(3)]);
    }
}
