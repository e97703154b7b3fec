//! Insertion-ordered associative container.
//!
//! [`Mapping`] keeps unique keys in the order they were first inserted.
//! Re-inserting an existing key replaces its value without moving it, so
//! enumeration order is always declaration order.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(n)       |
//! | `get`          | O(n)       |
//! | `len`          | O(1)       |
//! | `iter`         | O(1) + O(n)|
//!
//! Mappings here are small literal-sized tables, so keys are found by a
//! linear scan and only need `Eq`.

use std::fmt;

use crate::value::Value;

/// An insertion-ordered map from [`Value`] keys to [`Value`]s.
///
/// Two mappings are equal when they hold the same entries in the same order.
///
/// # Examples
///
/// ```rust
/// use enumerables::container::Mapping;
/// use enumerables::value::{Symbol, Value};
///
/// let mut mapping = Mapping::new();
/// mapping.insert(Symbol::new("one").into(), 1.into());
/// mapping.insert(Symbol::new("two").into(), 2.into());
///
/// // Replacing keeps the original position
/// let previous = mapping.insert(Symbol::new("one").into(), 10.into());
/// assert_eq!(previous, Some(Value::Integer(1)));
///
/// let values: Vec<&Value> = mapping.values().collect();
/// assert_eq!(values, vec![&Value::Integer(10), &Value::Integer(2)]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(Value, Value)>", into = "Vec<(Value, Value)>")
)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    /// Creates an empty mapping.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of key/value pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Inserts a pair, returning the replaced value if the key was present.
    ///
    /// A new key is appended; an existing key keeps its position.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the pairs in insertion order.
    #[inline]
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.entries.iter().position(|(candidate, _)| candidate == key)
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iterable {
            mapping.insert(key.into(), value.into());
        }
        mapping
    }
}

impl From<Vec<(Value, Value)>> for Mapping {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Mapping> for Vec<(Value, Value)> {
    fn from(mapping: Mapping) -> Self {
        mapping.entries
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key} => {value}")?;
        }
        formatter.write_str("}")
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}
