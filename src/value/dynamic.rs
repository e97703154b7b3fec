//! The dynamic element type carried by every container.
//!
//! Containers are heterogeneous: a single sequence may hold `false`, `nil`
//! and a string side by side. [`Value`] is the closed sum of everything a
//! container element can be, and [`ValueKind`] is its kind tag, used as the
//! "class token" when testing elements by kind.

use std::cmp::Ordering;
use std::fmt;

use super::Symbol;
use crate::container::{IntRange, Mapping};

/// The kind tag of a [`Value`].
///
/// # Examples
///
/// ```rust
/// use enumerables::value::{Value, ValueKind};
///
/// assert_eq!(Value::from(1).kind(), ValueKind::Integer);
/// assert_eq!(Value::Nil.kind(), ValueKind::Nil);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// The absent value.
    Nil,
    /// `true` or `false`.
    Boolean,
    /// A signed 64-bit integer.
    Integer,
    /// A UTF-8 string.
    String,
    /// A [`Symbol`].
    Symbol,
    /// An ordered list of values.
    Array,
    /// An insertion-ordered [`Mapping`].
    Hash,
    /// An [`IntRange`].
    Range,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "Nil",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::String => "String",
            Self::Symbol => "Symbol",
            Self::Array => "Array",
            Self::Hash => "Hash",
            Self::Range => "Range",
        };
        formatter.write_str(name)
    }
}

/// A dynamically typed value.
///
/// Only [`Value::Nil`] and `Value::Boolean(false)` are falsy; every other
/// value, including `0`, the empty string and the empty array, is truthy.
///
/// # Examples
///
/// ```rust
/// use enumerables::value::Value;
///
/// assert!(Value::from(0).is_truthy());
/// assert!(!Value::Nil.is_truthy());
/// assert!(!Value::from(false).is_truthy());
///
/// assert!(Value::from(1) < Value::from(2));
/// assert!(Value::from(3) > 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// A string.
    String(String),
    /// A symbol.
    Symbol(Symbol),
    /// An array of values.
    Array(Vec<Value>),
    /// An insertion-ordered mapping.
    Hash(Mapping),
    /// An integer range.
    Range(IntRange),
}

impl Value {
    /// Builds the two-element array a mapping pair is presented as.
    ///
    /// ```rust
    /// use enumerables::value::{Symbol, Value};
    ///
    /// let pair = Value::pair(Symbol::new("one"), 1);
    /// assert_eq!(pair.to_string(), "[:one, 1]");
    /// ```
    pub fn pair(key: impl Into<Self>, value: impl Into<Self>) -> Self {
        Self::Array(vec![key.into(), value.into()])
    }

    /// Returns the kind tag of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::String(_) => ValueKind::String,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::Array(_) => ValueKind::Array,
            Self::Hash(_) => ValueKind::Hash,
            Self::Range(_) => ValueKind::Range,
        }
    }

    /// Returns `false` for `nil` and `false`, `true` for everything else.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    /// Returns `true` if this is [`Value::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the integer, if this is one.
    #[inline]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the symbol, if this is one.
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns the array entries, if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the mapping, if this is a hash.
    pub const fn as_hash(&self) -> Option<&Mapping> {
        match self {
            Self::Hash(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the range, if this is one.
    pub const fn as_range(&self) -> Option<&IntRange> {
        match self {
            Self::Range(range) => Some(range),
            _ => None,
        }
    }

    // =========================================================================
    // Integer Predicates
    // =========================================================================
    //
    // Non-integers answer `false` to every predicate below.

    /// Returns `true` for integers greater than zero.
    pub fn is_positive(&self) -> bool {
        self.as_integer().is_some_and(i64::is_positive)
    }

    /// Returns `true` for integers less than zero.
    pub fn is_negative(&self) -> bool {
        self.as_integer().is_some_and(i64::is_negative)
    }

    /// Returns `true` for the integer zero.
    pub fn is_zero(&self) -> bool {
        self.as_integer() == Some(0)
    }

    /// Returns `true` for even integers.
    pub fn is_even(&self) -> bool {
        self.as_integer().is_some_and(|integer| integer % 2 == 0)
    }

    /// Returns `true` for odd integers.
    pub fn is_odd(&self) -> bool {
        self.as_integer().is_some_and(|integer| integer % 2 != 0)
    }
}

// =============================================================================
// Ordering
// =============================================================================

impl PartialOrd for Value {
    /// Values of the same comparable kind are ordered; mixed kinds are not.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Some(Ordering::Equal),
            (Self::Boolean(left), Self::Boolean(right)) if left == right => {
                Some(Ordering::Equal)
            }
            (Self::Integer(left), Self::Integer(right)) => Some(left.cmp(right)),
            (Self::String(left), Self::String(right)) => Some(left.cmp(right)),
            (Self::Symbol(left), Self::Symbol(right)) => Some(left.cmp(right)),
            (Self::Array(left), Self::Array(right)) => left.partial_cmp(right),
            _ => None,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(*other)
    }
}

impl PartialOrd<i64> for Value {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.as_integer().map(|integer| integer.cmp(other))
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::String(string) => write!(formatter, "{string:?}"),
            Self::Symbol(symbol) => write!(formatter, "{symbol}"),
            Self::Array(values) => {
                formatter.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                formatter.write_str("]")
            }
            Self::Hash(mapping) => write!(formatter, "{mapping}"),
            Self::Range(range) => write!(formatter, "{range}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Self::Integer(i64::from(integer))
    }
}

impl From<usize> for Value {
    /// Positions beyond `i64::MAX` saturate.
    fn from(position: usize) -> Self {
        Self::Integer(i64::try_from(position).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(string.to_string())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(string)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(values)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Hash(mapping)
    }
}

impl From<IntRange> for Value {
    fn from(range: IntRange) -> Self {
        Self::Range(range)
    }
}

impl From<()> for Value {
    /// Blocks run only for their side effects return `nil`.
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Nil, false)]
    #[case(Value::Boolean(false), false)]
    #[case(Value::Boolean(true), true)]
    #[case(Value::Integer(0), true)]
    #[case(Value::from(""), true)]
    #[case(Value::Array(vec![]), true)]
    #[case(Value::Hash(Mapping::new()), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn integer_predicates_reject_non_integers() {
        let string = Value::from("2");
        assert!(!string.is_even());
        assert!(!string.is_odd());
        assert!(!string.is_positive());
        assert!(!string.is_zero());
    }

    #[rstest]
    fn integer_predicates() {
        assert!(Value::from(2).is_even());
        assert!(Value::from(-3).is_odd());
        assert!(Value::from(-3).is_negative());
        assert!(Value::from(0).is_zero());
        assert!(!Value::from(0).is_positive());
    }

    #[rstest]
    fn mixed_kinds_are_unordered() {
        assert_eq!(Value::from(1).partial_cmp(&Value::from("1")), None);
        assert!(Value::from(1) < 2);
        assert!(Value::from("a") < Value::from("b"));
    }

    #[rstest]
    fn display_reads_like_a_literal() {
        let array = Value::Array(vec![
            Value::Nil,
            Value::from(true),
            Value::from("text"),
            Value::from(Symbol::new("key")),
        ]);
        assert_eq!(array.to_string(), r#"[nil, true, "text", :key]"#);
    }

    #[rstest]
    fn option_conversion_maps_none_to_nil() {
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(Value::from(Some(4)), Value::Integer(4));
    }
}
