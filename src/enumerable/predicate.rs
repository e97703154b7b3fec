//! Resolution of the test used by `my_all`, `my_any`, `my_none` and `my_count`.
//!
//! The test comes from exactly one [`PredicateSource`], decided once when
//! the operation is entered:
//!
//! 1. a [`Pattern`] (literal equality, kind membership, range membership)
//! 2. a block ([`Callable`]), whose return value is read for truthiness
//! 3. nothing, in which case the element's own truthiness is used

use super::Callable;
use crate::container::{Element, IntRange};
use crate::value::{Symbol, Value, ValueKind};

/// A non-block argument that each element is matched against.
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::{Enumerable, Pattern};
/// use enumerables::container::IntRange;
/// use enumerables::value::ValueKind;
/// use enumerables::seq;
///
/// let values = seq![1, 2, 3];
/// assert!(values.my_any(Pattern::Equals(2.into())));
/// assert!(values.my_all(Pattern::KindOf(ValueKind::Integer)));
/// assert!(values.my_all(Pattern::Within(IntRange::inclusive(1, 3))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// The element, read as a single value, equals this value.
    Equals(Value),
    /// The element is of this kind.
    KindOf(ValueKind),
    /// The element is an integer inside this range.
    Within(IntRange),
}

impl Pattern {
    /// Returns `true` if `element` matches.
    ///
    /// A mapping pair is read as `[key, value]`, so it never equals a scalar.
    pub fn matches(&self, element: &Element<'_>) -> bool {
        match self {
            Self::Equals(expected) => element.equals(expected),
            Self::KindOf(kind) => element.kind() == *kind,
            Self::Within(range) => element
                .to_value()
                .as_integer()
                .is_some_and(|integer| range.contains(integer)),
        }
    }
}

/// The resolved test of a query operation.
///
/// Most arguments convert directly: a [`Callable`] becomes a block, a
/// [`ValueKind`] a kind pattern, an [`IntRange`] a membership pattern and
/// any literal an equality pattern.
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::{Callable, Enumerable, PredicateSource};
/// use enumerables::value::{Value, ValueKind};
/// use enumerables::{mapping, seq};
///
/// assert!(seq![1, 1, 1, 1].my_all(1));
/// assert!(!seq![false, Value::Nil].my_any(PredicateSource::Absent));
/// assert!(mapping! {}.my_all(ValueKind::Hash));
/// assert_eq!(seq![1, 2, 3].my_count(Callable::unary(|n| n.is_even())), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub enum PredicateSource<'f> {
    /// No argument: the element's own truthiness.
    #[default]
    Absent,
    /// A block: the truthiness of its return value.
    Block(Callable<'f>),
    /// A pattern each element is matched against.
    Pattern(Pattern),
}

impl<'f> PredicateSource<'f> {
    /// Resolves a call that may carry both a pattern and a block.
    ///
    /// The pattern wins; a block passed alongside it is never invoked and a
    /// warning is logged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::enumerable::{Callable, Pattern, PredicateSource};
    ///
    /// let source = PredicateSource::resolve(
    ///     Some(Pattern::Equals(1.into())),
    ///     Some(Callable::unary(|_| true)),
    /// );
    /// assert!(matches!(source, PredicateSource::Pattern(_)));
    /// ```
    pub fn resolve(pattern: Option<Pattern>, block: Option<Callable<'f>>) -> Self {
        match (pattern, block) {
            (Some(pattern), Some(block)) => {
                tracing::warn!(
                    ?pattern,
                    arity = block.arity(),
                    "both a pattern and a block were given; the block is not used"
                );
                Self::Pattern(pattern)
            }
            (Some(pattern), None) => Self::Pattern(pattern),
            (None, Some(block)) => Self::Block(block),
            (None, None) => Self::Absent,
        }
    }

    /// Returns `true` if this source is [`PredicateSource::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Applies the resolved test to one element.
    pub fn test(&self, element: &Element<'_>) -> bool {
        match self {
            Self::Absent => element.is_truthy(),
            Self::Block(block) => block.test(element),
            Self::Pattern(pattern) => pattern.matches(element),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<'f> From<Callable<'f>> for PredicateSource<'f> {
    fn from(block: Callable<'f>) -> Self {
        Self::Block(block)
    }
}

impl<'f> From<Option<Callable<'f>>> for PredicateSource<'f> {
    fn from(block: Option<Callable<'f>>) -> Self {
        Self::resolve(None, block)
    }
}

impl From<Pattern> for PredicateSource<'_> {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<ValueKind> for PredicateSource<'_> {
    fn from(kind: ValueKind) -> Self {
        Self::Pattern(Pattern::KindOf(kind))
    }
}

impl From<IntRange> for PredicateSource<'_> {
    fn from(range: IntRange) -> Self {
        Self::Pattern(Pattern::Within(range))
    }
}

impl From<Value> for PredicateSource<'_> {
    fn from(value: Value) -> Self {
        Self::Pattern(Pattern::Equals(value))
    }
}

macro_rules! literal_predicate_source {
    ($($literal:ty),+ $(,)?) => {
        $(
            impl From<$literal> for PredicateSource<'_> {
                fn from(literal: $literal) -> Self {
                    Self::Pattern(Pattern::Equals(Value::from(literal)))
                }
            }
        )+
    };
}

literal_predicate_source!(bool, i32, i64, &str, String, Symbol);
