//! Results of operations that defer when no block is given.

use super::Enumerator;

/// Either a deferred traversal or a finished result.
///
/// `my_each`, `my_each_with_index`, `my_select` and `my_map` return
/// [`Outcome::Lazy`] when called without a block and [`Outcome::Ready`]
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::{Callable, Enumerable, Outcome};
/// use enumerables::seq;
///
/// let values = seq![1, 2, 3];
/// assert!(values.my_map(None).is_enumerator());
///
/// let doubled = values.my_map(Callable::unary(|n| n.as_integer().map(|n| n * 2)));
/// assert_eq!(doubled, Outcome::Ready(seq![2, 4, 6]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// No block was given; the pending traversal.
    Lazy(Enumerator),
    /// The operation ran to completion.
    Ready(T),
}

impl<T> Outcome<T> {
    /// Returns `true` if the operation deferred to an enumerator.
    #[inline]
    pub const fn is_enumerator(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Returns `true` if the operation completed.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Converts into the finished result, if any.
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Lazy(_) => None,
        }
    }

    /// Returns a reference to the finished result, if any.
    pub const fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Lazy(_) => None,
        }
    }

    /// Converts into the enumerator, if the operation deferred.
    pub fn enumerator(self) -> Option<Enumerator> {
        match self {
            Self::Lazy(enumerator) => Some(enumerator),
            Self::Ready(_) => None,
        }
    }

    /// Maps the finished result, leaving an enumerator untouched.
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Lazy(enumerator) => Outcome::Lazy(enumerator),
            Self::Ready(value) => Outcome::Ready(function(value)),
        }
    }
}
