//! Interned-style name tokens.
//!
//! A [`Symbol`] is a lightweight name used mostly as a mapping key. It is
//! distinct from a string: `Symbol::new("one")` never equals the string
//! `"one"`.

use std::fmt;

/// A name token, displayed with a leading colon.
///
/// # Examples
///
/// ```rust
/// use enumerables::value::Symbol;
///
/// let symbol = Symbol::new("one");
/// assert_eq!(symbol.name(), "one");
/// assert_eq!(symbol.to_string(), ":one");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol with the given name.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name without the leading colon.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, ":{}", self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn symbol_display_has_colon() {
        assert_eq!(format!("{}", Symbol::new("three")), ":three");
        assert_eq!(format!("{:?}", Symbol::new("three")), ":three");
    }

    #[rstest]
    fn symbol_ordering_follows_name() {
        assert!(Symbol::new("a") < Symbol::new("b"));
    }
}
