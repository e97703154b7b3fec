//! Enumerable integer intervals.

use std::fmt;
use std::ops::{Range, RangeInclusive};

/// A contiguous interval of integers, inclusive or exclusive of its end.
///
/// Members are produced in ascending order. A range whose end precedes its
/// start is empty.
///
/// # Examples
///
/// ```rust
/// use enumerables::container::IntRange;
///
/// let inclusive = IntRange::inclusive(1, 10);
/// assert_eq!(inclusive.len(), 10);
/// assert!(inclusive.contains(10));
///
/// let exclusive = IntRange::exclusive(1, 10);
/// assert_eq!(exclusive.len(), 9);
/// assert!(!exclusive.contains(10));
///
/// assert!(IntRange::inclusive(5, 1).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRange {
    start: i64,
    end: i64,
    exclusive: bool,
}

impl IntRange {
    /// Creates `start..=end`.
    #[inline]
    pub const fn inclusive(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            exclusive: false,
        }
    }

    /// Creates `start..end`.
    #[inline]
    pub const fn exclusive(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            exclusive: true,
        }
    }

    /// Returns the first bound.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Returns the second bound, which is not a member when exclusive.
    #[inline]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Returns `true` if the end bound is excluded.
    #[inline]
    pub const fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Returns the greatest member, or `None` when empty.
    pub const fn last(&self) -> Option<i64> {
        if self.exclusive {
            if self.end > self.start {
                Some(self.end - 1)
            } else {
                None
            }
        } else if self.end >= self.start {
            Some(self.end)
        } else {
            None
        }
    }

    /// Returns `true` if the range has no members.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.last().is_none()
    }

    /// Returns the number of members, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.last().map_or(0, |last| {
            usize::try_from(last.abs_diff(self.start)).map_or(usize::MAX, |span| span.saturating_add(1))
        })
    }

    /// Returns `true` if `value` is a member.
    pub const fn contains(&self, value: i64) -> bool {
        match self.last() {
            Some(last) => self.start <= value && value <= last,
            None => false,
        }
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> RangeInclusive<i64> {
        match self.last() {
            Some(last) => self.start..=last,
            #[allow(clippy::reversed_empty_ranges)]
            None => 1..=0,
        }
    }
}

impl From<RangeInclusive<i64>> for IntRange {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::inclusive(*range.start(), *range.end())
    }
}

impl From<Range<i64>> for IntRange {
    fn from(range: Range<i64>) -> Self {
        Self::exclusive(range.start, range.end)
    }
}

impl IntoIterator for IntRange {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = if self.exclusive { "..." } else { ".." };
        write!(formatter, "{}{dots}{}", self.start, self.end)
    }
}
