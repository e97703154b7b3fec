//! The enumeration operations, uniform across every container shape.

use super::{Callable, Enumerator, Outcome, PendingOperation, PredicateSource, Reducer};
use crate::container::{Container, IntRange, Mapping, Shape};
use crate::error::EnumerableError;
use crate::traversal::Foldable;
use crate::value::Value;

/// Traversal, query, transform and fold operations.
///
/// Implemented for [`Container`], sequences (`[Value]`, and so `Vec<Value>`),
/// [`Mapping`], [`IntRange`] and [`Enumerator`]. Every operation visits
/// elements in the receiver's natural order and leaves the receiver
/// untouched.
///
/// # Required Methods
///
/// - `shape`: The shape family used to rebuild `my_select` results
/// - `snapshot`: An owned copy handed to enumerators
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::{Callable, Enumerable, Operator, PredicateSource};
/// use enumerables::container::{Container, IntRange};
/// use enumerables::value::{Symbol, Value};
/// use enumerables::{mapping, seq};
///
/// let array = seq![1, 2, 3];
/// let hash = mapping! {
///     Symbol::new("one") => 1,
///     Symbol::new("two") => 1,
///     Symbol::new("three") => 2,
/// };
/// let range = IntRange::inclusive(1, 10);
///
/// assert_eq!(array.my_count(PredicateSource::Absent), 3);
/// assert_eq!(hash.my_count(PredicateSource::Absent), 3);
/// assert_eq!(range.my_count(PredicateSource::Absent), 10);
///
/// let below_two = Callable::unary(|n| *n < 2);
/// assert_eq!(array.my_select(below_two).ready(), Some(Container::Sequence(seq![1])));
///
/// let doubled = hash.my_map(Callable::binary(|_key, n| n.as_integer().map(|n| n * 2)));
/// assert_eq!(doubled.ready(), Some(seq![2, 2, 4]));
///
/// assert_eq!(range.my_inject(Value::from(2), Operator::Add), Ok(Value::from(57)));
/// ```
pub trait Enumerable: Foldable {
    /// Returns the shape family of the receiver.
    fn shape(&self) -> Shape;

    /// Returns an owned copy of the receiver as a [`Container`].
    fn snapshot(&self) -> Container;

    /// Visits every element for its side effects.
    ///
    /// Without a block, returns an enumerator and visits nothing. With a
    /// block, invokes it once per element, discards its results and returns
    /// the receiver itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::enumerable::{Callable, Enumerable, Outcome};
    /// use std::cell::RefCell;
    ///
    /// let array = enumerables::seq![1, 2, 3];
    /// assert!(array.my_each(None).is_enumerator());
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let outcome = array.my_each(Callable::unary(|n| seen.borrow_mut().push(n.clone())));
    /// assert_eq!(outcome, Outcome::Ready(&array[..]));
    /// assert_eq!(seen.into_inner(), array);
    /// ```
    fn my_each<'f>(&self, block: impl Into<Option<Callable<'f>>>) -> Outcome<&Self> {
        match block.into() {
            Some(block) => {
                each_in(self, &block);
                Outcome::Ready(self)
            }
            None => Outcome::Lazy(self.enumerator(PendingOperation::Each)),
        }
    }

    /// Like [`Enumerable::my_each`], with the zero-based position passed as
    /// the second argument of a two-parameter block.
    ///
    /// The position counts elements in enumeration order; it is never a
    /// mapping key.
    fn my_each_with_index<'f>(&self, block: impl Into<Option<Callable<'f>>>) -> Outcome<&Self> {
        match block.into() {
            Some(block) => {
                each_with_index_in(self, &block);
                Outcome::Ready(self)
            }
            None => Outcome::Lazy(self.enumerator(PendingOperation::EachWithIndex)),
        }
    }

    /// Keeps the elements for which the block is truthy.
    ///
    /// Sequences and ranges produce a sequence; mappings produce a mapping
    /// with the kept pairs in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::enumerable::{Callable, Enumerable};
    /// use enumerables::container::Container;
    /// use enumerables::value::Symbol;
    /// use enumerables::mapping;
    ///
    /// let hash = mapping! {
    ///     Symbol::new("one") => 1,
    ///     Symbol::new("two") => 1,
    ///     Symbol::new("three") => 2,
    /// };
    /// let selected = hash.my_select(Callable::binary(|_key, n| *n < 2)).ready();
    /// assert_eq!(
    ///     selected,
    ///     Some(Container::Mapping(mapping! { Symbol::new("one") => 1, Symbol::new("two") => 1 }))
    /// );
    /// ```
    fn my_select<'f>(&self, block: impl Into<Option<Callable<'f>>>) -> Outcome<Container> {
        match block.into() {
            Some(block) => Outcome::Ready(select_in(self, self.shape(), &block)),
            None => Outcome::Lazy(self.enumerator(PendingOperation::Select)),
        }
    }

    /// Returns `true` if every element passes the test; `true` when empty.
    ///
    /// Stops at the first failing element.
    fn my_all<'f>(&self, source: impl Into<PredicateSource<'f>>) -> bool {
        let source = source.into();
        self.for_all(|element| source.test(element))
    }

    /// Returns `true` if at least one element passes the test; `false` when
    /// empty.
    ///
    /// Stops at the first passing element.
    fn my_any<'f>(&self, source: impl Into<PredicateSource<'f>>) -> bool {
        let source = source.into();
        self.exists(|element| source.test(element))
    }

    /// Returns `true` if no element passes the test; `true` when empty.
    ///
    /// Stops at the first passing element.
    fn my_none<'f>(&self, source: impl Into<PredicateSource<'f>>) -> bool {
        let source = source.into();
        self.for_all(|element| !source.test(element))
    }

    /// Counts the elements passing the test.
    ///
    /// Without a test, counts every element: the sequence length, the pair
    /// count or the range cardinality. Counts saturate at `usize::MAX`, so
    /// `i64::MIN..=i64::MAX` (2^64 members) reports `usize::MAX`.
    fn my_count<'f>(&self, source: impl Into<PredicateSource<'f>>) -> usize {
        match source.into() {
            PredicateSource::Absent => self.length(),
            source => self.elements().filter(|element| source.test(element)).count(),
        }
    }

    /// Transforms every element, always producing a sequence.
    ///
    /// A mapping yields a flat sequence of block results, not a mapping.
    fn my_map<'f>(&self, block: impl Into<Option<Callable<'f>>>) -> Outcome<Vec<Value>> {
        match block.into() {
            Some(block) => Outcome::Ready(map_in(self, &block)),
            None => Outcome::Lazy(self.enumerator(PendingOperation::Map)),
        }
    }

    /// Left fold over the elements.
    ///
    /// Without an initial value the first element (a mapping pair as
    /// `[key, value]`) seeds the accumulator and folding continues over the
    /// rest. A two-parameter block receives `(accumulator, element)`; a
    /// one-parameter block receives only the accumulator and its result
    /// replaces it, so an identity block returns the seed.
    ///
    /// # Errors
    ///
    /// - [`EnumerableError::EmptyWithoutSeed`] for an empty receiver without
    ///   an initial value
    /// - any [`Operator::apply`](super::Operator::apply) failure
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::enumerable::{Callable, Enumerable, Operator};
    /// use enumerables::error::EnumerableError;
    /// use enumerables::value::Value;
    /// use enumerables::seq;
    ///
    /// let array = seq![1, 2, 3];
    /// assert_eq!(array.my_inject(None, Operator::Multiply), Ok(Value::from(6)));
    /// assert_eq!(array.my_inject(Value::from(2), Operator::Multiply), Ok(Value::from(12)));
    /// assert_eq!(array.my_inject(None, Callable::identity()), Ok(Value::from(1)));
    ///
    /// let empty = seq![];
    /// assert_eq!(empty.my_inject(None, Operator::Add), Err(EnumerableError::EmptyWithoutSeed));
    /// ```
    fn my_inject<'f>(
        &self,
        initial: impl Into<Option<Value>>,
        reducer: impl Into<Reducer<'f>>,
    ) -> Result<Value, EnumerableError> {
        let reducer = reducer.into();
        let folded = match initial.into() {
            Some(initial) => self.try_fold_left(initial, |accumulator, element| {
                reducer.step(accumulator, &element)
            }),
            None => {
                let mut elements = self.elements();
                let seed = elements
                    .next()
                    .ok_or(EnumerableError::EmptyWithoutSeed)
                    .inspect_err(|error| tracing::debug!(%error, "fold has nothing to seed from"))?
                    .into_value();
                tracing::debug!(%seed, "fold seeded from the first element");
                elements.try_fold(seed, |accumulator, element| reducer.step(accumulator, &element))
            }
        };
        folded.inspect_err(|error| tracing::debug!(%error, "fold failed"))
    }

    /// Creates an enumerator standing in for `operation` on this receiver.
    fn enumerator(&self, operation: PendingOperation) -> Enumerator {
        Enumerator::new(self.snapshot(), operation)
    }
}

/// Folds a sequence with multiplication; an empty sequence yields `1`.
///
/// # Errors
///
/// Fails like [`Operator::Multiply`](super::Operator::Multiply) on overflow
/// or non-integer elements.
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::multiply_els;
/// use enumerables::value::Value;
/// use enumerables::seq;
///
/// assert_eq!(multiply_els(&seq![1, 2, 3]), Ok(Value::from(6)));
/// assert_eq!(multiply_els(&seq![]), Ok(Value::from(1)));
/// ```
pub fn multiply_els(sequence: &[Value]) -> Result<Value, EnumerableError> {
    let identity = super::Operator::Multiply.identity().map(Value::Integer);
    sequence.my_inject(identity, super::Operator::Multiply)
}

// =============================================================================
// Traversal Loops
// =============================================================================

pub(super) fn each_in<T: Foldable + ?Sized>(source: &T, block: &Callable<'_>) {
    for element in source.elements() {
        block.call(&element);
    }
}

pub(super) fn each_with_index_in<T: Foldable + ?Sized>(source: &T, block: &Callable<'_>) {
    for (index, element) in source.elements().enumerate() {
        block.call_indexed(&element, index);
    }
}

pub(super) fn select_in<T: Foldable + ?Sized>(
    source: &T,
    shape: Shape,
    block: &Callable<'_>,
) -> Container {
    shape.rebuild(source.elements().filter(|element| block.test(element)))
}

pub(super) fn map_in<T: Foldable + ?Sized>(source: &T, block: &Callable<'_>) -> Vec<Value> {
    source.elements().map(|element| block.call(&element)).collect()
}

// =============================================================================
// Implementations
// =============================================================================

impl Enumerable for [Value] {
    fn shape(&self) -> Shape {
        Shape::Sequence
    }

    fn snapshot(&self) -> Container {
        Container::Sequence(self.to_vec())
    }
}

impl Enumerable for Mapping {
    fn shape(&self) -> Shape {
        Shape::Mapping
    }

    fn snapshot(&self) -> Container {
        Container::Mapping(self.clone())
    }
}

impl Enumerable for IntRange {
    fn shape(&self) -> Shape {
        Shape::Range
    }

    fn snapshot(&self) -> Container {
        Container::Range(*self)
    }
}

impl Enumerable for Container {
    fn shape(&self) -> Shape {
        Container::shape(self)
    }

    fn snapshot(&self) -> Container {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerable::Operator;
    use crate::value::Symbol;
    use crate::{mapping, seq};
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    fn hash() -> Mapping {
        mapping! {
            Symbol::new("one") => 1,
            Symbol::new("two") => 1,
            Symbol::new("three") => 2,
        }
    }

    #[rstest]
    fn each_visits_in_order_once() {
        let seen = RefCell::new(Vec::new());
        let range = IntRange::inclusive(1, 4);
        range.my_each(Callable::unary(|n| seen.borrow_mut().push(n.clone())));
        assert_eq!(seen.into_inner(), seq![1, 2, 3, 4]);
    }

    #[rstest]
    fn each_without_block_defers_over_a_snapshot() {
        let source = hash();
        let enumerator = source.my_each(None).enumerator();
        assert_eq!(
            enumerator.map(|enumerator| enumerator.source().clone()),
            Some(Container::Mapping(source))
        );
    }

    #[rstest]
    fn each_with_index_counts_positions_not_keys() {
        let positions = RefCell::new(Vec::new());
        hash().my_each_with_index(Callable::binary(|_, index| {
            positions.borrow_mut().push(index.clone());
        }));
        assert_eq!(positions.into_inner(), seq![0, 1, 2]);
    }

    #[rstest]
    fn select_on_range_yields_sequence() {
        let range = IntRange::inclusive(1, 10);
        let selected = range.my_select(Callable::unary(|n| *n < 5)).ready();
        assert_eq!(selected, Some(Container::Sequence(seq![1, 2, 3, 4])));
    }

    #[rstest]
    fn none_is_independent_of_any() {
        let array = seq![1, 2, 3];
        let visits = Cell::new(0);
        let zero = Callable::unary(|n| {
            visits.set(visits.get() + 1);
            n.is_zero()
        });
        assert!(array.my_none(zero));
        assert_eq!(visits.get(), 3);
    }

    #[rstest]
    fn count_with_pattern_on_mapping_is_zero_for_scalars() {
        assert_eq!(hash().my_count(1), 0);
        assert_eq!(hash().my_count(Value::pair(Symbol::new("two"), 1)), 1);
    }

    #[rstest]
    fn count_of_full_range_saturates() {
        let full = IntRange::inclusive(i64::MIN, i64::MAX);
        assert_eq!(full.my_count(PredicateSource::Absent), usize::MAX);
        assert_eq!(IntRange::inclusive(i64::MIN, -1).my_count(PredicateSource::Absent), 1 << 63);
    }

    #[rstest]
    fn map_over_mapping_with_unary_yields_pairs() {
        let mapped = hash().my_map(Callable::identity()).ready();
        assert_eq!(
            mapped,
            Some(vec![
                Value::pair(Symbol::new("one"), 1),
                Value::pair(Symbol::new("two"), 1),
                Value::pair(Symbol::new("three"), 2),
            ])
        );
    }

    #[rstest]
    fn inject_unary_on_mapping_returns_first_pair() {
        assert_eq!(
            hash().my_inject(None, Callable::identity()),
            Ok(Value::pair(Symbol::new("one"), 1))
        );
    }

    #[rstest]
    fn inject_empty_with_initial_returns_initial() {
        let empty = IntRange::inclusive(1, 0);
        assert_eq!(empty.my_inject(Value::from(7), Operator::Add), Ok(Value::from(7)));
    }

    #[rstest]
    fn inject_propagates_operator_errors() {
        let array = seq![1, "two"];
        assert!(matches!(
            array.my_inject(None, Operator::Add),
            Err(EnumerableError::UnsupportedOperands { .. })
        ));
    }

    #[rstest]
    fn container_and_bare_shapes_agree() {
        let container = Container::from(hash());
        let even = || Callable::binary(|_, n| n.is_even());
        assert_eq!(container.my_count(even()), hash().my_count(even()));
        assert_eq!(container.my_select(even()), hash().my_select(even()));
    }

    #[rstest]
    fn multiply_els_products() {
        assert_eq!(multiply_els(&seq![1, 2, 3]), Ok(Value::from(6)));
        assert_eq!(multiply_els(&seq![]), Ok(Value::from(1)));
        assert_eq!(
            multiply_els(&seq![i64::MAX, 2]),
            Err(EnumerableError::Overflow {
                operator: Operator::Multiply
            })
        );
    }
}
