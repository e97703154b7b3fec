//! Blocks and reusable function values passed to enumeration operations.
//!
//! A [`Callable`] records how many parameters it declares, because the
//! parameter count decides how an element is handed over: a one-parameter
//! callable sees the whole element (a mapping pair as `[key, value]`), a
//! two-parameter callable sees the element split into two arguments.

use std::fmt;
use std::rc::Rc;

use crate::container::Element;
use crate::value::Value;

type UnaryFunction<'f> = dyn Fn(&Value) -> Value + 'f;
type BinaryFunction<'f> = dyn Fn(&Value, &Value) -> Value + 'f;

/// A block or function value with one or two declared parameters.
///
/// Cloning is cheap: the function is shared, so a single callable can be
/// passed to several operations.
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::{Callable, Enumerable};
/// use enumerables::{mapping, seq};
/// use enumerables::value::Symbol;
///
/// // One parameter: receives the whole element.
/// let even = Callable::unary(|number| number.is_even());
/// assert!(!seq![1, 2, 3].my_all(even));
///
/// // Two parameters: a mapping element is split into key and value.
/// let positive_value = Callable::binary(|_key, value| value.is_positive());
/// let hash = mapping! { Symbol::new("one") => 1, Symbol::new("two") => 2 };
/// assert!(hash.my_all(positive_value));
/// ```
#[derive(Clone)]
pub enum Callable<'f> {
    /// Declares one parameter.
    Unary(Rc<UnaryFunction<'f>>),
    /// Declares two parameters.
    Binary(Rc<BinaryFunction<'f>>),
}

impl<'f> Callable<'f> {
    /// Wraps a one-parameter function.
    pub fn unary<F, R>(function: F) -> Self
    where
        F: Fn(&Value) -> R + 'f,
        R: Into<Value>,
    {
        Self::Unary(Rc::new(move |value| function(value).into()))
    }

    /// Wraps a two-parameter function.
    pub fn binary<F, R>(function: F) -> Self
    where
        F: Fn(&Value, &Value) -> R + 'f,
        R: Into<Value>,
    {
        Self::Binary(Rc::new(move |left, right| function(left, right).into()))
    }

    /// A one-parameter callable that returns its argument.
    pub fn identity() -> Self {
        Self::unary(Value::clone)
    }

    /// Number of declared parameters.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Invokes the callable on one traversal element.
    ///
    /// See [`Element::split`] for how two parameters are filled.
    pub fn call(&self, element: &Element<'_>) -> Value {
        match self {
            Self::Unary(function) => function(&element.to_value()),
            Self::Binary(function) => {
                let (first, second) = element.split();
                function(&first, &second)
            }
        }
    }

    /// Invokes the callable with an element and its zero-based position.
    ///
    /// A one-parameter callable ignores the position.
    pub fn call_indexed(&self, element: &Element<'_>, index: usize) -> Value {
        match self {
            Self::Unary(function) => function(&element.to_value()),
            Self::Binary(function) => function(&element.to_value(), &Value::from(index)),
        }
    }

    /// Invokes the callable as one fold step.
    ///
    /// A two-parameter callable receives the accumulator and the element;
    /// a one-parameter callable receives only the accumulator.
    pub fn call_folding(&self, accumulator: &Value, element: &Element<'_>) -> Value {
        match self {
            Self::Unary(function) => function(accumulator),
            Self::Binary(function) => function(accumulator, &element.to_value()),
        }
    }

    /// Truthiness of [`Callable::call`].
    pub fn test(&self, element: &Element<'_>) -> bool {
        self.call(element).is_truthy()
    }
}

impl fmt::Debug for Callable<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(_) => formatter.write_str("Callable::Unary(..)"),
            Self::Binary(_) => formatter.write_str("Callable::Binary(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;
    use rstest::rstest;
    use std::borrow::Cow;

    #[rstest]
    fn unary_receives_pair_as_array() {
        let key = Value::from(Symbol::new("one"));
        let value = Value::from(1);
        let result = Callable::identity().call(&Element::Pair(&key, &value));
        assert_eq!(result, Value::pair(Symbol::new("one"), 1));
    }

    #[rstest]
    fn binary_receives_key_and_value() {
        let key = Value::from(Symbol::new("one"));
        let value = Value::from(1);
        let second = Callable::binary(|_key, value| value.clone());
        assert_eq!(second.call(&Element::Pair(&key, &value)), Value::from(1));
    }

    #[rstest]
    fn binary_on_scalar_item_gets_nil_second() {
        let element = Element::Item(Cow::Owned(Value::from(5)));
        let second_is_nil = Callable::binary(|_, second| second.is_nil());
        assert!(second_is_nil.test(&element));
    }

    #[rstest]
    fn call_indexed_passes_position_to_binary() {
        let element = Element::Item(Cow::Owned(Value::from("a")));
        let index_of = Callable::binary(|_, index| index.clone());
        assert_eq!(index_of.call_indexed(&element, 3), Value::from(3));
        assert_eq!(Callable::identity().call_indexed(&element, 3), Value::from("a"));
    }

    #[rstest]
    fn call_folding_unary_sees_accumulator_only() {
        let element = Element::Item(Cow::Owned(Value::from(9)));
        let accumulator = Value::from(1);
        assert_eq!(Callable::identity().call_folding(&accumulator, &element), Value::from(1));
    }

    #[rstest]
    fn arity_and_debug() {
        let unary = Callable::identity();
        let binary = Callable::binary(|left, _| left.clone());
        assert_eq!(unary.arity(), 1);
        assert_eq!(binary.arity(), 2);
        assert_eq!(format!("{binary:?}"), "Callable::Binary(..)");
    }
}
