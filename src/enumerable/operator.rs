//! Binary operators and reducers for folding.
//!
//! A fold combines the accumulator with each element through a
//! [`Reducer`]: either a block or one of the built-in [`Operator`]s.

use std::fmt;
use std::str::FromStr;

use super::Callable;
use crate::container::Element;
use crate::error::EnumerableError;
use crate::value::Value;

/// A built-in binary operator usable in place of a fold block.
///
/// | Operator   | Integers             | Strings            | Arrays        |
/// |------------|----------------------|--------------------|---------------|
/// | `Add`      | checked sum          | concatenation      | concatenation |
/// | `Subtract` | checked difference   | -                  | difference    |
/// | `Multiply` | checked product      | repetition by int  | -             |
/// | `Divide`   | floored quotient     | -                  | -             |
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::Operator;
/// use enumerables::value::Value;
///
/// let sum = Operator::Add.apply(&Value::from(2), &Value::from(3));
/// assert_eq!(sum, Ok(Value::from(5)));
///
/// let parsed: Operator = "*".parse().unwrap();
/// assert_eq!(parsed, Operator::Multiply);
/// assert_eq!(":+".parse::<Operator>(), Ok(Operator::Add));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// The operator token.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// The integer identity element, for operators that have one.
    pub const fn identity(self) -> Option<i64> {
        match self {
            Self::Add => Some(0),
            Self::Multiply => Some(1),
            Self::Subtract | Self::Divide => None,
        }
    }

    /// Combines `left` (the accumulator) with `right` (the element).
    ///
    /// # Errors
    ///
    /// - [`EnumerableError::UnsupportedOperands`] for kinds the operator does
    ///   not combine
    /// - [`EnumerableError::Overflow`] when integer arithmetic overflows or a
    ///   repeated string would exceed the allocation limit
    /// - [`EnumerableError::DivisionByZero`]
    pub fn apply(self, left: &Value, right: &Value) -> Result<Value, EnumerableError> {
        match (self, left, right) {
            (_, Value::Integer(left), Value::Integer(right)) => {
                self.apply_integers(*left, *right).map(Value::Integer)
            }
            (Self::Add, Value::String(left), Value::String(right)) => {
                Ok(Value::String(format!("{left}{right}")))
            }
            (Self::Add, Value::Array(left), Value::Array(right)) => {
                Ok(Value::Array(left.iter().chain(right).cloned().collect()))
            }
            (Self::Subtract, Value::Array(left), Value::Array(right)) => Ok(Value::Array(
                left.iter()
                    .filter(|value| !right.contains(value))
                    .cloned()
                    .collect(),
            )),
            (Self::Multiply, Value::String(left), Value::Integer(count)) if *count >= 0 => {
                let count = usize::try_from(*count).map_err(|_| self.overflow())?;
                // Allocations are capped at `isize::MAX` bytes.
                left.len()
                    .checked_mul(count)
                    .filter(|length| *length <= isize::MAX.unsigned_abs())
                    .ok_or_else(|| self.overflow())?;
                Ok(Value::String(left.repeat(count)))
            }
            _ => Err(EnumerableError::UnsupportedOperands {
                operator: self,
                left: left.kind(),
                right: right.kind(),
            }),
        }
    }

    fn apply_integers(self, left: i64, right: i64) -> Result<i64, EnumerableError> {
        match self {
            Self::Add => left.checked_add(right).ok_or_else(|| self.overflow()),
            Self::Subtract => left.checked_sub(right).ok_or_else(|| self.overflow()),
            Self::Multiply => left.checked_mul(right).ok_or_else(|| self.overflow()),
            Self::Divide => {
                if right == 0 {
                    return Err(EnumerableError::DivisionByZero);
                }
                let quotient = left.checked_div(right).ok_or_else(|| self.overflow())?;
                // Round toward negative infinity.
                if left % right != 0 && (left < 0) != (right < 0) {
                    Ok(quotient - 1)
                } else {
                    Ok(quotient)
                }
            }
        }
    }

    const fn overflow(self) -> EnumerableError {
        EnumerableError::Overflow { operator: self }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EnumerableError;

    /// Accepts `+ - * /`, optionally written as a symbol (`:+`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.strip_prefix(':').unwrap_or(token) {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            _ => Err(EnumerableError::UnknownOperator(token.to_string())),
        }
    }
}

/// How a fold combines the accumulator with the next element.
///
/// # Examples
///
/// ```rust
/// use enumerables::enumerable::{Callable, Enumerable, Operator};
/// use enumerables::value::Value;
/// use enumerables::seq;
///
/// let values = seq![1, 2, 3];
/// assert_eq!(values.my_inject(None, Operator::Add), Ok(Value::from(6)));
///
/// let greatest = Callable::binary(|best, candidate| {
///     if candidate > best { candidate.clone() } else { best.clone() }
/// });
/// assert_eq!(values.my_inject(None, greatest), Ok(Value::from(3)));
/// ```
#[derive(Debug, Clone)]
pub enum Reducer<'f> {
    /// A block; see [`Callable::call_folding`].
    Block(Callable<'f>),
    /// A built-in operator.
    Operator(Operator),
}

impl Reducer<'_> {
    /// Performs one fold step.
    ///
    /// # Errors
    ///
    /// Propagates [`Operator::apply`] failures; blocks never fail.
    pub fn step(&self, accumulator: Value, element: &Element<'_>) -> Result<Value, EnumerableError> {
        match self {
            Self::Block(block) => Ok(block.call_folding(&accumulator, element)),
            Self::Operator(operator) => operator.apply(&accumulator, &element.to_value()),
        }
    }
}

impl<'f> From<Callable<'f>> for Reducer<'f> {
    fn from(block: Callable<'f>) -> Self {
        Self::Block(block)
    }
}

impl From<Operator> for Reducer<'_> {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}
