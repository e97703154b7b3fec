//! Error types for enumeration operations.
//!
//! Only folding can fail: an empty receiver with nothing to seed the
//! accumulator, or a binary [`Operator`](crate::enumerable::Operator) applied
//! to values it cannot combine.

use thiserror::Error;

use crate::enumerable::Operator;
use crate::value::ValueKind;

/// Errors raised by [`my_inject`](crate::enumerable::Enumerable::my_inject)
/// and the operator machinery behind it.
///
/// # Examples
///
/// ```rust
/// use enumerables::error::EnumerableError;
///
/// let error = EnumerableError::EmptyWithoutSeed;
/// assert_eq!(
///     error.to_string(),
///     "cannot fold an empty container without an initial value"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnumerableError {
    /// The receiver is empty and no initial value was supplied.
    #[error("cannot fold an empty container without an initial value")]
    EmptyWithoutSeed,

    /// The operator does not accept this combination of value kinds.
    #[error("operator `{operator}` is not defined for {left} and {right}")]
    UnsupportedOperands {
        /// The operator that was applied.
        operator: Operator,
        /// Kind of the accumulator.
        left: ValueKind,
        /// Kind of the element.
        right: ValueKind,
    },

    /// Checked integer arithmetic overflowed.
    #[error("integer overflow while applying `{operator}`")]
    Overflow {
        /// The operator that overflowed.
        operator: Operator,
    },

    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operator token that does not name a supported operator.
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unsupported_operands_display() {
        let error = EnumerableError::UnsupportedOperands {
            operator: Operator::Multiply,
            left: ValueKind::String,
            right: ValueKind::Symbol,
        };
        assert_eq!(
            error.to_string(),
            "operator `*` is not defined for String and Symbol"
        );
    }

    #[rstest]
    fn overflow_display() {
        let error = EnumerableError::Overflow {
            operator: Operator::Add,
        };
        assert_eq!(error.to_string(), "integer overflow while applying `+`");
    }

    #[rstest]
    fn error_trait_is_implemented() {
        let error = EnumerableError::UnknownOperator("%".to_string());
        let _: &dyn std::error::Error = &error;
        assert_eq!(error.to_string(), "unknown operator `%`");
    }
}
