//! Enumeration operations over sequences, mappings and ranges.
//!
//! This module provides:
//!
//! - [`Enumerable`]: `my_each`, `my_each_with_index`, `my_select`,
//!   `my_all`, `my_any`, `my_none`, `my_count`, `my_map` and `my_inject`
//! - [`Callable`]: blocks with one or two declared parameters
//! - [`PredicateSource`] and [`Pattern`]: the test used by query operations
//! - [`Operator`] and [`Reducer`]: how `my_inject` combines elements
//! - [`Enumerator`] and [`Outcome`]: deferred traversals when no block is given
//! - [`multiply_els`]: the product of a sequence
//!
//! # Examples
//!
//! ```rust
//! use enumerables::enumerable::{multiply_els, Callable, Enumerable, Operator};
//! use enumerables::container::IntRange;
//! use enumerables::value::Value;
//! use enumerables::seq;
//!
//! let range = IntRange::inclusive(1, 10);
//! assert_eq!(range.my_inject(None, Operator::Add), Ok(Value::from(55)));
//! assert!(range.my_any(Callable::unary(|n| *n > 9)));
//! assert_eq!(multiply_els(&seq![2, 4, 5]), Ok(Value::from(40)));
//! ```

mod callable;
mod enumerator;
mod operations;
mod operator;
mod outcome;
mod predicate;

pub use callable::Callable;
pub use enumerator::{Enumerator, PendingOperation};
pub use operations::{Enumerable, multiply_els};
pub use operator::{Operator, Reducer};
pub use outcome::Outcome;
pub use predicate::{Pattern, PredicateSource};

static_assertions::assert_impl_all!(Enumerator: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Callable<'static>: Send, Sync);
