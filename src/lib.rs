//! # enumerables
//!
//! Uniform traversal, query, transformation and folding over sequences,
//! mappings and integer ranges.
//!
//! ## Overview
//!
//! Every container shape is normalized into one ordered stream of elements,
//! and every operation is written once against that stream. It includes:
//!
//! - **Values**: [`Value`](value::Value), a dynamically typed element, and
//!   the [`seq!`] and [`mapping!`] literal macros
//! - **Containers**: sequences, insertion-ordered [`Mapping`](container::Mapping)s
//!   and [`IntRange`](container::IntRange)s
//! - **Traversal**: the [`Foldable`](traversal::Foldable) element stream
//! - **Enumeration**: `my_each`, `my_each_with_index`, `my_select`,
//!   `my_all`, `my_any`, `my_none`, `my_count`, `my_map` and `my_inject`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for values and containers
//!
//! ## Example
//!
//! ```rust
//! use enumerables::prelude::*;
//!
//! let hash = mapping! {
//!     Symbol::new("one") => 1,
//!     Symbol::new("two") => 1,
//!     Symbol::new("three") => 2,
//! };
//!
//! assert_eq!(hash.my_count(PredicateSource::Absent), 3);
//! assert!(!hash.my_any(1));
//! assert_eq!(
//!     hash.my_inject(None, Callable::identity()),
//!     Ok(Value::pair(Symbol::new("one"), 1))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use enumerables::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::enumerable::*;
    pub use crate::error::*;
    pub use crate::traversal::*;
    pub use crate::value::*;
    pub use crate::{mapping, seq};
}

pub mod container;
pub mod enumerable;
pub mod error;
pub mod traversal;
pub mod value;
