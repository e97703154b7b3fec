//! The iteration contract shared by every container shape.
//!
//! - [`Foldable`]: ordered element stream plus folds and quantifiers
//!
//! Everything in [`enumerable`](crate::enumerable) is written against this
//! trait, so sequences, mappings, ranges and [`Container`](crate::container::Container)
//! all traverse the same way.

mod foldable;

pub use foldable::Foldable;
