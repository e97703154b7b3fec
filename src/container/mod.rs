//! Container shapes and their normalization into one element stream.
//!
//! Three shapes receive enumeration operations:
//!
//! - [`Container::Sequence`]: an ordered list of [`Value`](crate::value::Value)s
//! - [`Container::Mapping`]: a [`Mapping`] of unique keys, insertion ordered
//! - [`Container::Range`]: an [`IntRange`] of ascending integers
//!
//! Every shape is normalized into [`Elements`], an ordered iterator of
//! [`Element`]s: a sequence value or range member is an [`Element::Item`],
//! a mapping entry is an [`Element::Pair`]. [`Shape::rebuild`] is the
//! reconstruction strategy for operations that return a container.
//!
//! # Examples
//!
//! ```rust
//! use enumerables::container::{Container, Element};
//! use enumerables::traversal::Foldable;
//! use enumerables::value::{Symbol, Value};
//! use enumerables::mapping;
//!
//! let container = Container::from(mapping! { Symbol::new("one") => 1 });
//! let elements: Vec<Value> = container.elements().map(Element::into_value).collect();
//! assert_eq!(elements, vec![Value::pair(Symbol::new("one"), 1)]);
//! ```

mod adapter;
mod element;
mod mapping;
mod range;

pub use adapter::{Container, Shape};
pub use element::{Element, Elements};
pub use mapping::Mapping;
pub use range::IntRange;

static_assertions::assert_impl_all!(Container: Send, Sync, Clone);
static_assertions::assert_impl_all!(Elements<'static>: Send, Sync, Clone);
