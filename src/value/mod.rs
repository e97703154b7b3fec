//! Dynamic values stored in containers.
//!
//! - [`Value`]: the closed sum of every element type
//! - [`ValueKind`]: the kind tag of a value, used by kind patterns
//! - [`Symbol`]: a name token, typically a mapping key
//!
//! The [`seq!`](crate::seq) and [`mapping!`](crate::mapping) macros build
//! containers from literals.
//!
//! # Examples
//!
//! ```rust
//! use enumerables::value::{Value, ValueKind};
//!
//! let values = enumerables::seq![false, Value::Nil, "I am a string"];
//! let truthy = values.iter().filter(|value| value.is_truthy()).count();
//! assert_eq!(truthy, 1);
//! assert_eq!(values[2].kind(), ValueKind::String);
//! ```

mod dynamic;
mod macros;
mod symbol;

pub use dynamic::{Value, ValueKind};
pub use symbol::Symbol;
