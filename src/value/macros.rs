//! Literal macros for building sequences and mappings.

/// Builds a `Vec<Value>` from a list of expressions convertible into
/// [`Value`](crate::value::Value).
///
/// # Examples
///
/// ```rust
/// use enumerables::seq;
/// use enumerables::value::Value;
///
/// let values = seq![1, "two", false, Value::Nil];
/// assert_eq!(values.len(), 4);
/// assert_eq!(values[0], Value::Integer(1));
///
/// let empty = seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($element:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($element)),+]
    };
}

/// Builds a [`Mapping`](crate::container::Mapping) from `key => value`
/// entries, keeping their order. A repeated key keeps its first position
/// and its last value.
///
/// # Examples
///
/// ```rust
/// use enumerables::mapping;
/// use enumerables::value::{Symbol, Value};
///
/// let mapping = mapping! {
///     Symbol::new("one") => 1,
///     Symbol::new("two") => 2,
/// };
/// assert_eq!(mapping.len(), 2);
/// assert_eq!(mapping.get(&Value::from(Symbol::new("two"))), Some(&Value::Integer(2)));
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::container::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::container::Mapping::new();
        $(
            mapping.insert($crate::value::Value::from($key), $crate::value::Value::from($value));
        )+
        mapping
    }};
}
