#![cfg(feature = "serde")]

//! Integration tests for serde support in enumerables.
//!
//! These tests verify that values and containers serialize and deserialize
//! through JSON without losing order or shape.

use enumerables::prelude::*;
use rstest::rstest;

fn hash() -> Mapping {
    mapping! {
        Symbol::new("one") => 1,
        Symbol::new("two") => 1,
        Symbol::new("three") => 2,
    }
}

// =============================================================================
// Value Integration Tests
// =============================================================================

#[rstest]
#[case(Value::Nil)]
#[case(Value::from(false))]
#[case(Value::from(-42))]
#[case(Value::from("I am a string"))]
#[case(Value::from(Symbol::new("key")))]
#[case(Value::Array(seq![1, "two", Value::Nil]))]
#[case(Value::from(IntRange::exclusive(1, 10)))]
fn test_value_json_roundtrip(#[case] value: Value) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

#[rstest]
fn test_value_nested_structures() {
    let nested = Value::Array(vec![
        Value::from(hash()),
        Value::Array(seq![Value::from(IntRange::inclusive(1, 3))]),
    ]);
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

// =============================================================================
// Mapping Integration Tests
// =============================================================================

#[rstest]
fn test_mapping_json_roundtrip_keeps_order() {
    let mapping = hash();
    let json = serde_json::to_string(&mapping).unwrap();
    let restored: Mapping = serde_json::from_str(&json).unwrap();
    assert_eq!(
        restored.keys().cloned().collect::<Vec<_>>(),
        mapping.keys().cloned().collect::<Vec<_>>()
    );
    assert_eq!(mapping, restored);
}

#[rstest]
fn test_mapping_deserialization_drops_duplicate_keys() {
    let duplicated = vec![
        (Value::from(1), Value::from("first")),
        (Value::from(1), Value::from("second")),
    ];
    let json = serde_json::to_string(&duplicated).unwrap();
    let restored: Mapping = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.len(), 1);
}

// =============================================================================
// Container Integration Tests
// =============================================================================

#[rstest]
#[case(Container::from(seq![1, 2, 3]))]
#[case(Container::from(hash()))]
#[case(Container::from(1..=10))]
fn test_container_json_roundtrip(#[case] container: Container) {
    let json = serde_json::to_string(&container).unwrap();
    let restored: Container = serde_json::from_str(&json).unwrap();
    assert_eq!(container, restored);
}

#[rstest]
fn test_restored_container_enumerates_identically() {
    let container = Container::from(hash());
    let json = serde_json::to_string(&container).unwrap();
    let restored: Container = serde_json::from_str(&json).unwrap();
    assert_eq!(
        restored.my_map(Callable::identity()),
        container.my_map(Callable::identity())
    );
}

// =============================================================================
// Operator Integration Tests
// =============================================================================

#[rstest]
fn test_operator_json_roundtrip() {
    for operator in [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ] {
        let json = serde_json::to_string(&operator).unwrap();
        let restored: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(operator, restored);
    }
}
