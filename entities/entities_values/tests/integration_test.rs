//! Integration tests for entities_values
//!
//! Builds the kinds of trees the codec carries and checks the value model's
//! structural guarantees from outside the crate.

use std::collections::HashSet;

use entities_values::{BigInt, BigIntError, Sign, Value, DIGIT_MAX};
use malachite::Integer;

#[test]
fn test_nested_tree_equality() {
    let build = || {
        Value::mapping([
            ("list", Value::List(vec![Value::text("one"), Value::mapping([("two", "three")])])),
            ("none", Value::Null),
            ("pi", Value::Float(2.5)),
        ])
    };
    assert_eq!(build(), build());

    let mut changed = build();
    if let Value::Mapping(pairs) = &mut changed {
        pairs[1].1 = Value::Boolean(false);
    }
    assert_ne!(build(), changed);
}

#[test]
fn test_mapping_order_is_significant() {
    let ab = Value::mapping([("a", 1i32), ("b", 2i32)]);
    let ba = Value::mapping([("b", 2i32), ("a", 1i32)]);
    assert_ne!(ab, ba);
    assert_eq!(ab.get(&Value::text("b")), ba.get(&Value::text("b")));
}

#[test]
fn test_list_and_tuple_differ() {
    let items = vec![Value::SmallInt(1)];
    assert_ne!(Value::List(items.clone()), Value::Tuple(items));
}

#[test]
fn test_values_as_set_members() {
    let mut set = HashSet::new();
    set.insert(Value::Float(f64::NAN));
    set.insert(Value::Float(f64::NAN));
    set.insert(Value::Float(0.0));
    set.insert(Value::Float(-0.0));
    set.insert(Value::Tuple(vec![Value::text("k"), Value::Null]));
    assert_eq!(set.len(), 4);
    assert!(set.contains(&Value::Tuple(vec![Value::text("k"), Value::Null])));
}

#[test]
fn test_big_int_digit_groups_from_integer() {
    let value = Integer::from(17_179_869_184u64);
    let big = BigInt::from_integer(&value);
    assert_eq!(big.sign(), Sign::Positive);
    assert_eq!(big.digits(), &[0, 0, 16]);
    assert_eq!(big.to_i64(), Some(17_179_869_184));
    assert_eq!(big.to_string(), "17179869184");
}

#[test]
fn test_big_int_beyond_i64() {
    let value = -(Integer::from(u64::MAX) * Integer::from(u64::MAX));
    let big = BigInt::from_integer(&value);
    assert!(big.is_negative());
    assert_eq!(big.to_i64(), None);
    assert!(big.digits().iter().all(|&d| d <= DIGIT_MAX));
    assert_ne!(big.digits().last(), Some(&0));
    assert_eq!(big.to_integer(), value);
}

#[test]
fn test_big_int_rejects_non_canonical_input() {
    assert_eq!(
        BigInt::new(Sign::Positive, vec![3, 0]),
        Err(BigIntError::TrailingZero)
    );
    assert!(matches!(
        BigInt::new(Sign::Zero, vec![3]),
        Err(BigIntError::SignMismatch { count: 1, .. })
    ));
}

#[test]
fn test_int_helper_boundary() {
    assert_eq!(Value::int(i64::from(i32::MAX)), Value::SmallInt(i32::MAX));
    assert!(matches!(Value::int(i64::from(i32::MAX) + 1), Value::BigInt(_)));
    assert_eq!(Value::int(i64::from(i32::MIN) - 1).as_i64(), Some(i64::from(i32::MIN) - 1));
}
