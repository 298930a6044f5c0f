//! Sample Values
//!
//! Named value trees. `sample_values` covers every variant and the interesting
//! boundaries of each; `fixture_samples` is the fixed set written out as fixture
//! files for other readers of the format.

use entities_values::{BigInt, Value};
use malachite::Integer;

/// A named value
pub type Sample = (&'static str, Value);

/// Coverage set: every tag, boundary lengths, signed and zero big integers,
/// non-finite floats, empty and nested containers
#[allow(clippy::approx_constant)]
pub fn sample_values() -> Vec<Sample> {
    let widest_long = (Integer::from(1u32) << 1905u64) - Integer::from(1u32);

    vec![
        ("null", Value::Null),
        ("false", Value::Boolean(false)),
        ("true", Value::Boolean(true)),
        ("ellipsis", Value::EllipsisMarker),
        ("stopiter", Value::StopMarker),
        ("int-zero", Value::SmallInt(0)),
        ("int-negative", Value::SmallInt(-42)),
        ("int-min", Value::SmallInt(i32::MIN)),
        ("int-max", Value::SmallInt(i32::MAX)),
        ("long-zero", Value::BigInt(BigInt::zero())),
        ("long-one-group", Value::BigInt(BigInt::from_i64(32767))),
        ("long-two-groups", Value::BigInt(BigInt::from_i64(32768))),
        ("long-two-pow-35", Value::BigInt(BigInt::from_i64(1 << 35))),
        ("long-negative", Value::BigInt(BigInt::from_i64(-(1 << 40)))),
        ("long-i64-min", Value::BigInt(BigInt::from_i64(i64::MIN))),
        ("long-widest", Value::BigInt(BigInt::from_integer(&widest_long))),
        ("float-pi", Value::Float(3.14)),
        ("float-nan", Value::Float(f64::NAN)),
        ("float-inf", Value::Float(f64::INFINITY)),
        ("float-neg-inf", Value::Float(f64::NEG_INFINITY)),
        ("float-neg-zero", Value::Float(-0.0)),
        ("complex", Value::Complex { real: 3.14, imag: -2.0 }),
        ("complex-nan", Value::Complex { real: f64::NAN, imag: -0.0 }),
        ("bytes-empty", Value::bytes(Vec::new())),
        ("bytes-binary", Value::bytes((0u8..=255).collect::<Vec<u8>>())),
        ("text-empty", Value::text("")),
        ("text-unicode", Value::text("foo\u{E0B0}bar")),
        ("text-big", Value::text(&"foobar".repeat(1024))),
        ("list-empty", Value::List(vec![])),
        ("tuple-empty", Value::Tuple(vec![])),
        ("mapping-empty", Value::Mapping(vec![])),
        (
            "tuple-mixed",
            Value::Tuple(vec![Value::SmallInt(1), Value::text("two"), Value::Null]),
        ),
        (
            "mapping-non-text-keys",
            Value::Mapping(vec![
                (Value::SmallInt(1), Value::text("one")),
                (Value::Tuple(vec![Value::Boolean(true)]), Value::EllipsisMarker),
                (Value::Null, Value::StopMarker),
            ]),
        ),
        ("kitchen-sink", kitchen_sink()),
    ]
}

/// Fixture set, keyed by output file name
#[allow(clippy::approx_constant)]
pub fn fixture_samples() -> Vec<Sample> {
    vec![
        ("supported.pyc", supported()),
        ("ellipsis.pyc", Value::EllipsisMarker),
        ("stopiter.pyc", Value::StopMarker),
        ("bignum.pyc", Value::BigInt(BigInt::from_i64(17_179_869_184))),
        ("complex.pyc", Value::Complex { real: 3.14, imag: -2.0 }),
    ]
}

#[allow(clippy::approx_constant)]
fn supported() -> Value {
    Value::mapping([
        ("integer", Value::SmallInt(42)),
        ("string", Value::text("foobar")),
        ("other", Value::text("foobar")),
        ("falseBoolean", Value::Boolean(false)),
        ("trueBoolean", Value::Boolean(true)),
        (
            "object",
            Value::mapping([("key", "value"), ("string", "foobar")]),
        ),
        ("none", Value::Null),
        ("unicode", Value::text("fooî‚°bar")),
        (
            "list",
            Value::List(vec![
                Value::text("one"),
                Value::mapping([("two", "three")]),
                Value::List(vec![
                    Value::text("four"),
                    Value::SmallInt(5),
                    Value::mapping([("six", true)]),
                ]),
            ]),
        ),
        ("pi", Value::Float(3.14)),
    ])
}

#[allow(clippy::approx_constant)]
fn kitchen_sink() -> Value {
    let mut innermost = Value::mapping([("foo", "bar")]);
    for n in [7, 6, 5] {
        innermost = Value::List(vec![Value::SmallInt(n), innermost]);
    }
    for _ in 0..4 {
        innermost = Value::List(vec![innermost]);
    }

    Value::mapping([
        ("foo", Value::text("bar")),
        (
            "baz",
            Value::List(vec![
                Value::mapping([
                    ("bool", Value::Boolean(true)),
                    (
                        "array",
                        Value::List(vec![
                            Value::Boolean(true),
                            Value::Boolean(false),
                            Value::SmallInt(1),
                            Value::Float(3.14),
                            Value::text("foobar"),
                            Value::Null,
                        ]),
                    ),
                ]),
                Value::List(vec![Value::text("foo"), Value::text("bar"), Value::Null]),
                innermost,
            ]),
        ),
    ])
}
