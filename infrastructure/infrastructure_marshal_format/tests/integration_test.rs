//! Integration tests for infrastructure_marshal_format
//!
//! Exercises the public encode/decode surface end to end: fixture-shaped
//! mappings, big integers, float edge cases, limits, legacy tags and malformed
//! input.

use infrastructure_marshal_format::{
    decode, decode_all, decode_with, encode, encode_into, encode_with, encoded_size, BigInt,
    DecodeError, DecodeOptions, DuplicateKeyPolicy, EncodeError, EncodeOptions, Sign, Value,
};
use infrastructure_marshal_format::tags::{FLAG_REF, TYPE_LONG};
use malachite::Integer;

fn round_trip(value: &Value) -> Value {
    let encoded = encode(value).unwrap();
    let (decoded, consumed) = decode(&encoded).unwrap();
    assert_eq!(consumed, encoded.len());
    decoded
}

fn sample_mapping() -> Value {
    Value::mapping([
        ("integer", Value::SmallInt(42)),
        ("trueBoolean", Value::Boolean(true)),
        (
            "list",
            Value::List(vec![
                Value::text("one"),
                Value::mapping([("two", "three")]),
            ]),
        ),
    ])
}

#[test]
fn test_sample_mapping_round_trip_and_determinism() {
    let value = sample_mapping();
    let encoded = encode(&value).unwrap();
    assert_eq!(encoded[0], b'{');
    assert_eq!(*encoded.last().unwrap(), b'0');

    let (decoded, consumed) = decode(&encoded).unwrap();
    assert_eq!(consumed, encoded.len());
    assert_eq!(decoded, value);
    assert_eq!(decoded.get(&Value::text("integer")), Some(&Value::SmallInt(42)));

    let re_encoded = encode(&decoded).unwrap();
    assert_eq!(re_encoded, encoded);
}

#[test]
fn test_big_int_two_pow_35() {
    let value = Value::BigInt(BigInt::from_integer(&(Integer::from(1u64) << 35u64)));
    let encoded = encode(&value).unwrap();
    // tag, count 3, digit groups 0, 0, 32
    assert_eq!(encoded, vec![TYPE_LONG, 3, 0, 0, 0, 0, 32, 0]);

    let decoded = round_trip(&value);
    let Value::BigInt(big) = &decoded else {
        panic!("expected big-int, got {}", decoded.kind());
    };
    assert_eq!(big.sign(), Sign::Positive);
    assert_eq!(big.digits(), &[0, 0, 32]);
    assert_eq!(big.to_integer(), Integer::from(1u64 << 35));
}

#[test]
fn test_big_int_large_negative() {
    let integer = -(Integer::from(3u64) << 900u64);
    let value = Value::BigInt(BigInt::from_integer(&integer));
    let Value::BigInt(big) = round_trip(&value) else {
        panic!("expected big-int");
    };
    assert!(big.is_negative());
    assert_eq!(big.to_integer(), integer);
}

#[test]
fn test_big_int_too_many_groups() {
    let big = BigInt::from_integer(&(Integer::from(1u64) << 1905u64));
    assert_eq!(big.digit_count(), 128);
    let err = encode(&Value::List(vec![Value::BigInt(big)])).unwrap_err();
    assert!(matches!(err, EncodeError::EncodingOverflow { length: 128, max: 127, .. }));
}

#[test]
fn test_float_edge_cases_bit_exact() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0, 0.0, f64::MIN_POSITIVE, f64::MAX] {
        let Value::Float(back) = round_trip(&Value::Float(f)) else {
            panic!("expected float");
        };
        assert_eq!(back.to_bits(), f.to_bits());
    }
}

#[test]
#[allow(clippy::approx_constant)]
fn test_complex_components_independent() {
    let decoded = round_trip(&Value::Complex { real: 3.14, imag: -2.0 });
    let Value::Complex { real, imag } = decoded else {
        panic!("expected complex");
    };
    assert_eq!(real.to_bits(), 3.14f64.to_bits());
    assert_eq!(imag.to_bits(), (-2.0f64).to_bits());

    let nan_imag = Value::Complex { real: -0.0, imag: f64::NAN };
    assert_eq!(round_trip(&nan_imag), nan_imag);
}

#[test]
fn test_empty_containers_and_strings() {
    for value in [
        Value::bytes(Vec::new()),
        Value::text(""),
        Value::List(vec![]),
        Value::Tuple(vec![]),
        Value::Mapping(vec![]),
    ] {
        assert_eq!(round_trip(&value), value);
    }
    assert_eq!(encode(&Value::Mapping(vec![])).unwrap(), vec![b'{', b'0']);
}

#[test]
fn test_length_overflow_with_stand_in_maximum() {
    // 15 stands in for 2^32 - 1: a string of exactly that length is rejected
    let options = EncodeOptions::new().with_max_length(15);
    let below = Value::bytes(vec![7u8; 14]);
    assert_eq!(encode_with(&below, &options).unwrap().len(), 1 + 4 + 14);

    let at_max = Value::bytes(vec![7u8; 15]);
    assert_eq!(
        encode_with(&at_max, &options),
        Err(EncodeError::EncodingOverflow { kind: "byte string", length: 15, max: 14 })
    );

    let over = Value::List(vec![Value::Null, Value::bytes(vec![7u8; 16])]);
    assert_eq!(
        encode_with(&over, &options),
        Err(EncodeError::EncodingOverflow { kind: "byte string", length: 16, max: 14 })
    );
    assert!(encoded_size(&over, &options).is_err());

    let wide_list = Value::List(vec![Value::Null; 15]);
    assert!(matches!(
        encode_with(&wide_list, &options),
        Err(EncodeError::EncodingOverflow { kind: "list", length: 15, .. })
    ));
}

#[test]
fn test_encode_into_is_all_or_nothing() {
    let mut buf = b"head".to_vec();
    let bad = Value::mapping([("ok", Value::TextString(vec![0xE2, 0x82]))]);
    assert!(encode_into(&mut buf, &bad, &EncodeOptions::default()).is_err());
    assert_eq!(buf, b"head".to_vec());

    let written = encode_into(&mut buf, &Value::Null, &EncodeOptions::default()).unwrap();
    assert_eq!(written, 1);
    assert_eq!(buf, b"headN".to_vec());
}

#[test]
fn test_byte_and_text_strings_stay_distinct() {
    let value = Value::List(vec![Value::bytes(b"same".to_vec()), Value::text("same")]);
    let decoded = round_trip(&value);
    assert_eq!(decoded, value);
    assert_ne!(Value::bytes(b"same".to_vec()), Value::text("same"));
}

#[test]
fn test_multibyte_text() {
    let value = Value::text("foo\u{ee}\u{201a}\u{b0}bar");
    let encoded = encode(&value).unwrap();
    let length = u32::from_le_bytes([encoded[1], encoded[2], encoded[3], encoded[4]]) as usize;
    assert_eq!(length, "foo\u{ee}\u{201a}\u{b0}bar".len());
    assert_eq!(round_trip(&value), value);
}

#[test]
fn test_truncated_prefixes() {
    let encoded = encode(&sample_mapping()).unwrap();
    for end in 0..encoded.len() {
        let err = decode(&encoded[..end]).unwrap_err();
        assert!(
            matches!(err, DecodeError::UnexpectedEndOfInput { .. } | DecodeError::LengthOverflow { .. }),
            "prefix {} gave {:?}",
            end,
            err
        );
    }
}

#[test]
fn test_hostile_length_does_not_allocate() {
    let data = [b'[', 0xFF, 0xFF, 0xFF, 0x7F];
    assert!(matches!(decode(&data), Err(DecodeError::LengthOverflow { .. })));
}

#[test]
fn test_unknown_tags() {
    // Code objects are outside this format
    assert_eq!(decode(&[0x63]), Err(DecodeError::UnknownTag { tag: 0x63, offset: 0 }));
    assert_eq!(
        decode(&[b'u' | FLAG_REF, 0, 0, 0, 0]),
        Err(DecodeError::UnknownTag { tag: 0xF5, offset: 0 })
    );
    assert!(matches!(decode(b"r\0\0\0\0"), Err(DecodeError::UnknownTag { .. })));
}

#[test]
fn test_trailing_bytes_reported_by_consumed() {
    let mut data = encode(&Value::SmallInt(5)).unwrap();
    data.extend_from_slice(b"garbage");
    let (value, consumed) = decode(&data).unwrap();
    assert_eq!(value, Value::SmallInt(5));
    assert_eq!(consumed, 5);
}

#[test]
fn test_decode_all_stream() {
    let mut data = Vec::new();
    let values = vec![sample_mapping(), Value::StopMarker, Value::int(1 << 40)];
    for value in &values {
        encode_into(&mut data, value, &EncodeOptions::default()).unwrap();
    }
    assert_eq!(decode_all(&data, &DecodeOptions::default()).unwrap(), values);
}

#[test]
fn test_duplicate_key_policies() {
    let value = Value::mapping([("x", 1i32), ("y", 2i32), ("x", 3i32)]);
    let encoded = encode(&value).unwrap();

    assert_eq!(decode(&encoded).unwrap().0, value);

    let options = DecodeOptions::new().with_duplicate_keys(DuplicateKeyPolicy::LastWriteWins);
    let decoded = decode_with(&encoded, &options).unwrap();
    assert_eq!(decoded.value, Value::mapping([("x", 3i32), ("y", 2i32)]));
    assert_eq!(decoded.consumed, encoded.len());
}

#[test]
fn test_non_hashable_keys_preserved() {
    let key = Value::List(vec![Value::SmallInt(1)]);
    let value = Value::Mapping(vec![(key.clone(), Value::Null)]);
    assert!(!key.is_hashable());
    assert_eq!(round_trip(&value), value);
}

#[test]
fn test_deep_nesting_against_depth_limit() {
    let depth = 10_000;
    let mut data = Vec::new();
    for _ in 0..depth {
        data.extend_from_slice(&[b'[', 1, 0, 0, 0]);
    }
    data.push(b'N');

    let err = decode(&data).unwrap_err();
    assert!(matches!(err, DecodeError::DepthLimitExceeded { limit: 4096, .. }));

    let options = DecodeOptions::new().with_max_depth(depth);
    let decoded = decode_with(&data, &options).unwrap();
    assert_eq!(decoded.consumed, data.len());

    let re_encoded = encode(&decoded.value).unwrap();
    assert_eq!(re_encoded, data);

    let mut current = decoded.value;
    while let Value::List(mut items) = current {
        current = items.pop().unwrap_or(Value::Null);
    }
}

#[test]
fn test_legacy_stream() {
    // {"name": interned "spam", "again": ref 0, "big": int64, "pi": text float}
    let mut data = vec![b'{'];
    data.extend_from_slice(&[b't', 4, 0, 0, 0]);
    data.extend_from_slice(b"name");
    data.extend_from_slice(&[b't', 4, 0, 0, 0]);
    data.extend_from_slice(b"spam");
    data.extend_from_slice(&[b'u', 5, 0, 0, 0]);
    data.extend_from_slice(b"again");
    data.extend_from_slice(&[b'R', 1, 0, 0, 0]);
    data.extend_from_slice(&[b'u', 3, 0, 0, 0]);
    data.extend_from_slice(b"big");
    data.push(b'I');
    data.extend_from_slice(&(-(1i64 << 34)).to_le_bytes());
    data.extend_from_slice(&[b'u', 2, 0, 0, 0]);
    data.extend_from_slice(b"pi");
    data.extend_from_slice(&[b'f', 7]);
    data.extend_from_slice(b"2.71875");
    data.push(b'0');

    let (value, consumed) = decode(&data).unwrap();
    assert_eq!(consumed, data.len());
    assert_eq!(
        value,
        Value::mapping([
            ("name", Value::text("spam")),
            ("again", Value::text("spam")),
            ("big", Value::int(-(1i64 << 34))),
            ("pi", Value::Float(2.71875)),
        ])
    );

    // Re-encoding uses only current tags
    let re_encoded = encode(&value).unwrap();
    assert!(!re_encoded.contains(&b't'));
    assert_eq!(decode(&re_encoded).unwrap().0, value);
}

#[test]
fn test_non_canonical_big_int_from_foreign_writer() {
    let data = [b'l', 0xFD, 1, 0, 0, 0, 0, 0];
    let decoded = decode_with(&data, &DecodeOptions::default()).unwrap();
    assert_eq!(decoded.value, Value::BigInt(BigInt::from_i64(-1)));
    assert_eq!(decoded.non_canonical_longs, 1);
    assert_eq!(encode(&decoded.value).unwrap(), vec![b'l', 0xFF, 1, 0]);
}

#[test]
fn test_canonical_big_int_construction() {
    assert!(BigInt::new(Sign::Positive, vec![1, 0]).is_err());
    assert!(BigInt::new(Sign::Zero, vec![1]).is_err());
    assert!(BigInt::new(Sign::Negative, vec![]).is_err());
    assert_eq!(encode(&Value::BigInt(BigInt::zero())).unwrap(), vec![b'l', 0]);
}
