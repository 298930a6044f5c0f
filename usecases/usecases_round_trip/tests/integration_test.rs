//! Integration tests for usecases_round_trip
//!
//! Runs the full coverage set and the fixture set through the harness.

use entities_values::Value;
use infrastructure_marshal_format::decode;
use usecases_round_trip::{check_truncations, fixture_samples, round_trip, sample_values};

#[test]
fn test_every_sample_round_trips() {
    for (name, value) in sample_values() {
        let report = round_trip(&value).unwrap_or_else(|err| panic!("{}: {}", name, err));
        assert_eq!(report.consumed, report.encoded.len(), "{}", name);
    }
}

#[test]
fn test_every_sample_rejects_truncation() {
    for (name, value) in sample_values() {
        check_truncations(&value).unwrap_or_else(|err| panic!("{}: {}", name, err));
    }
}

#[test]
fn test_fixtures_round_trip() {
    for (name, value) in fixture_samples() {
        round_trip(&value).unwrap_or_else(|err| panic!("{}: {}", name, err));
        check_truncations(&value).unwrap_or_else(|err| panic!("{}: {}", name, err));
    }
}

#[test]
fn test_bignum_fixture_bytes() {
    let samples = fixture_samples();
    let (_, bignum) = samples.iter().find(|(name, _)| *name == "bignum.pyc").unwrap();
    let report = round_trip(bignum).unwrap();
    // 2^34: three groups, the top one holding 16
    assert_eq!(report.encoded, vec![b'l', 3, 0, 0, 0, 0, 16, 0]);
}

#[test]
#[allow(clippy::approx_constant)]
fn test_supported_fixture_contents() {
    let samples = fixture_samples();
    let (_, supported) = samples.iter().find(|(name, _)| *name == "supported.pyc").unwrap();
    let report = round_trip(supported).unwrap();
    let (decoded, _) = decode(&report.encoded).unwrap();

    assert_eq!(decoded.get(&Value::text("integer")), Some(&Value::SmallInt(42)));
    assert_eq!(decoded.get(&Value::text("pi")), Some(&Value::Float(3.14)));
    assert_eq!(decoded.get(&Value::text("none")), Some(&Value::Null));
    assert_eq!(
        decoded.get(&Value::text("unicode")).and_then(Value::as_str),
        Some("fooî‚°bar")
    );
    let object = decoded.get(&Value::text("object")).unwrap();
    assert_eq!(object.get(&Value::text("key")), Some(&Value::text("value")));
}
