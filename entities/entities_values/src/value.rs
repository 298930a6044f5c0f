//! Value Module
//!
//! Provides the `Value` tagged variant carried by the marshal format.
//!
//! Equality and hashing are structural. Floating-point components compare by
//! their IEEE-754 bit pattern, so `NaN` equals itself and `0.0` differs from
//! `-0.0`; this matches what survives an encode/decode round trip and lets
//! `Value` be used as a hash-map key.

use std::hash::{Hash, Hasher};

use crate::big::BigInt;

/// A marshal value
///
/// Singletons carry no payload and compare by variant. Containers own their
/// children, so every value is a tree.
#[derive(Debug, Clone)]
pub enum Value {
    /// The null singleton
    Null,
    /// Boolean
    Boolean(bool),
    /// Integer that fits a 32-bit signed field
    SmallInt(i32),
    /// Arbitrary precision integer in digit-group form
    BigInt(BigInt),
    /// IEEE-754 double
    Float(f64),
    /// Complex number with double components
    Complex {
        /// Real part
        real: f64,
        /// Imaginary part
        imag: f64,
    },
    /// Opaque byte payload
    ByteString(Vec<u8>),
    /// Bytes interpreted as UTF-8 (validated on encode and decode)
    TextString(Vec<u8>),
    /// Ordered, mutable-semantics sequence
    List(Vec<Value>),
    /// Ordered, fixed-arity sequence
    Tuple(Vec<Value>),
    /// Insertion-ordered key/value pairs
    Mapping(Vec<(Value, Value)>),
    /// The ellipsis singleton
    EllipsisMarker,
    /// The stop-iteration singleton
    StopMarker,
}

impl Value {
    /// Build an integer value, using `SmallInt` whenever the value fits 32 bits
    pub fn int(value: i64) -> Self {
        match i32::try_from(value) {
            Ok(small) => Value::SmallInt(small),
            Err(_) => Value::BigInt(BigInt::from_i64(value)),
        }
    }

    /// Build a text string from a `str`
    pub fn text(value: &str) -> Self {
        Value::TextString(value.as_bytes().to_vec())
    }

    /// Build a byte string
    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Value::ByteString(value.into())
    }

    /// Build a mapping from key/value pairs, keeping their order
    pub fn mapping<K, V, I>(pairs: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Name of the variant, for logs and error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::SmallInt(_) => "small-int",
            Value::BigInt(_) => "big-int",
            Value::Float(_) => "float",
            Value::Complex { .. } => "complex",
            Value::ByteString(_) => "byte-string",
            Value::TextString(_) => "text-string",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Mapping(_) => "mapping",
            Value::EllipsisMarker => "ellipsis",
            Value::StopMarker => "stop",
        }
    }

    /// True for lists, tuples and mappings
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Tuple(_) | Value::Mapping(_))
    }

    /// Container nesting depth: 0 for a scalar, 1 for a container holding only
    /// scalars. Walks with an explicit stack.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((value, level)) = stack.pop() {
            if !value.is_container() {
                continue;
            }
            deepest = deepest.max(level);
            match value {
                Value::List(items) | Value::Tuple(items) => {
                    stack.extend(items.iter().map(|item| (item, level + 1)));
                }
                Value::Mapping(pairs) => {
                    for (key, val) in pairs {
                        stack.push((key, level + 1));
                        stack.push((val, level + 1));
                    }
                }
                _ => {}
            }
        }
        deepest
    }

    /// Whether the value could be a mapping key in the producing runtime:
    /// anything but lists and mappings, with tuples hashable when all their
    /// elements are.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::List(_) | Value::Mapping(_) => false,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => true,
        }
    }

    /// Text payload as `str`, if this is a valid UTF-8 text string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::TextString(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Integer payload as `i64`, for `SmallInt` and in-range `BigInt`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::SmallInt(v) => Some(i64::from(*v)),
            Value::BigInt(big) => big.to_i64(),
            _ => None,
        }
    }

    /// Look up a mapping value by key; the first matching pair wins
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Mapping(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null)
            | (Value::EllipsisMarker, Value::EllipsisMarker)
            | (Value::StopMarker, Value::StopMarker) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::SmallInt(a), Value::SmallInt(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (
                Value::Complex { real: ar, imag: ai },
                Value::Complex { real: br, imag: bi },
            ) => ar.to_bits() == br.to_bits() && ai.to_bits() == bi.to_bits(),
            (Value::ByteString(a), Value::ByteString(b)) => a == b,
            (Value::TextString(a), Value::TextString(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Mapping(a), Value::Mapping(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null | Value::EllipsisMarker | Value::StopMarker => {}
            Value::Boolean(b) => b.hash(state),
            Value::SmallInt(v) => v.hash(state),
            Value::BigInt(big) => big.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Complex { real, imag } => {
                real.to_bits().hash(state);
                imag.to_bits().hash(state);
            }
            Value::ByteString(bytes) | Value::TextString(bytes) => bytes.hash(state),
            Value::List(items) | Value::Tuple(items) => items.hash(state),
            Value::Mapping(pairs) => pairs.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::SmallInt(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::TextString(value.into_bytes())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}
