//! Encoding Module
//!
//! Provides value-to-bytes encoding for the marshal format.
//!
//! Encoding is two passes over the value. The size pass validates everything and
//! computes the exact output length; the emission pass then writes tag bytes and
//! payloads depth-first into a buffer allocated once. Both passes use an explicit
//! work stack instead of recursion. Containers are emitted in traversal order with
//! no interning, so a value that appears twice is written twice.

use entities_values::Value;
use infrastructure_bignum_encoding::{BignumCodec, EncodeError as LongEncodeError};
use thiserror::Error;

use crate::options::EncodeOptions;
use crate::size_calculation::encoded_size;
use crate::tags::*;

/// Encoding error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A length, count or digit count does not fit its wire field
    #[error("{kind} of length {length} exceeds the encodable maximum {max}")]
    EncodingOverflow {
        /// What overflowed
        kind: &'static str,
        /// Its length
        length: usize,
        /// The limit in force
        max: usize,
    },
    /// A text string holds bytes that are not valid UTF-8
    #[error("text string is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidText {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },
}

impl From<LongEncodeError> for EncodeError {
    fn from(err: LongEncodeError) -> Self {
        match err {
            LongEncodeError::TooManyDigits { count, max } => EncodeError::EncodingOverflow {
                kind: "big-int digit groups",
                length: count,
                max,
            },
        }
    }
}

/// Work item for the emission pass
enum Emit<'a> {
    Value(&'a Value),
    /// Mapping terminator, queued behind the mapping's pairs
    Terminator,
}

/// Encode a value with default options
///
/// # Arguments
/// * `value` - The value to encode
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded bytes
/// * `Err(EncodeError)` - The value cannot be encoded; no output is produced
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    encode_with(value, &EncodeOptions::default())
}

/// Encode a value under explicit limits
pub fn encode_with(value: &Value, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode_into(&mut buf, value, options)?;
    Ok(buf)
}

/// Append the encoding of a value to `buf`
///
/// On error `buf` is left exactly as it was.
///
/// # Returns
/// * `Ok(usize)` - Number of bytes appended
/// * `Err(EncodeError)` - The value cannot be encoded
pub fn encode_into(buf: &mut Vec<u8>, value: &Value, options: &EncodeOptions) -> Result<usize, EncodeError> {
    let size = encoded_size(value, options)?;
    let start = buf.len();
    buf.reserve(size);

    if let Err(err) = enc_value_int(buf, value) {
        buf.truncate(start);
        return Err(err);
    }

    let written = buf.len() - start;
    debug_assert_eq!(written, size);
    tracing::trace!(kind = value.kind(), size = written, "encoded value");
    Ok(written)
}

/// Emission pass. Lengths were validated by the size pass.
fn enc_value_int(buf: &mut Vec<u8>, value: &Value) -> Result<(), EncodeError> {
    let mut stack = vec![Emit::Value(value)];

    while let Some(item) = stack.pop() {
        let current = match item {
            Emit::Terminator => {
                buf.push(TYPE_NULL);
                continue;
            }
            Emit::Value(current) => current,
        };

        match current {
            Value::Null => buf.push(TYPE_NONE),
            Value::Boolean(false) => buf.push(TYPE_FALSE),
            Value::Boolean(true) => buf.push(TYPE_TRUE),
            Value::EllipsisMarker => buf.push(TYPE_ELLIPSIS),
            Value::StopMarker => buf.push(TYPE_STOPITER),
            Value::SmallInt(v) => {
                buf.push(TYPE_INT);
                buf.extend_from_slice(&v.to_le_bytes());
            }
            Value::BigInt(big) => {
                buf.push(TYPE_LONG);
                BignumCodec::encode_into(buf, big)?;
            }
            Value::Float(f) => {
                buf.push(TYPE_BINARY_FLOAT);
                buf.extend_from_slice(&f.to_bits().to_le_bytes());
            }
            Value::Complex { real, imag } => {
                buf.push(TYPE_BINARY_COMPLEX);
                buf.extend_from_slice(&real.to_bits().to_le_bytes());
                buf.extend_from_slice(&imag.to_bits().to_le_bytes());
            }
            Value::ByteString(bytes) => {
                buf.push(TYPE_STRING);
                put_length(buf, bytes.len());
                buf.extend_from_slice(bytes);
            }
            Value::TextString(bytes) => {
                buf.push(TYPE_UNICODE);
                put_length(buf, bytes.len());
                buf.extend_from_slice(bytes);
            }
            Value::List(items) => {
                buf.push(TYPE_LIST);
                put_length(buf, items.len());
                stack.extend(items.iter().rev().map(Emit::Value));
            }
            Value::Tuple(items) => {
                buf.push(TYPE_TUPLE);
                put_length(buf, items.len());
                stack.extend(items.iter().rev().map(Emit::Value));
            }
            Value::Mapping(pairs) => {
                buf.push(TYPE_DICT);
                stack.push(Emit::Terminator);
                for (key, val) in pairs.iter().rev() {
                    stack.push(Emit::Value(val));
                    stack.push(Emit::Value(key));
                }
            }
        }
    }

    Ok(())
}

fn put_length(buf: &mut Vec<u8>, length: usize) {
    buf.extend_from_slice(&(length as u32).to_le_bytes());
}
