//! Size Calculation Module
//!
//! Provides the exact encoded size of a value. The size pass performs every check
//! the encoder needs (length limits, UTF-8 validity, digit counts), so a value that
//! passes it always encodes without error.

use entities_values::Value;
use infrastructure_bignum_encoding::BignumCodec;

use crate::encoding::EncodeError;
use crate::options::EncodeOptions;
use crate::tags::{FLOAT_SIZE, LENGTH_SIZE};

/// Calculate the number of bytes `encode` will produce for a value
///
/// The walk uses an explicit stack, so nesting depth is bounded only by memory.
/// Children are visited in encoding order, so the first reported error is the
/// first offending value the encoder would reach.
///
/// # Arguments
/// * `value` - The value to measure
/// * `options` - Encoder limits
///
/// # Returns
/// * `Ok(usize)` - Size in bytes, tag bytes and mapping terminators included
/// * `Err(EncodeError)` - The value cannot be encoded
pub fn encoded_size(value: &Value, options: &EncodeOptions) -> Result<usize, EncodeError> {
    let limit = options.effective_max_length();
    let mut size = 0usize;
    let mut stack: Vec<&Value> = vec![value];

    while let Some(current) = stack.pop() {
        // Tag byte
        size += 1;
        match current {
            Value::Null
            | Value::Boolean(_)
            | Value::EllipsisMarker
            | Value::StopMarker => {}
            Value::SmallInt(_) => size += 4,
            Value::BigInt(big) => size += BignumCodec::encoded_size(big)?,
            Value::Float(_) => size += FLOAT_SIZE,
            Value::Complex { .. } => size += 2 * FLOAT_SIZE,
            Value::ByteString(bytes) => {
                check_length("byte string", bytes.len(), limit)?;
                size += LENGTH_SIZE + bytes.len();
            }
            Value::TextString(bytes) => {
                std::str::from_utf8(bytes).map_err(|err| EncodeError::InvalidText {
                    valid_up_to: err.valid_up_to(),
                })?;
                check_length("text string", bytes.len(), limit)?;
                size += LENGTH_SIZE + bytes.len();
            }
            Value::List(items) | Value::Tuple(items) => {
                check_length(current.kind(), items.len(), limit)?;
                size += LENGTH_SIZE;
                stack.extend(items.iter().rev());
            }
            Value::Mapping(pairs) => {
                // Terminator
                size += 1;
                for (key, val) in pairs.iter().rev() {
                    stack.push(val);
                    stack.push(key);
                }
            }
        }
    }

    Ok(size)
}

/// `limit` is exclusive: a length equal to it is already out of range
fn check_length(kind: &'static str, length: usize, limit: usize) -> Result<(), EncodeError> {
    if length >= limit {
        return Err(EncodeError::EncodingOverflow {
            kind,
            length,
            max: limit.saturating_sub(1),
        });
    }
    Ok(())
}
