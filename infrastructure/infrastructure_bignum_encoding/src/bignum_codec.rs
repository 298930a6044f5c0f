//! Bignum Codec Module
//!
//! Provides `LONG` payload encoding/decoding for `BigInt` values.
//!
//! The encoder only ever sees canonical values (the `BigInt` constructors enforce
//! it), so it never emits a trailing zero group. The decoder is permissive about
//! trailing zero groups: it normalizes them away and reports that it did.

use entities_values::{BigInt, BigIntError, DIGIT_MAX};

use crate::common::{DecodeError, EncodeError};

/// Largest number of digit groups the signed one-byte count can describe
pub const MAX_DIGIT_GROUPS: usize = i8::MAX as usize;

/// Size of one encoded digit group
const DIGIT_SIZE: usize = 2;

/// Result of decoding a `LONG` payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLong {
    /// The canonical value
    pub value: BigInt,
    /// True if the payload carried trailing zero groups that were stripped
    pub normalized: bool,
}

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Calculate the payload size of a big integer (count byte plus digit groups)
    ///
    /// # Returns
    /// * `Ok(usize)` - Payload size in bytes
    /// * `Err(EncodeError)` - The value has more groups than the count field allows
    pub fn encoded_size(value: &BigInt) -> Result<usize, EncodeError> {
        let count = check_count(value)?;
        Ok(1 + count * DIGIT_SIZE)
    }

    /// Encode a big integer payload into a new buffer
    pub fn encode(value: &BigInt) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(Self::encoded_size(value)?);
        Self::encode_into(&mut buf, value)?;
        Ok(buf)
    }

    /// Append a big integer payload to `buf`
    ///
    /// Nothing is appended when the value cannot be encoded.
    ///
    /// # Arguments
    /// * `buf` - Buffer to append to
    /// * `value` - The canonical value to encode
    pub fn encode_into(buf: &mut Vec<u8>, value: &BigInt) -> Result<(), EncodeError> {
        let count = check_count(value)? as i8;
        let signed_count = if value.is_negative() { -count } else { count };
        buf.push(signed_count as u8);
        for &digit in value.digits() {
            buf.extend_from_slice(&digit.to_le_bytes());
        }
        Ok(())
    }

    /// Decode a big integer payload
    ///
    /// # Arguments
    /// * `data` - Buffer holding the payload
    /// * `index` - Offset of the count byte
    ///
    /// # Returns
    /// * `Ok((decoded, new_index))` - The value and the offset just past the payload
    /// * `Err(DecodeError)` - Truncated payload or out-of-range digit group
    pub fn decode(data: &[u8], index: usize) -> Result<(DecodedLong, usize), DecodeError> {
        let available = data.len().saturating_sub(index);
        if available < 1 {
            return Err(DecodeError::BufferTooShort {
                offset: index,
                needed: 1,
                available,
            });
        }

        let signed_count = data[index] as i8;
        let count = usize::from(signed_count.unsigned_abs());
        let needed = 1 + count * DIGIT_SIZE;
        if available < needed {
            return Err(DecodeError::BufferTooShort {
                offset: index,
                needed,
                available,
            });
        }

        let start = index + 1;
        let digits: Vec<u16> = data[start..start + count * DIGIT_SIZE]
            .chunks_exact(DIGIT_SIZE)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        let (value, normalized) = BigInt::from_digits_lenient(signed_count < 0, digits)
            .map_err(|err| match err {
                BigIntError::DigitOutOfRange { position, digit } => DecodeError::DigitOutOfRange {
                    offset: start + position * DIGIT_SIZE,
                    digit,
                },
                // from_digits_lenient only rejects wide digits
                _ => DecodeError::DigitOutOfRange {
                    offset: start,
                    digit: DIGIT_MAX,
                },
            })?;

        Ok((DecodedLong { value, normalized }, index + needed))
    }
}

fn check_count(value: &BigInt) -> Result<usize, EncodeError> {
    let count = value.digit_count();
    if count > MAX_DIGIT_GROUPS {
        return Err(EncodeError::TooManyDigits {
            count,
            max: MAX_DIGIT_GROUPS,
        });
    }
    Ok(count)
}
