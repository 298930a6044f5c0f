//! Round-Trip Harness
//!
//! Checks a value against the codec's laws: decode inverts encode, the decoder
//! consumes exactly what the encoder wrote, the encoder is deterministic, and no
//! strict prefix of an encoding decodes.

use entities_values::Value;
use infrastructure_marshal_format::{
    decode_with, encode, DecodeError, DecodeOptions, EncodeError, DEFAULT_MAX_DEPTH,
};
use thiserror::Error;

/// Round-trip failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundTripError {
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    /// The decoded value differs from the original
    #[error("decoded {decoded} differs from original {original}")]
    ValueMismatch {
        original: &'static str,
        decoded: &'static str,
    },
    /// The decoder stopped short of (or past) the encoded length
    #[error("decoder consumed {consumed} of {encoded} bytes")]
    LengthMismatch { consumed: usize, encoded: usize },
    /// Re-encoding the decoded value gave different bytes
    #[error("re-encoding differs at byte {offset}")]
    NonDeterministic { offset: usize },
    /// A strict prefix decoded successfully
    #[error("prefix of {prefix} bytes decoded")]
    PrefixAccepted { prefix: usize },
    /// A strict prefix failed with something other than a truncation error
    #[error("prefix of {prefix} bytes failed with {error}")]
    PrefixMisreported { prefix: usize, error: DecodeError },
}

/// Result of a successful round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    /// The canonical encoding
    pub encoded: Vec<u8>,
    /// Bytes the decoder consumed (always `encoded.len()`)
    pub consumed: usize,
}

/// Decoder options deep enough for `value`. The encoder has no depth limit, so
/// the default decode limit is raised to the value's own nesting when needed.
fn options_for(value: &Value) -> DecodeOptions {
    DecodeOptions::new().with_max_depth(value.depth().max(DEFAULT_MAX_DEPTH))
}

/// Encode, decode, compare, and re-encode a value
///
/// # Arguments
/// * `value` - The value to check
///
/// # Returns
/// * `Ok(RoundTripReport)` - The encoding and consumed length
/// * `Err(RoundTripError)` - The first law that failed
pub fn round_trip(value: &Value) -> Result<RoundTripReport, RoundTripError> {
    let encoded = encode(value)?;
    let decoded = decode_with(&encoded, &options_for(value))?;
    let (decoded, consumed) = (decoded.value, decoded.consumed);

    if decoded != *value {
        return Err(RoundTripError::ValueMismatch {
            original: value.kind(),
            decoded: decoded.kind(),
        });
    }
    if consumed != encoded.len() {
        return Err(RoundTripError::LengthMismatch {
            consumed,
            encoded: encoded.len(),
        });
    }

    let re_encoded = encode(&decoded)?;
    if re_encoded != encoded {
        let offset = re_encoded
            .iter()
            .zip(&encoded)
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| re_encoded.len().min(encoded.len()));
        return Err(RoundTripError::NonDeterministic { offset });
    }

    tracing::debug!(kind = value.kind(), size = encoded.len(), "round trip ok");
    Ok(RoundTripReport { encoded, consumed })
}

/// Decode every strict prefix of a value's encoding
///
/// # Returns
/// * `Ok(usize)` - Number of prefixes checked
/// * `Err(RoundTripError)` - A prefix decoded, or failed with a non-truncation error
pub fn check_truncations(value: &Value) -> Result<usize, RoundTripError> {
    let encoded = encode(value)?;
    let options = options_for(value);
    for prefix in 0..encoded.len() {
        match decode_with(&encoded[..prefix], &options) {
            Ok(_) => return Err(RoundTripError::PrefixAccepted { prefix }),
            Err(DecodeError::UnexpectedEndOfInput { .. } | DecodeError::LengthOverflow { .. }) => {}
            Err(error) => return Err(RoundTripError::PrefixMisreported { prefix, error }),
        }
    }
    Ok(encoded.len())
}
