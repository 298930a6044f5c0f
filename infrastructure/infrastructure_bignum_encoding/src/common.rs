//! Bignum Codec Errors
//!
//! Error types shared by the payload encoder and decoder.

use thiserror::Error;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The digit count does not fit the signed one-byte count field
    #[error("{count} digit groups exceed the count field limit of {max}")]
    TooManyDigits {
        /// Number of digit groups in the value
        count: usize,
        /// Largest count the field can carry
        max: usize,
    },
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ends before the declared payload
    #[error("payload needs {needed} bytes at offset {offset}, {available} available")]
    BufferTooShort {
        /// Offset of the payload within the buffer
        offset: usize,
        /// Bytes the payload requires
        needed: usize,
        /// Bytes left in the buffer
        available: usize,
    },
    /// A digit group exceeds 15 bits
    #[error("digit group {digit:#06x} at offset {offset} exceeds 15 bits")]
    DigitOutOfRange {
        /// Offset of the offending group
        offset: usize,
        /// The group value
        digit: u16,
    },
}
