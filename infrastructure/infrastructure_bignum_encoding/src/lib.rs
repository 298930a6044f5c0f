//! Infrastructure Layer: Bignum Encoding
//!
//! Provides the wire payload codec for arbitrary precision integers in the marshal
//! format. The payload follows the `LONG` tag byte.
//!
//! ## Overview
//!
//! A big integer travels as a signed digit count followed by its 15-bit digit groups:
//!
//! ```text
//! +-------------+----------------+----------------+-----
//! | count (i8)  | digit 0 (u16)  | digit 1 (u16)  | ...
//! +-------------+----------------+----------------+-----
//! ```
//!
//! - `count < 0` denotes a negative value with `-count` groups
//! - `count == 0` denotes zero (no groups follow)
//! - every group is little-endian and must be `<= 32767`
//!
//! ## Modules
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: `BignumCodec` payload encode/decode
//!   and size calculation
//!
//! ## See Also
//!
//! - [`entities_values`](../../entities/entities_values/index.html): `BigInt` digit-group type
//! - [`infrastructure_marshal_format`](../infrastructure_marshal_format/index.html): Tag dispatch

mod common;

pub mod bignum_codec;

pub use bignum_codec::{BignumCodec, DecodedLong, MAX_DIGIT_GROUPS};

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};
