//! Entities Layer: Marshal Values
//!
//! Provides the in-memory value model shared by the marshal encoder and decoder.
//!
//! ## Overview
//!
//! The `entities_values` crate is the innermost layer of the marshal codec workspace.
//! It defines the closed set of values the wire format can carry:
//! - Singletons (`Null`, `EllipsisMarker`, `StopMarker`)
//! - Scalars (booleans, 32-bit integers, digit-group integers, floats, complex numbers)
//! - Byte and text strings
//! - Containers (lists, tuples, insertion-ordered mappings)
//!
//! Values own their children, so a value is always a tree: shared references and
//! cycles cannot be expressed.
//!
//! ## Modules
//!
//! - **[`value`](value/index.html)**: The `Value` tagged variant and its structural
//!   equality/hashing
//! - **[`big`](big/index.html)**: `BigInt`, a sign plus 15-bit digit groups, with
//!   conversions to and from `i64` and `malachite::Integer`
//!
//! ## See Also
//!
//! - [`infrastructure_bignum_encoding`](../../infrastructure/infrastructure_bignum_encoding/index.html): `LONG` payload codec
//! - [`infrastructure_marshal_format`](../../infrastructure/infrastructure_marshal_format/index.html): Encoder and decoder

pub mod big;
pub mod value;

pub use big::{BigInt, BigIntError, Sign, DIGIT_BASE, DIGIT_BITS, DIGIT_MAX};
pub use value::Value;
