//! Infrastructure Layer: Marshal Format
//!
//! Provides encoding and decoding of value trees in the marshal binary format
//! (revision 2): a compact, tagged, little-endian serialization in which every
//! value is one tag byte followed by a tag-specific payload.
//!
//! ## Overview
//!
//! | Tag | Byte | Payload |
//! |-----|------|---------|
//! | `TYPE_NULL` | `'0'` | none; terminates a mapping |
//! | `TYPE_NONE` | `'N'` | none |
//! | `TYPE_FALSE` / `TYPE_TRUE` | `'F'` / `'T'` | none |
//! | `TYPE_STOPITER` / `TYPE_ELLIPSIS` | `'S'` / `'.'` | none |
//! | `TYPE_INT` | `'i'` | i32 LE |
//! | `TYPE_LONG` | `'l'` | i8 signed digit count, then u16 LE digit groups |
//! | `TYPE_BINARY_FLOAT` | `'g'` | f64 LE |
//! | `TYPE_BINARY_COMPLEX` | `'y'` | f64 LE real, f64 LE imaginary |
//! | `TYPE_STRING` | `'s'` | u32 LE length, raw bytes |
//! | `TYPE_UNICODE` | `'u'` | u32 LE length, UTF-8 bytes |
//! | `TYPE_TUPLE` / `TYPE_LIST` | `'('` / `'['` | u32 LE count, elements |
//! | `TYPE_DICT` | `'{'` | key, value pairs, then `TYPE_NULL` |
//!
//! The decoder also accepts the legacy tags `'I'`, `'f'`, `'x'`, `'t'`, `'R'` and
//! `'>'` (frozen set, read as a tuple), which the encoder never writes. Tags
//! with the `FLAG_REF` bit set are rejected.
//!
//! ## Modules
//!
//! - **[`tags`](tags/index.html)**: Tag byte constants
//! - **[`options`](options/index.html)**: Encoder and decoder limits and policies
//! - **[`encoding`](encoding/index.html)**: Value to bytes (encode, encode_with, encode_into)
//! - **[`decoding`](decoding/index.html)**: Bytes to value (decode, decode_with, decode_all)
//! - **[`size_calculation`](size_calculation/index.html)**: Exact encoded size with full validation
//!
//! ## See Also
//!
//! - [`entities_values`](../entities_values/index.html): The value model
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): Big integer payloads

pub mod tags;
pub mod options;
pub mod encoding;
pub mod decoding;
pub mod size_calculation;

pub use encoding::{encode, encode_into, encode_with, EncodeError};
pub use decoding::{decode, decode_all, decode_with, DecodeError, Decoded};
pub use size_calculation::encoded_size;
pub use options::{DecodeOptions, DuplicateKeyPolicy, EncodeOptions, DEFAULT_MAX_DEPTH, MAX_WIRE_LENGTH};
pub use entities_values::{BigInt, Sign, Value};
