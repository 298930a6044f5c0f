//! Decoding Module
//!
//! Provides bytes-to-value decoding for the marshal format.
//!
//! The decoder is a recursive descent over a byte cursor, driven by an explicit
//! frame stack so hostile nesting cannot exhaust the call stack. Every declared
//! length is checked against the remaining input before anything is allocated, and
//! a failed decode never hands back a partial value.

use std::collections::HashMap;

use entities_values::Value;
use infrastructure_bignum_encoding::{BignumCodec, DecodeError as LongDecodeError};
use thiserror::Error;

use crate::options::{DecodeOptions, DuplicateKeyPolicy};
use crate::tags::*;

/// Decoding error types. Offsets are byte positions in the supplied buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ends inside a tag's payload
    #[error("unexpected end of input at offset {offset}: need {needed} bytes, {available} available")]
    UnexpectedEndOfInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// The byte is not in the tag table
    #[error("unknown tag {tag:#04x} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },
    /// A text payload is not valid UTF-8
    #[error("invalid UTF-8 in text string at offset {offset}")]
    InvalidUtf8 { offset: usize },
    /// A declared length runs past the buffer or the configured limit
    #[error("declared length {length} at offset {offset} exceeds limit {limit}")]
    LengthOverflow {
        offset: usize,
        length: usize,
        limit: usize,
    },
    /// A big integer digit group exceeds 15 bits
    #[error("malformed big integer: digit group {digit:#06x} at offset {offset}")]
    MalformedBigInt { offset: usize, digit: u16 },
    /// A mapping terminator appeared where a value is required
    #[error("null sentinel at offset {offset} where a value is required")]
    UnexpectedNull { offset: usize },
    /// Containers nest deeper than the configured limit
    #[error("nesting deeper than {limit} at offset {offset}")]
    DepthLimitExceeded { offset: usize, limit: usize },
    /// A string reference points past the intern table
    #[error("string reference {index} at offset {offset} is out of range")]
    InvalidReference { offset: usize, index: usize },
    /// A text float payload does not parse
    #[error("malformed text float at offset {offset}")]
    MalformedFloat { offset: usize },
}

impl From<LongDecodeError> for DecodeError {
    fn from(err: LongDecodeError) -> Self {
        match err {
            LongDecodeError::BufferTooShort { offset, needed, available } => {
                DecodeError::UnexpectedEndOfInput { offset, needed, available }
            }
            LongDecodeError::DigitOutOfRange { offset, digit } => {
                DecodeError::MalformedBigInt { offset, digit }
            }
        }
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The decoded value
    pub value: Value,
    /// Bytes consumed from the start of the buffer
    pub consumed: usize,
    /// Big integers that carried trailing zero digit groups and were normalized
    pub non_canonical_longs: usize,
}

/// Decode the first value in `data` with default options
///
/// Trailing bytes after the first value are not an error; `consumed` tells the
/// caller where the value ended.
///
/// # Returns
/// * `Ok((value, consumed))` - Decoded value and its encoded length
/// * `Err(DecodeError)` - Decoding error
pub fn decode(data: &[u8]) -> Result<(Value, usize), DecodeError> {
    let decoded = decode_with(data, &DecodeOptions::default())?;
    Ok((decoded.value, decoded.consumed))
}

/// Decode the first value in `data` under explicit options
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Decoded, DecodeError> {
    let mut decoder = Decoder::new(data, options);
    let value = decoder.run()?;
    Ok(Decoded {
        value,
        consumed: decoder.pos,
        non_canonical_longs: decoder.non_canonical_longs,
    })
}

/// Decode consecutive top-level values until `data` is exhausted
///
/// One intern table spans the whole call, so a string reference in a later value
/// may name a string interned by an earlier one.
pub fn decode_all(data: &[u8], options: &DecodeOptions) -> Result<Vec<Value>, DecodeError> {
    let mut decoder = Decoder::new(data, options);
    let mut values = Vec::new();
    while decoder.pos < data.len() {
        values.push(decoder.run()?);
    }
    Ok(values)
}

/// Partially built container
enum Frame {
    Sequence {
        tag: u8,
        remaining: usize,
        items: Vec<Value>,
    },
    Mapping {
        pairs: Vec<(Value, Value)>,
        key: Option<Value>,
    },
}

impl Frame {
    /// Add a child. Returns true once a sequence has all its elements; mappings
    /// only close on their terminator.
    fn push(&mut self, value: Value) -> bool {
        match self {
            Frame::Sequence { remaining, items, .. } => {
                items.push(value);
                *remaining -= 1;
                *remaining == 0
            }
            Frame::Mapping { pairs, key } => {
                match key.take() {
                    None => *key = Some(value),
                    Some(k) => pairs.push((k, value)),
                }
                false
            }
        }
    }

    fn is_complete(&self) -> bool {
        matches!(self, Frame::Sequence { remaining: 0, .. })
    }
}

/// Outcome of reading one tag
enum Step {
    Value(Value),
    Open(Frame),
    /// Terminator read in a mapping's key position
    Close,
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    options: &'a DecodeOptions,
    length_limit: usize,
    interned: Vec<Vec<u8>>,
    non_canonical_longs: usize,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8], options: &'a DecodeOptions) -> Self {
        Self {
            data,
            pos: 0,
            options,
            length_limit: options.max_length.unwrap_or(data.len()),
            interned: Vec::new(),
            non_canonical_longs: 0,
        }
    }

    fn run(&mut self) -> Result<Value, DecodeError> {
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            let at_key = matches!(stack.last(), Some(Frame::Mapping { key: None, .. }));
            let offset = self.pos;

            let mut completed = match self.read_step(at_key)? {
                Step::Value(value) => value,
                Step::Open(frame) => {
                    if stack.len() >= self.options.max_depth {
                        return Err(DecodeError::DepthLimitExceeded {
                            offset,
                            limit: self.options.max_depth,
                        });
                    }
                    if !frame.is_complete() {
                        stack.push(frame);
                        continue;
                    }
                    self.finish(frame)
                }
                Step::Close => match stack.pop() {
                    Some(frame) => self.finish(frame),
                    None => return Err(DecodeError::UnexpectedNull { offset }),
                },
            };

            // Hand the finished value to its parent, closing every parent it completes
            loop {
                let Some(mut parent) = stack.pop() else {
                    return Ok(completed);
                };
                if parent.push(completed) {
                    completed = self.finish(parent);
                } else {
                    stack.push(parent);
                    break;
                }
            }
        }
    }

    fn read_step(&mut self, at_key: bool) -> Result<Step, DecodeError> {
        let offset = self.pos;
        let tag = self.read_u8()?;
        if tag & FLAG_REF != 0 {
            return Err(DecodeError::UnknownTag { tag, offset });
        }
        if is_legacy(tag) {
            tracing::debug!(tag = tag_name(tag), offset, "decoding legacy tag");
        }

        let value = match tag {
            TYPE_NULL => {
                return if at_key {
                    Ok(Step::Close)
                } else {
                    Err(DecodeError::UnexpectedNull { offset })
                };
            }
            TYPE_NONE => Value::Null,
            TYPE_FALSE => Value::Boolean(false),
            TYPE_TRUE => Value::Boolean(true),
            TYPE_ELLIPSIS => Value::EllipsisMarker,
            TYPE_STOPITER => Value::StopMarker,
            TYPE_INT => Value::SmallInt(i32::from_le_bytes(self.read_array()?)),
            TYPE_INT64 => Value::int(i64::from_le_bytes(self.read_array()?)),
            TYPE_LONG => {
                let (decoded, next) = BignumCodec::decode(self.data, self.pos)?;
                self.pos = next;
                if decoded.normalized {
                    self.non_canonical_longs += 1;
                    tracing::warn!(offset, "normalized big integer with trailing zero digit groups");
                }
                Value::BigInt(decoded.value)
            }
            TYPE_BINARY_FLOAT => Value::Float(self.read_f64()?),
            TYPE_BINARY_COMPLEX => {
                let real = self.read_f64()?;
                let imag = self.read_f64()?;
                Value::Complex { real, imag }
            }
            TYPE_FLOAT => Value::Float(self.read_float_text()?),
            TYPE_COMPLEX => {
                let real = self.read_float_text()?;
                let imag = self.read_float_text()?;
                Value::Complex { real, imag }
            }
            TYPE_STRING => {
                let length = self.read_length(1)?;
                Value::ByteString(self.read_bytes(length)?.to_vec())
            }
            TYPE_UNICODE | TYPE_INTERNED => {
                let bytes = self.read_text()?;
                if tag == TYPE_INTERNED {
                    self.interned.push(bytes.clone());
                }
                Value::TextString(bytes)
            }
            TYPE_STRINGREF => {
                let index = u32::from_le_bytes(self.read_array()?) as usize;
                match self.interned.get(index) {
                    Some(text) => Value::TextString(text.clone()),
                    None => return Err(DecodeError::InvalidReference { offset, index }),
                }
            }
            TYPE_LIST | TYPE_TUPLE | TYPE_FROZENSET => {
                // Every element takes at least its tag byte
                let count = self.read_length(1)?;
                return Ok(Step::Open(Frame::Sequence {
                    tag,
                    remaining: count,
                    items: Vec::with_capacity(count),
                }));
            }
            TYPE_DICT => {
                return Ok(Step::Open(Frame::Mapping {
                    pairs: Vec::new(),
                    key: None,
                }));
            }
            _ => return Err(DecodeError::UnknownTag { tag, offset }),
        };

        Ok(Step::Value(value))
    }

    fn finish(&self, frame: Frame) -> Value {
        match frame {
            // A frozen set has no variant of its own; a tuple keeps it hashable
            Frame::Sequence { tag: TYPE_TUPLE | TYPE_FROZENSET, items, .. } => Value::Tuple(items),
            Frame::Sequence { items, .. } => Value::List(items),
            Frame::Mapping { pairs, .. } => match self.options.duplicate_keys {
                DuplicateKeyPolicy::Preserve => Value::Mapping(pairs),
                DuplicateKeyPolicy::LastWriteWins => Value::Mapping(last_write_wins(pairs)),
            },
        }
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(u64::from_le_bytes(self.read_array()?)))
    }

    fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        let available = self.data.len() - self.pos;
        if count > available {
            return Err(DecodeError::UnexpectedEndOfInput {
                offset: self.pos,
                needed: count,
                available,
            });
        }
        let data: &'a [u8] = self.data;
        let bytes = &data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    /// Read a u32 length prefix and check `length * min_element_size` against both
    /// the remaining input and the configured limit
    fn read_length(&mut self, min_element_size: usize) -> Result<usize, DecodeError> {
        let offset = self.pos;
        let length = u32::from_le_bytes(self.read_array()?) as usize;
        let remaining = self.data.len() - self.pos;
        let limit = remaining.min(self.length_limit);
        if length.saturating_mul(min_element_size) > limit {
            return Err(DecodeError::LengthOverflow { offset, length, limit });
        }
        Ok(length)
    }

    fn read_text(&mut self) -> Result<Vec<u8>, DecodeError> {
        let length = self.read_length(1)?;
        let start = self.pos;
        let bytes = self.read_bytes(length)?;
        if let Err(err) = std::str::from_utf8(bytes) {
            return Err(DecodeError::InvalidUtf8 {
                offset: start + err.valid_up_to(),
            });
        }
        Ok(bytes.to_vec())
    }

    fn read_float_text(&mut self) -> Result<f64, DecodeError> {
        let offset = self.pos;
        let length = usize::from(self.read_u8()?);
        let bytes = self.read_bytes(length)?;
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| text.trim().parse::<f64>().ok())
            .ok_or(DecodeError::MalformedFloat { offset })
    }
}

/// Collapse repeated keys: first position wins, last value wins
fn last_write_wins(pairs: Vec<(Value, Value)>) -> Vec<(Value, Value)> {
    let mut positions: HashMap<Value, usize> = HashMap::with_capacity(pairs.len());
    let mut out: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match positions.get(&key) {
            Some(&index) => out[index].1 = value,
            None => {
                positions.insert(key.clone(), out.len());
                out.push((key, value));
            }
        }
    }
    out
}
