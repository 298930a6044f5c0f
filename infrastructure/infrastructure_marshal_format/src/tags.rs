//! Marshal Format Tags
//!
//! Defines the tag bytes of the marshal format (revision 2). Each encoded value
//! starts with one of these bytes; the tag alone determines the payload layout.

/// Mapping terminator. Never a value on its own.
pub const TYPE_NULL: u8 = b'0';

/// The null singleton
pub const TYPE_NONE: u8 = b'N';

/// Boolean false
pub const TYPE_FALSE: u8 = b'F';

/// Boolean true
pub const TYPE_TRUE: u8 = b'T';

/// The stop-iteration singleton
pub const TYPE_STOPITER: u8 = b'S';

/// The ellipsis singleton
pub const TYPE_ELLIPSIS: u8 = b'.';

/// Integer (32-bit signed, little-endian)
pub const TYPE_INT: u8 = b'i';

/// Integer (64-bit signed, little-endian). Decode only.
pub const TYPE_INT64: u8 = b'I';

/// Big integer (signed i8 digit count + 15-bit digit groups)
pub const TYPE_LONG: u8 = b'l';

/// Float as ASCII text (u8 length + digits). Decode only.
pub const TYPE_FLOAT: u8 = b'f';

/// Float (IEEE 754 double, little-endian)
pub const TYPE_BINARY_FLOAT: u8 = b'g';

/// Complex as two ASCII text floats. Decode only.
pub const TYPE_COMPLEX: u8 = b'x';

/// Complex (two IEEE 754 doubles, real then imaginary)
pub const TYPE_BINARY_COMPLEX: u8 = b'y';

/// Byte string (u32 length + raw bytes)
pub const TYPE_STRING: u8 = b's';

/// Text string (u32 length + UTF-8 bytes)
pub const TYPE_UNICODE: u8 = b'u';

/// Interned text string; also recorded for later `TYPE_STRINGREF`. Decode only.
pub const TYPE_INTERNED: u8 = b't';

/// Reference to a previously interned string (u32 index). Decode only.
pub const TYPE_STRINGREF: u8 = b'R';

/// Tuple (u32 count + elements)
pub const TYPE_TUPLE: u8 = b'(';

/// List (u32 count + elements)
pub const TYPE_LIST: u8 = b'[';

/// Frozen set (u32 count + elements), read as a tuple. Decode only.
pub const TYPE_FROZENSET: u8 = b'>';

/// Mapping (key/value pairs terminated by `TYPE_NULL`)
pub const TYPE_DICT: u8 = b'{';

/// Reference-interning flag. Reserved; must be clear in this format revision.
pub const FLAG_REF: u8 = 0x80;

/// Size of a length/count prefix
pub const LENGTH_SIZE: usize = 4;

/// Size of an encoded double
pub const FLOAT_SIZE: usize = 8;

/// Human-readable name of a tag byte, for logs
pub fn tag_name(tag: u8) -> &'static str {
    match tag {
        TYPE_NULL => "null-sentinel",
        TYPE_NONE => "none",
        TYPE_FALSE => "false",
        TYPE_TRUE => "true",
        TYPE_STOPITER => "stopiter",
        TYPE_ELLIPSIS => "ellipsis",
        TYPE_INT => "int",
        TYPE_INT64 => "int64",
        TYPE_LONG => "long",
        TYPE_FLOAT => "float-text",
        TYPE_BINARY_FLOAT => "float",
        TYPE_COMPLEX => "complex-text",
        TYPE_BINARY_COMPLEX => "complex",
        TYPE_STRING => "string",
        TYPE_UNICODE => "unicode",
        TYPE_INTERNED => "interned",
        TYPE_STRINGREF => "stringref",
        TYPE_TUPLE => "tuple",
        TYPE_LIST => "list",
        TYPE_FROZENSET => "frozenset",
        TYPE_DICT => "dict",
        _ => "unknown",
    }
}

/// True for tags the decoder accepts but the encoder never produces
pub fn is_legacy(tag: u8) -> bool {
    matches!(
        tag,
        TYPE_INT64 | TYPE_FLOAT | TYPE_COMPLEX | TYPE_INTERNED | TYPE_STRINGREF | TYPE_FROZENSET
    )
}
