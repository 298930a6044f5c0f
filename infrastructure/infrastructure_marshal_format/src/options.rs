//! Codec Options
//!
//! Configuration for the encoder and decoder. Both option sets are plain values
//! with `Default` impls; a call never retains them.

/// Exclusive bound on encoded lengths: a u32 prefix carries at most 2^32 - 2
pub const MAX_WIRE_LENGTH: usize = u32::MAX as usize;

/// Default container nesting limit for decoding
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Exclusive bound on string lengths and container counts. Values above
    /// `MAX_WIRE_LENGTH` are clamped to it.
    pub max_length: usize,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower the length bound (a stand-in for `MAX_WIRE_LENGTH` that needs no
    /// 4 GiB allocation)
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// The bound actually enforced
    pub fn effective_max_length(&self) -> usize {
        self.max_length.min(MAX_WIRE_LENGTH)
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            max_length: MAX_WIRE_LENGTH,
        }
    }
}

/// How the decoder treats repeated keys within one mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Keep every pair in wire order
    #[default]
    Preserve,
    /// Keep one pair per key, at the position where the key first appeared,
    /// holding the last value seen for it
    LastWriteWins,
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Cap on `declared length * minimum element size`. `None` means the length
    /// of the supplied buffer.
    pub max_length: Option<usize>,
    /// Deepest container nesting accepted
    pub max_depth: usize,
    /// Repeated-key resolution for mappings
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_length: None,
            max_depth: DEFAULT_MAX_DEPTH,
            duplicate_keys: DuplicateKeyPolicy::Preserve,
        }
    }
}
