//! Use Cases Layer: Round Trip
//!
//! Provides the verification harness and the named sample sets used to check the
//! marshal codec against its own laws and to produce fixture files.
//!
//! ## Overview
//!
//! A value passes the round trip when decoding its encoding gives back a
//! structurally equal value, the decoder consumes exactly the encoded bytes, and
//! re-encoding the decoded value reproduces the same bytes. Every strict prefix of
//! the encoding must also fail to decode with an end-of-input or length error.
//!
//! ## Modules
//!
//! - **[`samples`](samples/index.html)**: Named sample values (coverage set and fixture set)
//! - **[`harness`](harness/index.html)**: Round-trip and truncation checks
//!
//! ## See Also
//!
//! - [`infrastructure_marshal_format`](../infrastructure_marshal_format/index.html): The codec under test
//! - [`frameworks_fixture_gen`](../frameworks_fixture_gen/index.html): Writes the fixture set to disk

pub mod samples;
pub mod harness;

pub use samples::{fixture_samples, sample_values, Sample};
pub use harness::{check_truncations, round_trip, RoundTripError, RoundTripReport};
