//! Frameworks Layer: Fixture Generator
//!
//! Provides the `marshal-fixtures` command, which writes the fixture sample set
//! as marshal-encoded files for other readers of the format.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line parsing
//! - **[`writer`](writer/index.html)**: Verify, encode and write samples
//!
//! ## See Also
//!
//! - [`usecases_round_trip`](../usecases_round_trip/index.html): Sample sets and verification

pub mod args;
pub mod writer;

pub use args::FixtureArgs;
pub use writer::{write_fixtures, DriverError};
