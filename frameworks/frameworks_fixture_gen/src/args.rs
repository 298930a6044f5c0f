//! Command-Line Argument Parsing Module
//!
//! The generator takes exactly one positional argument. Missing or extra
//! arguments are usage errors, reported by clap with exit status 2 before any
//! file is touched.

use std::path::PathBuf;

use clap::Parser;

/// Fixture generator command-line arguments
#[derive(Parser, Debug)]
#[command(name = "marshal-fixtures")]
#[command(about = "Write marshal-encoded fixture files")]
pub struct FixtureArgs {
    /// Directory to write fixtures into (created if missing)
    pub output_dir: PathBuf,
}
