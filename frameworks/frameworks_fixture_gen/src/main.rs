//! Fixture Generator Binary Entry Point
//!
//! `marshal-fixtures <OUTPUT_DIR>` writes the fixture set into OUTPUT_DIR.
//! Exit status is 0 on success, 1 on a write or verification failure and 2 on a
//! usage error.

use std::process::ExitCode;

use clap::Parser;
use frameworks_fixture_gen::{write_fixtures, FixtureArgs};
use usecases_round_trip::fixture_samples;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = FixtureArgs::parse();

    match write_fixtures(&args.output_dir, &fixture_samples()) {
        Ok(paths) => {
            tracing::info!(
                count = paths.len(),
                dir = %args.output_dir.display(),
                "fixtures written"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "fixture generation failed");
            ExitCode::FAILURE
        }
    }
}
