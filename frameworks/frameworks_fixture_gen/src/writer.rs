//! Fixture Writer Module
//!
//! Verifies and encodes a set of named samples, then writes each encoding to
//! `<dir>/<name>` verbatim. Every sample is encoded before the first file is
//! written, so a sample that cannot be encoded leaves the directory untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use infrastructure_marshal_format::EncodeError;
use thiserror::Error;
use usecases_round_trip::{round_trip, RoundTripError, Sample};

/// Fixture driver errors
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot encode sample {name}: {source}")]
    Encode { name: String, source: EncodeError },
    #[error("sample {name} failed verification: {source}")]
    RoundTrip { name: String, source: RoundTripError },
    #[error("cannot write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Write every sample into `dir`
///
/// # Arguments
/// * `dir` - Output directory, created if missing
/// * `samples` - Named values; each name becomes a file name
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Written paths, in sample order
/// * `Err(DriverError)` - Verification, encoding or I/O failure
pub fn write_fixtures(dir: &Path, samples: &[Sample]) -> Result<Vec<PathBuf>, DriverError> {
    let mut encoded = Vec::with_capacity(samples.len());
    for (name, value) in samples {
        let report = round_trip(value).map_err(|err| match err {
            RoundTripError::Encode(source) => DriverError::Encode {
                name: name.to_string(),
                source,
            },
            source => DriverError::RoundTrip {
                name: name.to_string(),
                source,
            },
        })?;
        encoded.push((dir.join(name), report.encoded));
    }

    fs::create_dir_all(dir).map_err(|source| DriverError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(encoded.len());
    for (path, bytes) in encoded {
        fs::write(&path, &bytes).map_err(|source| DriverError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), size = bytes.len(), "wrote fixture");
        written.push(path);
    }
    Ok(written)
}
