//! Error types for the inspector runtime.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Failures that stop an inspection run.
///
/// Malformed messages are not errors: they are reported and counted in the
/// [`crate::Summary`].
#[derive(Debug, Error)]
pub enum InspectError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {}: {source}", .path.display())]
    ReadConfig {
        /// Path given to `--config`.
        path: PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
    /// The configuration file is not a valid configuration record.
    #[error("invalid configuration file {}: {source}", .path.display())]
    ParseConfig {
        /// Path given to `--config`.
        path: PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },
    /// The input file could not be opened.
    #[error("failed to open input {}: {source}", .path.display())]
    OpenInput {
        /// Path given as `INPUT`.
        path: PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
    /// Reading a line of input failed.
    #[error("failed to read input: {0}")]
    ReadInput(#[source] io::Error),
    /// Writing a report line failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] io::Error),
    /// Encoding a JSON report line failed.
    #[error("failed to encode report: {0}")]
    EncodeReport(#[source] serde_json::Error),
    /// Logging could not be configured.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}
