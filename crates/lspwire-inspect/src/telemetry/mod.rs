//! Diagnostic logging for a single inspection run.
//!
//! The subscriber is installed as the thread default and removed when the
//! returned guard drops, so each run logs with its own filter and format.
//! Events go to stderr and never mix with reports on stdout.

use std::io::{self, IsTerminal};

use thiserror::Error;
use tracing::subscriber::{self, DefaultGuard};
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::fmt::{MakeWriter, Subscriber, time::UtcTime};

use crate::config::LogFormat;

/// The configured log filter is not a valid `tracing` directive list.
#[derive(Debug, Error)]
#[error("invalid log filter {filter:?}: {source}")]
pub struct TelemetryError {
    filter: String,
    #[source]
    source: ParseError,
}

impl TelemetryError {
    /// Returns the rejected filter expression.
    #[must_use]
    pub const fn filter(&self) -> &str {
        self.filter.as_str()
    }
}

/// Routes `tracing` events on the current thread to stderr until the guard
/// drops.
pub(crate) fn scoped(format: LogFormat, filter: &str) -> Result<DefaultGuard, TelemetryError> {
    scoped_to(format, filter, io::stderr, io::stderr().is_terminal())
}

fn scoped_to<W>(
    format: LogFormat,
    filter: &str,
    writer: W,
    ansi: bool,
) -> Result<DefaultGuard, TelemetryError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_new(filter).map_err(|source| TelemetryError {
        filter: filter.to_owned(),
        source,
    })?;

    let events = Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_timer(UtcTime::rfc_3339());

    let guard = match format {
        LogFormat::Json => subscriber::set_default(events.json().flatten_event(true).finish()),
        LogFormat::Compact => subscriber::set_default(events.compact().finish()),
    };
    Ok(guard)
}
