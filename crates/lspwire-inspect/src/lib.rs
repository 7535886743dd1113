//! Command-line inspection of JSON-RPC message streams.
//!
//! `lspwire` reads newline-delimited JSON messages, decodes each one with
//! [`lspwire_jsonrpc`], optionally checks the payloads of known Language
//! Server Protocol methods against [`lspwire_schema`], and writes one report
//! line per message followed by a summary.
//!
//! The runtime takes its IO streams as parameters so it can be driven from
//! the binary and from tests alike.
//!
//! # Example
//!
//! ```
//! use lspwire_inspect::{InspectConfig, inspect_stream};
//!
//! let input = "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"shutdown\"}\n";
//! let mut output = Vec::new();
//! let summary = inspect_stream(&InspectConfig::default(), input.as_bytes(), &mut output)
//!     .expect("in-memory streams do not fail");
//! assert!(summary.is_clean());
//! ```

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use lspwire_jsonrpc::Decoder;
use tracing::{debug, info};

mod cli;
mod config;
mod errors;
mod report;
mod telemetry;
mod validate;

use cli::Cli;
pub use config::{InspectConfig, LogFormat, OutputFormat};
pub use errors::InspectError;
pub use report::{PayloadCheck, Report, Summary};
pub use telemetry::TelemetryError;
use report::ReportWriter;
use validate::Session;

const INSPECT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::inspect");

/// Exit status for invalid command-line usage.
const USAGE_EXIT_CODE: u8 = 2;

/// Runs the inspector with the provided arguments and IO handles.
///
/// Returns success when every message decoded (and, when requested, every
/// known payload matched its schema), failure otherwise, and status 2 for
/// usage errors.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    match inspect(&cli, stdin, stdout) {
        Ok(summary) if summary.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

/// Decodes every non-blank line of `input` and writes one report per message.
///
/// Lines end at `\n`, with an optional preceding `\r`. The summary line is
/// written after the last report.
///
/// # Errors
///
/// Returns [`InspectError`] when reading the input or writing a report fails.
/// Malformed messages are reported, not returned as errors.
pub fn inspect_stream<R, W>(
    config: &InspectConfig,
    input: R,
    output: &mut W,
) -> Result<Summary, InspectError>
where
    R: BufRead,
    W: Write,
{
    let decoder = Decoder::new(config.decode_options());
    let mut session = Session::new(config.validate_payloads());
    let mut writer = ReportWriter::new(output, config.output());
    let mut summary = Summary::default();

    // Lines stay raw bytes so invalid UTF-8 is reported by the decoder.
    for (index, read) in input.split(b'\n').enumerate() {
        let raw = read.map_err(InspectError::ReadInput)?;
        let line_number = index + 1;
        let line = raw.strip_suffix(b"\r").unwrap_or(raw.as_slice());
        if line.trim_ascii().is_empty() {
            debug!(target: INSPECT_TARGET, line = line_number, "skipping blank line");
            continue;
        }

        let report = match decoder.decode_slice(line) {
            Ok(message) => {
                let check = session.check(&message);
                Report::decoded(line_number, &message, check)
            }
            Err(error) => Report::rejected(line_number, &error),
        };
        summary.record(&report);
        writer.write_report(&report)?;
    }

    writer.write_summary(&summary)?;
    info!(
        target: INSPECT_TARGET,
        messages = summary.messages(),
        failed = summary.failed(),
        "inspection finished"
    );
    Ok(summary)
}

fn inspect<R, W>(cli: &Cli, stdin: R, stdout: &mut W) -> Result<Summary, InspectError>
where
    R: BufRead,
    W: Write,
{
    let config = InspectConfig::resolve(cli)?;
    let _logging = telemetry::scoped(config.log_format(), config.log_filter())?;
    match cli.input.as_deref() {
        Some(path) => inspect_stream(&config, open_input(path)?, stdout),
        None => inspect_stream(&config, stdin, stdout),
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>, InspectError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| InspectError::OpenInput {
            path: path.to_path_buf(),
            source,
        })
}

fn report_usage<W, E>(error: &clap::Error, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    W: Write,
    E: Write,
{
    // `--help` and `--version` surface as errors that belong on stdout.
    if error.use_stderr() {
        let _ = write!(stderr, "{}", error.render());
        ExitCode::from(USAGE_EXIT_CODE)
    } else {
        let _ = write!(stdout, "{}", error.render());
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests;
