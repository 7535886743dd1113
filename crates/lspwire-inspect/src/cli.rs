//! Command-line argument definitions for the `lspwire` binary.

use std::path::PathBuf;

use clap::Parser;
use lspwire_jsonrpc::{NegativeIdPolicy, VersionCheck};

use crate::config::{LogFormat, OutputFormat};

/// Decodes newline-delimited JSON-RPC messages and reports on each one.
#[derive(Parser, Debug, Default)]
#[command(name = "lspwire", version)]
pub(crate) struct Cli {
    /// File of newline-delimited JSON messages; stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub(crate) input: Option<PathBuf>,
    /// Treatment of negative numeric identifiers (`reject` or `stringify`).
    #[arg(long, value_name = "POLICY")]
    pub(crate) negative_ids: Option<NegativeIdPolicy>,
    /// Validation of the `jsonrpc` member (`strict` or `lenient`).
    #[arg(long, value_name = "CHECK")]
    pub(crate) version_check: Option<VersionCheck>,
    /// Decodes the payloads of known methods into schema types.
    #[arg(long)]
    pub(crate) validate_payloads: bool,
    /// Per-message report format (`human` or `json`).
    #[arg(long, value_name = "FORMAT")]
    pub(crate) output: Option<OutputFormat>,
    /// Tracing filter expression, such as `lspwire_jsonrpc=debug`.
    #[arg(long, value_name = "FILTER")]
    pub(crate) log_filter: Option<String>,
    /// Log line format (`json` or `compact`).
    #[arg(long, value_name = "FORMAT")]
    pub(crate) log_format: Option<LogFormat>,
    /// JSON configuration file using the same keys as the flags.
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,
}
