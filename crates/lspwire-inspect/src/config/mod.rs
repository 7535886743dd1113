//! Layered configuration for the inspector.
//!
//! Settings resolve in three layers: built-in defaults, then the JSON file
//! named by `--config`, then individual command-line flags.

use std::fs;
use std::path::Path;

use lspwire_jsonrpc::{DecodeOptions, NegativeIdPolicy, VersionCheck};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::cli::Cli;
use crate::errors::InspectError;

/// Default tracing filter expression.
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// Format of the per-message report lines.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// One readable line per message.
    #[default]
    Human,
    /// One JSON object per message.
    Json,
}

/// Supported logging output formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Resolved inspector settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    decode: DecodeOptions,
    validate_payloads: bool,
    output: OutputFormat,
    log_filter: String,
    log_format: LogFormat,
}

/// Configuration file record. Keys use the flag names in snake case, every
/// key is optional, and unknown keys are rejected:
///
/// ```json
/// {"negative_ids": "stringify", "validate_payloads": true, "output": "json"}
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    negative_ids: Option<NegativeIdPolicy>,
    version_check: Option<VersionCheck>,
    validate_payloads: Option<bool>,
    output: Option<OutputFormat>,
    log_filter: Option<String>,
    log_format: Option<LogFormat>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            decode: DecodeOptions::default(),
            validate_payloads: false,
            output: OutputFormat::default(),
            log_filter: String::from(DEFAULT_LOG_FILTER),
            log_format: LogFormat::default(),
        }
    }
}

impl InspectConfig {
    /// Reads a configuration file, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`InspectError::ReadConfig`] when the file cannot be read and
    /// [`InspectError::ParseConfig`] when it is not a valid record or names
    /// an unknown key.
    pub fn load(path: &Path) -> Result<Self, InspectError> {
        let text = fs::read_to_string(path).map_err(|source| InspectError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_json::from_str(&text).map_err(|source| InspectError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::default().with_file(file))
    }

    pub(crate) fn resolve(cli: &Cli) -> Result<Self, InspectError> {
        let base = match cli.config.as_deref() {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_flags(cli))
    }

    fn with_file(mut self, file: ConfigFile) -> Self {
        if let Some(policy) = file.negative_ids {
            self.decode = self.decode.with_negative_ids(policy);
        }
        if let Some(check) = file.version_check {
            self.decode = self.decode.with_version_check(check);
        }
        if let Some(enabled) = file.validate_payloads {
            self.validate_payloads = enabled;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        if let Some(format) = file.log_format {
            self.log_format = format;
        }
        self
    }

    fn with_flags(mut self, cli: &Cli) -> Self {
        if let Some(policy) = cli.negative_ids {
            self.decode = self.decode.with_negative_ids(policy);
        }
        if let Some(check) = cli.version_check {
            self.decode = self.decode.with_version_check(check);
        }
        if cli.validate_payloads {
            self.validate_payloads = true;
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        if let Some(filter) = &cli.log_filter {
            self.log_filter.clone_from(filter);
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
        self
    }

    /// Replaces the decoder settings.
    #[must_use]
    pub const fn with_decode_options(mut self, decode: DecodeOptions) -> Self {
        self.decode = decode;
        self
    }

    /// Enables or disables payload validation.
    #[must_use]
    pub const fn with_payload_validation(mut self, enabled: bool) -> Self {
        self.validate_payloads = enabled;
        self
    }

    /// Replaces the report format.
    #[must_use]
    pub const fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Returns the decoder settings.
    #[must_use]
    pub const fn decode_options(&self) -> DecodeOptions {
        self.decode
    }

    /// Returns whether known payloads are checked against the schema.
    #[must_use]
    pub const fn validate_payloads(&self) -> bool {
        self.validate_payloads
    }

    /// Returns the report format.
    #[must_use]
    pub const fn output(&self) -> OutputFormat {
        self.output
    }

    /// Returns the tracing filter expression.
    #[must_use]
    pub const fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the log line format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
