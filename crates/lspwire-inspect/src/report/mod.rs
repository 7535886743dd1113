//! Per-message reports and their rendering.

use std::fmt;
use std::io::Write;

use lspwire_jsonrpc::{DecodeError, Message, MessageKind, RequestId};
use serde::Serialize;
use serde_json::Value;

use crate::config::OutputFormat;
use crate::errors::InspectError;

/// Result of checking a payload against the schema for its method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadCheck {
    /// Validation is off, or the method has no schema.
    Skipped,
    /// The payload decoded into the named schema type.
    Valid(&'static str),
    /// The payload did not match the named schema type.
    Invalid {
        /// Schema type the payload was checked against.
        schema: &'static str,
        /// Decoder failure.
        reason: String,
    },
}

impl PayloadCheck {
    /// Returns `true` when the payload failed validation.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Decoded {
        kind: MessageKind,
        method: Option<String>,
        id: Option<RequestId>,
        check: PayloadCheck,
    },
    Rejected {
        error: String,
    },
}

/// What the inspector found on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    line: usize,
    status: Status,
}

impl Report {
    pub(crate) fn decoded(line: usize, message: &Message, check: PayloadCheck) -> Self {
        Self {
            line,
            status: Status::Decoded {
                kind: message.kind(),
                method: message.method().map(str::to_owned),
                id: message.id().cloned(),
                check,
            },
        }
    }

    pub(crate) fn rejected(line: usize, error: &DecodeError) -> Self {
        Self {
            line,
            status: Status::Rejected {
                error: error.to_string(),
            },
        }
    }

    /// Returns the one-based input line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns `true` when the message failed to decode or validate.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        match &self.status {
            Status::Decoded { check, .. } => check.is_invalid(),
            Status::Rejected { .. } => true,
        }
    }

    fn to_json(&self) -> ReportLine<'_> {
        match &self.status {
            Status::Decoded {
                kind,
                method,
                id,
                check,
            } => {
                let (schema, valid, reason) = match check {
                    PayloadCheck::Skipped => (None, None, None),
                    PayloadCheck::Valid(schema) => (Some(*schema), Some(true), None),
                    PayloadCheck::Invalid { schema, reason } => {
                        (Some(*schema), Some(false), Some(reason.as_str()))
                    }
                };
                ReportLine {
                    line: self.line,
                    kind: Some(kind.to_string()),
                    method: method.as_deref(),
                    id: id.as_ref().map(RequestId::to_value),
                    schema,
                    valid,
                    error: reason,
                }
            }
            Status::Rejected { error } => ReportLine {
                line: self.line,
                kind: None,
                method: None,
                id: None,
                schema: None,
                valid: None,
                error: Some(error.as_str()),
            },
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "line {}: ", self.line)?;
        match &self.status {
            Status::Decoded {
                kind,
                method,
                id,
                check,
            } => {
                write!(formatter, "{kind}")?;
                if let Some(name) = method {
                    write!(formatter, " {name}")?;
                }
                if let Some(request_id) = id {
                    write!(formatter, " id={request_id}")?;
                }
                match check {
                    PayloadCheck::Skipped => Ok(()),
                    PayloadCheck::Valid(schema) => write!(formatter, " [{schema}: ok]"),
                    PayloadCheck::Invalid { schema, reason } => {
                        write!(formatter, " [{schema}: {reason}]")
                    }
                }
            }
            Status::Rejected { error } => write!(formatter, "error: {error}"),
        }
    }
}

#[derive(Serialize)]
struct ReportLine<'a> {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Totals for an inspection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    messages: usize,
    failed: usize,
}

impl Summary {
    pub(crate) const fn record(&mut self, report: &Report) {
        self.messages += 1;
        if report.is_failure() {
            self.failed += 1;
        }
    }

    /// Returns the number of non-blank lines inspected.
    #[must_use]
    pub const fn messages(&self) -> usize {
        self.messages
    }

    /// Returns the number of lines that failed to decode or validate.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Returns `true` when no line failed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.messages == 1 {
            "message"
        } else {
            "messages"
        };
        write!(formatter, "{} {noun}, {} failed", self.messages, self.failed)
    }
}

/// Writes reports in the configured format.
pub(crate) struct ReportWriter<'a, W: Write> {
    output: &'a mut W,
    format: OutputFormat,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    pub(crate) const fn new(output: &'a mut W, format: OutputFormat) -> Self {
        Self { output, format }
    }

    pub(crate) fn write_report(&mut self, report: &Report) -> Result<(), InspectError> {
        match self.format {
            OutputFormat::Human => {
                writeln!(self.output, "{report}").map_err(InspectError::WriteReport)
            }
            OutputFormat::Json => self.write_json(&report.to_json()),
        }
    }

    pub(crate) fn write_summary(&mut self, summary: &Summary) -> Result<(), InspectError> {
        match self.format {
            OutputFormat::Human => {
                writeln!(self.output, "{summary}").map_err(InspectError::WriteReport)
            }
            OutputFormat::Json => self.write_json(&SummaryLine { summary }),
        }
    }

    fn write_json<T: Serialize>(&mut self, line: &T) -> Result<(), InspectError> {
        serde_json::to_writer(&mut *self.output, line).map_err(InspectError::EncodeReport)?;
        self.output
            .write_all(b"\n")
            .map_err(InspectError::WriteReport)
    }
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a Summary,
}
