//! Window messages shown or logged by the client.

use serde::{Deserialize, Serialize};

use crate::macros::lsp_enum;

lsp_enum! {
    /// Severity of a window message.
    pub struct MessageType(i32) {
        /// An error message.
        ERROR = 1 => "Error",
        /// A warning message.
        WARNING = 2 => "Warning",
        /// An information message.
        INFO = 3 => "Info",
        /// A log message.
        LOG = 4 => "Log",
    }
}

/// Parameters of `window/showMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
}

/// An action button offered by `window/showMessageRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageActionItem {
    pub title: String,
}

/// Parameters of `window/showMessageRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageRequestParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<MessageActionItem>>,
}

/// Parameters of `window/logMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessageParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
}
