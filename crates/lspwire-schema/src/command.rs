//! Commands the client can execute on the server's behalf.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command shown in the user interface, such as a code lens action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Title shown to the user.
    pub title: String,
    /// Identifier of the command handler.
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Value>>,
}

impl Command {
    /// Creates a command without arguments.
    #[must_use]
    pub fn new(title: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
            arguments: None,
        }
    }
}
