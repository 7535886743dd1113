//! Workspace configuration exchange.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::DocumentUri;

/// Parameters of `workspace/didChangeConfiguration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidChangeConfigurationParams {
    /// The changed settings, in a client-defined shape.
    pub settings: Value,
}

/// A configuration section requested by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationItem {
    /// Scope to resolve the section for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_uri: Option<DocumentUri>,
    /// Dotted section name, such as `rust-analyzer.cargo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Parameters of `workspace/configuration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationParams {
    pub items: Vec<ConfigurationItem>,
}
