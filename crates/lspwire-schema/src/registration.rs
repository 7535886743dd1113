//! Dynamic capability registration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A capability the server registers with the client at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Identifier used to unregister the capability later.
    pub id: String,
    /// Method the registration is for, such as `workspace/didChangeWatchedFiles`.
    pub method: String,
    /// Method-specific registration options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_options: Option<Value>,
}

/// Parameters of `client/registerCapability`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationParams {
    pub registrations: Vec<Registration>,
}

/// Removes an earlier [`Registration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unregistration {
    pub id: String,
    pub method: String,
}

/// Parameters of `client/unregisterCapability`.
///
/// The wire member is spelled `unregisterations`; the protocol kept the typo
/// for compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregistrationParams {
    #[serde(rename = "unregisterations")]
    pub unregistrations: Vec<Unregistration>,
}
