//! Decoder settings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Treatment of negative numeric identifiers such as `"id": -7`.
///
/// The numeric identifier variant is an unsigned 64-bit value, so a negative
/// literal cannot be represented as a number.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NegativeIdPolicy {
    /// Fail with a malformed identifier error.
    #[default]
    Reject,
    /// Keep the identifier as text holding its decimal rendering.
    ///
    /// The coerced identifier re-encodes as a JSON string, so peers that
    /// compare identifiers by type will not match it against the original.
    Stringify,
}

/// Validation applied to the `jsonrpc` version member.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VersionCheck {
    /// The member must be present and equal to `"2.0"`.
    #[default]
    Strict,
    /// A missing member is accepted; a present one must still be `"2.0"`.
    Lenient,
}

/// Options controlling how raw messages are decoded.
///
/// The defaults follow JSON-RPC 2.0 strictly.
///
/// # Example
///
/// ```
/// use lspwire_jsonrpc::{DecodeOptions, NegativeIdPolicy, VersionCheck};
///
/// let options = DecodeOptions::default()
///     .with_negative_ids(NegativeIdPolicy::Stringify)
///     .with_version_check(VersionCheck::Lenient);
/// assert_eq!(options.negative_ids(), NegativeIdPolicy::Stringify);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct DecodeOptions {
    negative_ids: NegativeIdPolicy,
    version_check: VersionCheck,
}

impl DecodeOptions {
    /// Creates options with explicit policies.
    #[must_use]
    pub const fn new(negative_ids: NegativeIdPolicy, version_check: VersionCheck) -> Self {
        Self {
            negative_ids,
            version_check,
        }
    }

    /// Replaces the negative identifier policy.
    #[must_use]
    pub const fn with_negative_ids(mut self, policy: NegativeIdPolicy) -> Self {
        self.negative_ids = policy;
        self
    }

    /// Replaces the version check.
    #[must_use]
    pub const fn with_version_check(mut self, check: VersionCheck) -> Self {
        self.version_check = check;
        self
    }

    /// Returns the negative identifier policy.
    #[must_use]
    pub const fn negative_ids(&self) -> NegativeIdPolicy {
        self.negative_ids
    }

    /// Returns the version check.
    #[must_use]
    pub const fn version_check(&self) -> VersionCheck {
        self.version_check
    }
}

#[cfg(test)]
mod tests;
