//! # Contract Metadata
//!
//! Parses the ABI metadata JSON shipped alongside the contract and
//! resolves message labels to selectors. The client never hard-codes a
//! selector; everything flows through this file.

use crate::errors::ClientError;
use serde::Deserialize;
use std::path::Path;

/// The parsed metadata file.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractMetadata {
    /// Compiler/source provenance. Informational.
    #[serde(default)]
    pub source: Option<SourceInfo>,
    /// Contract identity.
    pub contract: ContractInfo,
    /// The callable surface.
    pub spec: ContractSpec,
}

/// Provenance block of the metadata file.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceInfo {
    /// Source hash, if recorded.
    #[serde(default)]
    pub hash: Option<String>,
    /// Language the contract was written in.
    #[serde(default)]
    pub language: Option<String>,
}

/// Contract identity block.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractInfo {
    /// Contract name.
    pub name: String,
    /// Contract version.
    pub version: String,
}

/// The `spec` block: messages (constructors are not used by this client).
#[derive(Debug, Clone, Deserialize)]
pub struct ContractSpec {
    /// Callable messages.
    pub messages: Vec<MessageSpec>,
}

/// One callable message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSpec {
    /// The label callers use (e.g. `rentPrice`).
    pub label: String,
    /// 4-byte selector, `0x`-prefixed hex.
    pub selector: String,
    /// Whether the message mutates contract state.
    pub mutates: bool,
    /// Whether value may be attached.
    pub payable: bool,
    /// Argument descriptions.
    #[serde(default)]
    pub args: Vec<ArgSpec>,
    /// Return type, for documentation.
    #[serde(default)]
    pub return_type: Option<String>,
}

/// One message argument.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgSpec {
    /// Argument name.
    pub label: String,
    /// Type name, for documentation.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ContractMetadata {
    /// Parses metadata from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        serde_json::from_str(json).map_err(|e| ClientError::Metadata(e.to_string()))
    }

    /// Reads and parses a metadata file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let json =
            std::fs::read_to_string(path).map_err(|e| ClientError::Io(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Looks a message up by label.
    pub fn message(&self, label: &str) -> Result<&MessageSpec, ClientError> {
        self.spec
            .messages
            .iter()
            .find(|m| m.label == label)
            .ok_or_else(|| ClientError::UnknownMessage(label.to_string()))
    }
}

impl MessageSpec {
    /// Decodes the selector into its 4 bytes.
    pub fn selector_bytes(&self) -> Result<[u8; 4], ClientError> {
        let bad = || ClientError::BadSelector {
            label: self.label.clone(),
            selector: self.selector.clone(),
        };
        let stripped = self.selector.strip_prefix("0x").unwrap_or(&self.selector);
        let bytes = hex::decode(stripped).map_err(|_| bad())?;
        bytes.try_into().map_err(|_| bad())
    }
}
