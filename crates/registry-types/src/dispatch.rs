//! # Dispatch Errors
//!
//! The error shape a submitted extrinsic can fail with. Module errors carry
//! the section/name/docs triple callers use to render contract failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A decoded module error: which pallet-like section failed, the variant
/// name, and its documentation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleError {
    /// Section the error originates from (e.g. `domainRegistry`).
    pub section: String,
    /// Error variant name (e.g. `DomainTaken`).
    pub name: String,
    /// Documentation lines for the variant.
    pub docs: Vec<String>,
}

impl ModuleError {
    /// Renders the error as `section.Name: doc lines joined by spaces`,
    /// the form client-side error messages use.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}.{}: {}", self.section, self.name, self.docs.join(" "))
    }
}

/// Why a dispatched extrinsic failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DispatchError {
    /// A module (contract) error with decoded metadata.
    #[error("{}", .0.render())]
    Module(ModuleError),

    /// The supplied gas limit was exhausted.
    #[error("gas limit exhausted")]
    OutOfGas,

    /// The extrinsic signature did not verify. The dev node rejects bad
    /// signatures at the pool, before anything is sealed, so it never
    /// constructs this variant; it is part of the wire shape for callers
    /// that decode dispatch errors from other node implementations.
    #[error("bad signature")]
    BadSignature,

    /// The caller could not pay for the transferred value. Like
    /// [`Self::BadSignature`], the dev node reports this at the pool and
    /// keeps the variant only for wire-shape parity.
    #[error("inability to pay transferred value")]
    Payment,

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl DispatchError {
    /// Returns the decoded module error, if this is one.
    #[must_use]
    pub fn as_module(&self) -> Option<&ModuleError> {
        match self {
            Self::Module(m) => Some(m),
            _ => None,
        }
    }
}
