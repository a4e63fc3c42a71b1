//! # Error Types
//!
//! Every way a registry message can fail. `ContractError` travels over the
//! call wire (callers decode it from query output) and converts into the
//! module-error triple dispatched extrinsics report.

use registry_types::{Balance, ModuleError, Moment};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by registry messages.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ContractError {
    /// The name failed validation.
    #[error("invalid domain: {reason}")]
    InvalidDomain {
        /// Why validation failed.
        reason: String,
    },

    /// The domain is already registered and not yet expired.
    #[error("domain already taken")]
    DomainTaken,

    /// The domain is not registered.
    #[error("domain not found")]
    DomainNotFound,

    /// No commitment exists for the revealed secret.
    #[error("no commitment for this secret")]
    CommitmentNotFound,

    /// The commitment belongs to a different account.
    #[error("commitment placed by another account")]
    CommitmentForeign,

    /// The commitment's reserve window has lapsed.
    #[error("commitment expired")]
    CommitmentExpired,

    /// A live commitment for this secret already exists.
    #[error("commitment already taken")]
    CommitmentTaken,

    /// The requested duration is below the configured minimum.
    #[error("duration below minimum lock time of {min} ms")]
    DurationTooShort {
        /// The configured minimum.
        min: Moment,
    },

    /// The transferred value does not cover the rent.
    #[error("insufficient payment: required {required}, transferred {transferred}")]
    InsufficientPayment {
        /// Price of the rental.
        required: Balance,
        /// What the caller attached.
        transferred: Balance,
    },

    /// The caller does not own the domain.
    #[error("caller is not the owner")]
    NotOwner,

    /// The domain has not expired yet.
    #[error("domain not expired")]
    NotExpired,

    /// No refund is claimable.
    #[error("nothing to refund")]
    NothingToRefund,

    /// The gas limit was exhausted mid-call.
    #[error("out of gas")]
    OutOfGas,

    /// The selector matched no message.
    #[error("unknown selector 0x{}", hex_selector(.0))]
    UnknownSelector([u8; 4]),

    /// Call input bytes did not decode as the message's arguments.
    #[error("argument decoding failed: {0}")]
    Decoding(String),
}

fn hex_selector(sel: &[u8; 4]) -> String {
    sel.iter().map(|b| format!("{b:02x}")).collect()
}

impl ContractError {
    /// The variant name, as surfaced in module errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidDomain { .. } => "InvalidDomain",
            Self::DomainTaken => "DomainTaken",
            Self::DomainNotFound => "DomainNotFound",
            Self::CommitmentNotFound => "CommitmentNotFound",
            Self::CommitmentForeign => "CommitmentForeign",
            Self::CommitmentExpired => "CommitmentExpired",
            Self::CommitmentTaken => "CommitmentTaken",
            Self::DurationTooShort { .. } => "DurationTooShort",
            Self::InsufficientPayment { .. } => "InsufficientPayment",
            Self::NotOwner => "NotOwner",
            Self::NotExpired => "NotExpired",
            Self::NothingToRefund => "NothingToRefund",
            Self::OutOfGas => "OutOfGas",
            Self::UnknownSelector(_) => "UnknownSelector",
            Self::Decoding(_) => "Decoding",
        }
    }

    /// Converts into the module-error triple extrinsic results carry.
    #[must_use]
    pub fn to_module_error(&self) -> ModuleError {
        ModuleError {
            section: crate::ERROR_SECTION.to_string(),
            name: self.name().to_string(),
            docs: vec![self.to_string()],
        }
    }
}
