//! # Contract Events
//!
//! Events emitted by mutating messages. The node collects them per
//! extrinsic and hands them back to the submitter.

use registry_types::{AccountId, Balance, Hash, Moment};
use serde::{Deserialize, Serialize};

/// An event emitted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A commitment was placed.
    DomainRequested {
        /// The commitment hash.
        secret: Hash,
        /// Who placed it.
        who: AccountId,
    },

    /// A name was revealed and rented.
    DomainRegistered {
        /// Storage key of the name.
        name_hash: Hash,
        /// The new owner.
        owner: AccountId,
        /// When the rental lapses.
        expiration_date: Moment,
        /// Rent locked for the rental.
        price: Balance,
    },

    /// A rental was extended.
    DomainRenewed {
        /// Storage key of the name.
        name_hash: Hash,
        /// The new expiry.
        expiration_date: Moment,
        /// Additional rent locked.
        added: Balance,
    },

    /// An expired name was cleared.
    DomainReleased {
        /// Storage key of the name.
        name_hash: Hash,
        /// Who owned it before release.
        previous_owner: AccountId,
    },

    /// Locked rent was paid back out.
    RefundClaimed {
        /// Storage key of the name.
        name_hash: Hash,
        /// Who received the refund.
        who: AccountId,
        /// The amount paid out.
        amount: Balance,
    },
}

impl RegistryEvent {
    /// Short event name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DomainRequested { .. } => "DomainRequested",
            Self::DomainRegistered { .. } => "DomainRegistered",
            Self::DomainRenewed { .. } => "DomainRenewed",
            Self::DomainReleased { .. } => "DomainReleased",
            Self::RefundClaimed { .. } => "RefundClaimed",
        }
    }
}
