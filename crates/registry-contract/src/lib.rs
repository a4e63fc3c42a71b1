//! # Registry Contract - Domain Rental Logic
//!
//! The domain registry contract: commit-reveal registration, per-letter
//! rent pricing, expiry, and refund accounting over locked rent.
//!
//! ## Message Surface
//!
//! | Message | Mutates | Payable | Purpose |
//! |---------|---------|---------|---------|
//! | `feePerLetter` | no | no | Configured base fee per letter |
//! | `domainLength` | no | no | Length of a domain name |
//! | `generateSecret` | no | no | Commitment hash for commit-reveal |
//! | `getDomainData` | no | no | Owner/expiry/metadata lookup |
//! | `rentPrice` | no | no | Price for renting a name |
//! | `requestDomain` | yes | no | Place a commitment |
//! | `registerDomain` | yes | yes | Reveal and rent a name |
//! | `renewDomain` | yes | yes | Extend a rental |
//! | `releaseDomain` | yes | no | Clear an expired name |
//! | `claimRefund` | yes | no | Withdraw locked rent after expiry |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Locked-balance conservation | `domain/invariants.rs` - `check_locked_balance_conservation()` |
//! | INVARIANT-2 | Live domain / refund pairing | `domain/invariants.rs` - `check_domain_refund_pairing()` |
//! | INVARIANT-3 | No state change on failure | `abi.rs` - dispatch commits a working copy only on success |
//! | INVARIANT-4 | Gas limit respected | `domain/entities.rs` - `GasMeter::charge()` |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
pub mod domain;
pub mod errors;
pub mod events;
pub mod registry;
pub mod storage;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::abi::{dispatch, encode_call, selectors, CallContext, CallOutcome};
    pub use crate::domain::entities::{DomainData, GasMeter, RefundData, RegistryConfig};
    pub use crate::domain::services::{generate_secret, name_hash, rent_price};
    pub use crate::domain::value_objects::DomainName;
    pub use crate::errors::ContractError;
    pub use crate::events::RegistryEvent;
    pub use crate::registry::DomainRegistry;
    pub use crate::storage::RegistryStorage;
}

/// Section name used when contract errors are decoded into module errors.
pub const ERROR_SECTION: &str = "domainRegistry";
