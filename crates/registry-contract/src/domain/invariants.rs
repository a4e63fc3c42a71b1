//! # Domain Invariants
//!
//! Structural properties of the registry state, checked after mutating
//! messages in debug builds and asserted directly by the test suite.

use crate::storage::RegistryStorage;
use registry_types::Balance;
use thiserror::Error;

/// A violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Locked balances and refund liabilities disagree.
    #[error("locked balance {locked} != refund liability {liability}")]
    LockedBalanceMismatch {
        /// Sum over `locked_balance`.
        locked: Balance,
        /// Sum over `refunds[*].paid_price`.
        liability: Balance,
    },

    /// A registered domain has no matching refund entry.
    #[error("domain without refund entry: {name_hash}")]
    DomainWithoutRefund {
        /// The offending name hash, hex.
        name_hash: String,
    },

    /// A domain and its refund entry disagree on the expiry.
    #[error("refund expiry mismatch for {name_hash}")]
    RefundExpiryMismatch {
        /// The offending name hash, hex.
        name_hash: String,
    },

    /// A commitment has no recorded reserve time.
    #[error("commitment without reserve time: {secret}")]
    CommitmentWithoutReserveTime {
        /// The offending secret hash, hex.
        secret: String,
    },
}

/// INVARIANT-1: every unit of locked balance is backed by a refund entry
/// and vice versa.
pub fn check_locked_balance_conservation(
    storage: &RegistryStorage,
) -> Result<(), InvariantViolation> {
    let locked = storage.total_locked();
    let liability = storage.total_refund_liability();
    if locked != liability {
        return Err(InvariantViolation::LockedBalanceMismatch { locked, liability });
    }
    Ok(())
}

/// INVARIANT-2: a live domain always pairs with a refund entry carrying the
/// same expiry.
pub fn check_domain_refund_pairing(storage: &RegistryStorage) -> Result<(), InvariantViolation> {
    for (name_hash, data) in &storage.domains {
        match storage.refunds.get(name_hash) {
            None => {
                return Err(InvariantViolation::DomainWithoutRefund {
                    name_hash: name_hash.to_hex(),
                })
            }
            Some(refund) if refund.expiration_date != data.expiration_date => {
                return Err(InvariantViolation::RefundExpiryMismatch {
                    name_hash: name_hash.to_hex(),
                })
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Every commitment must have a reserve time, or window checks would
/// misbehave.
pub fn check_commitment_bookkeeping(storage: &RegistryStorage) -> Result<(), InvariantViolation> {
    for secret in storage.requested_domain.keys() {
        if !storage.reserve_time.contains_key(secret) {
            return Err(InvariantViolation::CommitmentWithoutReserveTime {
                secret: secret.to_hex(),
            });
        }
    }
    Ok(())
}

/// Runs every invariant check.
pub fn check_all_invariants(storage: &RegistryStorage) -> Result<(), InvariantViolation> {
    check_locked_balance_conservation(storage)?;
    check_domain_refund_pairing(storage)?;
    check_commitment_bookkeeping(storage)?;
    Ok(())
}
