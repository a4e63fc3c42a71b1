//! # Entities
//!
//! Stored records, contract configuration, and the per-call gas meter.

use crate::errors::ContractError;
use registry_types::{AccountId, Balance, Moment, Weight};
use serde::{Deserialize, Serialize};

// =============================================================================
// STORED RECORDS
// =============================================================================

/// What the registry knows about one rented domain.
///
/// The default value (zero owner, expiry 0, empty metadata) is what lookups
/// return for unregistered or expired names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainData {
    /// Current owner. Zero account when unowned.
    pub owner: AccountId,
    /// When the rental lapses, in milliseconds since the epoch.
    pub expiration_date: Moment,
    /// Free-form metadata the owner attached at registration.
    pub metadata: String,
}

impl DomainData {
    /// True if the rental has lapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Moment) -> bool {
        self.expiration_date <= now
    }
}

/// Rent held for a domain, claimable by the owner after expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundData {
    /// Expiry of the rental the rent was paid for.
    pub expiration_date: Moment,
    /// The locked rent.
    pub paid_price: Balance,
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunable contract parameters, fixed at instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base fee per letter, exposed through `feePerLetter`.
    pub fee_per_letter: Balance,
    /// Minimum rental duration, in milliseconds.
    pub min_lock_time: Moment,
    /// How long a commitment stays reserved before anyone may re-commit.
    pub reserve_window: Moment,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fee_per_letter: 500_000_000,
            // 30 days
            min_lock_time: 30 * 24 * 60 * 60 * 1_000,
            // 24 hours
            reserve_window: 24 * 60 * 60 * 1_000,
        }
    }
}

// =============================================================================
// GAS METER
// =============================================================================

/// Tracks weight consumed by one contract call against its gas limit.
#[derive(Debug, Clone, Copy)]
pub struct GasMeter {
    limit: Weight,
    consumed: Weight,
}

impl GasMeter {
    /// Creates a meter with the given limit and nothing consumed.
    #[must_use]
    pub const fn new(limit: Weight) -> Self {
        Self {
            limit,
            consumed: Weight::ZERO,
        }
    }

    /// Charges `amount`; fails with `OutOfGas` once the limit is crossed.
    pub fn charge(&mut self, amount: Weight) -> Result<(), ContractError> {
        let next = self.consumed.saturating_add(amount);
        if next.any_gt(&self.limit) {
            self.consumed = self.limit;
            return Err(ContractError::OutOfGas);
        }
        self.consumed = next;
        Ok(())
    }

    /// Weight consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> Weight {
        self.consumed
    }

    /// The limit this meter enforces.
    #[must_use]
    pub const fn limit(&self) -> Weight {
        self.limit
    }
}
