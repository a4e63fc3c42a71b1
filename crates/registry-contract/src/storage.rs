//! # Contract Storage
//!
//! The registry's storage maps, mirroring the deployed layout: domains,
//! refunds, commitments, reserve times and locked balances.

use crate::domain::entities::{DomainData, RefundData};
use registry_types::{AccountId, Balance, Hash, Moment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All persistent contract state.
///
/// Cloneable so the dispatcher can run mutating messages against a working
/// copy and commit only on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStorage {
    /// Registered domains, keyed by name hash.
    pub domains: HashMap<Hash, DomainData>,
    /// Locked rent per name hash, claimable after expiry.
    pub refunds: HashMap<Hash, RefundData>,
    /// Commit-reveal commitments: secret hash to committer.
    pub requested_domain: HashMap<Hash, AccountId>,
    /// When each commitment was placed.
    pub reserve_time: HashMap<Hash, Moment>,
    /// Total rent locked per account.
    pub locked_balance: HashMap<AccountId, Balance>,
}

impl RegistryStorage {
    /// Sum of all per-account locked balances.
    #[must_use]
    pub fn total_locked(&self) -> Balance {
        self.locked_balance
            .values()
            .fold(0, |acc, v| acc.saturating_add(*v))
    }

    /// Sum of all refund liabilities.
    #[must_use]
    pub fn total_refund_liability(&self) -> Balance {
        self.refunds
            .values()
            .fold(0, |acc, r| acc.saturating_add(r.paid_price))
    }

    /// Adds to an account's locked balance.
    pub fn lock(&mut self, who: AccountId, amount: Balance) {
        let entry = self.locked_balance.entry(who).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Removes from an account's locked balance, dropping empty entries.
    pub fn unlock(&mut self, who: &AccountId, amount: Balance) {
        if let Some(entry) = self.locked_balance.get_mut(who) {
            *entry = entry.saturating_sub(amount);
            if *entry == 0 {
                self.locked_balance.remove(who);
            }
        }
    }
}
