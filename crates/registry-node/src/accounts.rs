//! # Account Ledger
//!
//! Free balances, reserved balances and nonces for every account the chain
//! has seen.

use crate::errors::NodeError;
use registry_types::{AccountId, AccountInfo, Balance};
use std::collections::HashMap;

/// The account ledger.
#[derive(Debug, Clone, Default)]
pub struct Accounts {
    map: HashMap<AccountId, AccountInfo>,
}

impl Accounts {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits an account, creating it if needed.
    pub fn endow(&mut self, who: AccountId, amount: Balance) {
        let info = self.map.entry(who).or_default();
        info.free = info.free.saturating_add(amount);
    }

    /// Bookkeeping for one account. Unknown accounts answer with the
    /// default (empty) info.
    #[must_use]
    pub fn info(&self, who: &AccountId) -> AccountInfo {
        self.map.get(who).copied().unwrap_or_default()
    }

    /// Moves `amount` of free balance between two accounts.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Balance,
    ) -> Result<(), NodeError> {
        if amount == 0 {
            return Ok(());
        }
        let available = self.info(from).free;
        if available < amount {
            return Err(NodeError::InsufficientFunds {
                who: *from,
                available,
                required: amount,
            });
        }
        if let Some(info) = self.map.get_mut(from) {
            info.free -= amount;
        }
        self.endow(*to, amount);
        Ok(())
    }

    /// Advances an account's nonce by one.
    pub fn bump_nonce(&mut self, who: &AccountId) {
        let info = self.map.entry(*who).or_default();
        info.nonce = info.nonce.saturating_add(1);
    }

    /// Overwrites an account's reserved balance (rent locked in the
    /// contract, mirrored here for display).
    pub fn set_reserved(&mut self, who: &AccountId, reserved: Balance) {
        let info = self.map.entry(*who).or_default();
        info.reserved = reserved;
    }

    /// A copy of the whole ledger, for per-block snapshots.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<AccountId, AccountInfo> {
        self.map.clone()
    }
}
