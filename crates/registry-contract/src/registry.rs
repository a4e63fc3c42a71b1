//! # The Registry
//!
//! Message implementations. Each mutating message runs inside a
//! [`MessageEnv`] carrying the caller, the transferred value, the current
//! time, the gas meter, and the outboxes for events and payouts; the
//! dispatcher in [`crate::abi`] owns atomicity.

use crate::domain::entities::{DomainData, GasMeter, RefundData, RegistryConfig};
use crate::domain::services::{costs, generate_secret, name_hash, rent_price};
use crate::domain::value_objects::DomainName;
use crate::errors::ContractError;
use crate::events::RegistryEvent;
use crate::storage::RegistryStorage;
use registry_types::{AccountId, Balance, Hash, Moment};
use tracing::debug;

/// Execution environment of one message call.
#[derive(Debug)]
pub struct MessageEnv {
    /// The calling account.
    pub caller: AccountId,
    /// Value attached to the call.
    pub transferred_value: Balance,
    /// Current chain time, milliseconds.
    pub now: Moment,
    /// Gas meter for this call.
    pub gas: GasMeter,
    /// Events emitted so far.
    pub events: Vec<RegistryEvent>,
    /// Balance transfers out of the contract, applied by the host on
    /// success only.
    pub pay_outs: Vec<(AccountId, Balance)>,
}

impl MessageEnv {
    /// Schedules a payout from the contract account, charging transfer
    /// weight.
    fn pay_out(&mut self, to: AccountId, amount: Balance) -> Result<(), ContractError> {
        if amount == 0 {
            return Ok(());
        }
        self.gas.charge(costs::TRANSFER)?;
        self.pay_outs.push((to, amount));
        Ok(())
    }
}

/// The domain registry contract instance.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    /// Parameters fixed at instantiation.
    pub config: RegistryConfig,
    /// Persistent state.
    pub storage: RegistryStorage,
}

impl DomainRegistry {
    /// Instantiates the registry with the given configuration and empty
    /// storage.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            storage: RegistryStorage::default(),
        }
    }

    // =========================================================================
    // READ-ONLY MESSAGES
    // =========================================================================

    /// `feePerLetter`: the configured base fee per letter.
    #[must_use]
    pub fn fee_per_letter(&self) -> Balance {
        self.config.fee_per_letter
    }

    /// `domainLength`: byte length of a name.
    #[must_use]
    pub fn domain_length(&self, domain: &str) -> u128 {
        domain.len() as u128
    }

    /// `generateSecret`: the commitment hash for a name and salt.
    #[must_use]
    pub fn generate_secret(&self, domain: &str, salt: &Hash) -> Hash {
        generate_secret(domain, salt)
    }

    /// `rentPrice`: rent for a name over a duration.
    #[must_use]
    pub fn rent_price(&self, domain: &str, duration: Moment) -> Balance {
        rent_price(domain, duration)
    }

    /// `getDomainData`: owner, expiry and metadata of a name.
    ///
    /// Unregistered and expired names both answer with the default record
    /// (zero owner, expiry 0, empty metadata).
    #[must_use]
    pub fn get_domain_data(&self, now: Moment, domain: &str) -> DomainData {
        match self.storage.domains.get(&name_hash(domain)) {
            Some(data) if !data.is_expired(now) => data.clone(),
            _ => DomainData::default(),
        }
    }

    // =========================================================================
    // MUTATING MESSAGES
    // =========================================================================

    /// `requestDomain`: place a commit-reveal commitment.
    ///
    /// A live commitment cannot be displaced; once its reserve window has
    /// lapsed anyone may commit over it.
    pub fn request_domain(
        &mut self,
        env: &mut MessageEnv,
        secret: Hash,
    ) -> Result<(), ContractError> {
        env.gas.charge(costs::STORAGE_OP)?;
        if let Some(placed_at) = self.storage.reserve_time.get(&secret) {
            if placed_at.saturating_add(self.config.reserve_window) > env.now {
                return Err(ContractError::CommitmentTaken);
            }
        }

        env.gas.charge(costs::STORAGE_OP)?;
        self.storage.requested_domain.insert(secret, env.caller);
        self.storage.reserve_time.insert(secret, env.now);

        debug!(secret = %secret, who = %env.caller, "commitment placed");
        env.events.push(RegistryEvent::DomainRequested {
            secret,
            who: env.caller,
        });
        Ok(())
    }

    /// `registerDomain`: reveal a commitment and rent the name.
    ///
    /// Registering over an expired name releases it first, refunding the
    /// previous owner. Excess value over the rent is paid straight back.
    pub fn register_domain(
        &mut self,
        env: &mut MessageEnv,
        domain: &str,
        salt: Hash,
        duration: Moment,
        metadata: String,
    ) -> Result<(), ContractError> {
        let name = DomainName::new(domain)?;

        // The reveal must match a commitment placed by this caller inside
        // the reserve window.
        let secret = generate_secret(name.as_str(), &salt);
        env.gas.charge(costs::STORAGE_OP)?;
        let committer = self
            .storage
            .requested_domain
            .get(&secret)
            .copied()
            .ok_or(ContractError::CommitmentNotFound)?;
        if committer != env.caller {
            return Err(ContractError::CommitmentForeign);
        }
        let placed_at = self
            .storage
            .reserve_time
            .get(&secret)
            .copied()
            .unwrap_or_default();
        if placed_at.saturating_add(self.config.reserve_window) <= env.now {
            return Err(ContractError::CommitmentExpired);
        }

        if duration < self.config.min_lock_time {
            return Err(ContractError::DurationTooShort {
                min: self.config.min_lock_time,
            });
        }

        let price = rent_price(name.as_str(), duration);
        if env.transferred_value < price {
            return Err(ContractError::InsufficientPayment {
                required: price,
                transferred: env.transferred_value,
            });
        }

        // Occupied and not expired: taken. Expired: release first.
        let key = name_hash(name.as_str());
        env.gas.charge(costs::STORAGE_OP)?;
        if let Some(existing) = self.storage.domains.get(&key).cloned() {
            if !existing.is_expired(env.now) {
                return Err(ContractError::DomainTaken);
            }
            self.release_expired(env, key, &existing)?;
        }

        // Consume the commitment and take the rental.
        self.storage.requested_domain.remove(&secret);
        self.storage.reserve_time.remove(&secret);

        let expiration_date = env.now.saturating_add(duration);
        env.gas.charge(costs::STORAGE_OP)?;
        self.storage.domains.insert(
            key,
            DomainData {
                owner: env.caller,
                expiration_date,
                metadata,
            },
        );
        self.storage.refunds.insert(
            key,
            RefundData {
                expiration_date,
                paid_price: price,
            },
        );
        self.storage.lock(env.caller, price);

        // Change over the rent.
        let excess = env.transferred_value.saturating_sub(price);
        env.pay_out(env.caller, excess)?;

        debug!(domain = %name, owner = %env.caller, expiration_date, price, "domain registered");
        env.events.push(RegistryEvent::DomainRegistered {
            name_hash: key,
            owner: env.caller,
            expiration_date,
            price,
        });
        Ok(())
    }

    /// `renewDomain`: extend a live rental.
    pub fn renew_domain(
        &mut self,
        env: &mut MessageEnv,
        domain: &str,
        duration: Moment,
    ) -> Result<(), ContractError> {
        let key = name_hash(domain);
        env.gas.charge(costs::STORAGE_OP)?;
        let data = self
            .storage
            .domains
            .get(&key)
            .cloned()
            .ok_or(ContractError::DomainNotFound)?;
        if data.owner != env.caller {
            return Err(ContractError::NotOwner);
        }
        if data.is_expired(env.now) {
            // Lapsed rentals go through release + a fresh registration.
            return Err(ContractError::DomainNotFound);
        }

        let price = rent_price(domain, duration);
        if env.transferred_value < price {
            return Err(ContractError::InsufficientPayment {
                required: price,
                transferred: env.transferred_value,
            });
        }

        let expiration_date = data.expiration_date.saturating_add(duration);
        env.gas.charge(costs::STORAGE_OP)?;
        if let Some(d) = self.storage.domains.get_mut(&key) {
            d.expiration_date = expiration_date;
        }
        if let Some(refund) = self.storage.refunds.get_mut(&key) {
            refund.expiration_date = expiration_date;
            refund.paid_price = refund.paid_price.saturating_add(price);
        }
        self.storage.lock(env.caller, price);

        let excess = env.transferred_value.saturating_sub(price);
        env.pay_out(env.caller, excess)?;

        debug!(domain, expiration_date, added = price, "domain renewed");
        env.events.push(RegistryEvent::DomainRenewed {
            name_hash: key,
            expiration_date,
            added: price,
        });
        Ok(())
    }

    /// `releaseDomain`: clear an expired name, refunding its former owner.
    ///
    /// Callable by anyone; the locked rent always goes back to whoever
    /// owned the name.
    pub fn release_domain(&mut self, env: &mut MessageEnv, domain: &str) -> Result<(), ContractError> {
        let key = name_hash(domain);
        env.gas.charge(costs::STORAGE_OP)?;
        let data = self
            .storage
            .domains
            .get(&key)
            .cloned()
            .ok_or(ContractError::DomainNotFound)?;
        if !data.is_expired(env.now) {
            return Err(ContractError::NotExpired);
        }
        self.release_expired(env, key, &data)
    }

    /// `claimRefund`: the former owner withdraws the locked rent after
    /// expiry. Returns the amount paid out.
    pub fn claim_refund(
        &mut self,
        env: &mut MessageEnv,
        domain: &str,
    ) -> Result<Balance, ContractError> {
        let key = name_hash(domain);
        env.gas.charge(costs::STORAGE_OP)?;
        let data = self
            .storage
            .domains
            .get(&key)
            .cloned()
            .ok_or(ContractError::NothingToRefund)?;
        if data.owner != env.caller {
            return Err(ContractError::NotOwner);
        }
        if !data.is_expired(env.now) {
            return Err(ContractError::NotExpired);
        }

        let amount = self
            .storage
            .refunds
            .get(&key)
            .map(|r| r.paid_price)
            .unwrap_or_default();
        self.release_expired(env, key, &data)?;

        env.events.push(RegistryEvent::RefundClaimed {
            name_hash: key,
            who: env.caller,
            amount,
        });
        Ok(amount)
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Removes an expired domain and pays the locked rent back to its
    /// former owner.
    fn release_expired(
        &mut self,
        env: &mut MessageEnv,
        key: Hash,
        data: &DomainData,
    ) -> Result<(), ContractError> {
        env.gas.charge(costs::STORAGE_OP)?;
        let refund = self.storage.refunds.remove(&key);
        self.storage.domains.remove(&key);

        if let Some(refund) = refund {
            self.storage.unlock(&data.owner, refund.paid_price);
            env.pay_out(data.owner, refund.paid_price)?;
        }

        debug!(name_hash = %key, previous_owner = %data.owner, "domain released");
        env.events.push(RegistryEvent::DomainReleased {
            name_hash: key,
            previous_owner: data.owner,
        });
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
