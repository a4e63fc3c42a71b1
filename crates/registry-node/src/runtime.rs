//! # Runtime
//!
//! Applies extrinsics: signature and nonce checks, value transfer into the
//! contract, dispatch, payout application, and instant block sealing.
//!
//! Signature, nonce and payment failures are pool-level rejections and
//! never reach a block. Contract failures are sealed into a block and
//! reported through `TxStatus::dispatch_error`.

use crate::accounts::Accounts;
use crate::chain::Chain;
use crate::config::NodeConfig;
use crate::errors::NodeError;
use crate::extrinsic::SignedExtrinsic;
use crate::rpc::requests::{ContractQueryResult, TxStatus};
use registry_contract::prelude::{dispatch, CallContext, ContractError, DomainRegistry};
use registry_types::{AccountId, AccountInfo, DispatchError, Hash, Header, Moment, Weight};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The node's state machine.
#[derive(Debug)]
pub struct Runtime {
    accounts: Accounts,
    chain: Chain,
    contracts: HashMap<AccountId, DomainRegistry>,
    now: Moment,
    block_time: Moment,
}

impl Runtime {
    /// Builds genesis state from a node configuration.
    #[must_use]
    pub fn new(config: NodeConfig) -> Self {
        let mut accounts = Accounts::new();
        for (who, amount) in &config.balances {
            accounts.endow(*who, *amount);
        }

        let mut contracts = HashMap::new();
        contracts.insert(
            config.contract_address,
            DomainRegistry::new(config.registry_config),
        );

        let chain = Chain::genesis(accounts.snapshot());
        info!(
            contract = %config.contract_address,
            start_time = config.start_time,
            "genesis sealed, registry deployed"
        );

        Self {
            accounts,
            chain,
            contracts,
            now: config.start_time,
            block_time: config.block_time,
        }
    }

    /// Current chain time.
    #[must_use]
    pub fn now(&self) -> Moment {
        self.now
    }

    /// The latest header.
    #[must_use]
    pub fn best_header(&self) -> Header {
        self.chain.best_header().clone()
    }

    /// Header lookup, latest when `at` is `None`.
    pub fn header(&self, at: Option<Hash>) -> Result<Header, NodeError> {
        match at {
            None => Ok(self.best_header()),
            Some(hash) => self
                .chain
                .header_at(&hash)
                .cloned()
                .ok_or(NodeError::UnknownBlock(hash)),
        }
    }

    /// Account info, historically at `at` or at the latest state.
    pub fn account_info(
        &self,
        who: &AccountId,
        at: Option<Hash>,
    ) -> Result<AccountInfo, NodeError> {
        match at {
            None => Ok(self.accounts.info(who)),
            Some(hash) => {
                let snapshot = self
                    .chain
                    .snapshot_at(&hash)
                    .ok_or(NodeError::UnknownBlock(hash))?;
                Ok(snapshot.get(who).copied().unwrap_or_default())
            }
        }
    }

    /// Moves dev-chain time forward.
    pub fn set_timestamp(&mut self, now: Moment) -> Result<Moment, NodeError> {
        if now < self.now {
            return Err(NodeError::TimestampMustAdvance {
                current: self.now,
                requested: now,
            });
        }
        self.now = now;
        Ok(self.now)
    }

    /// Runs a read-only contract call against current state.
    ///
    /// The call executes on a scratch copy; even a buggy mutating selector
    /// sent through `query` cannot change state.
    pub fn contract_query(
        &self,
        caller: AccountId,
        dest: AccountId,
        gas_limit: Weight,
        input: &[u8],
    ) -> Result<ContractQueryResult, NodeError> {
        let registry = self
            .contracts
            .get(&dest)
            .ok_or(NodeError::ContractNotFound(dest))?;

        let mut scratch = registry.clone();
        let outcome = dispatch(
            &mut scratch,
            CallContext {
                caller,
                transferred_value: 0,
                now: self.now,
                gas_limit,
            },
            input,
        );

        Ok(ContractQueryResult {
            data: outcome.data,
            weight_consumed: outcome.weight_consumed,
        })
    }

    /// Applies a signed extrinsic and seals a block around it.
    pub fn apply_extrinsic(&mut self, xt: &SignedExtrinsic) -> Result<TxStatus, NodeError> {
        // Pool-level checks: signature, nonce, ability to pay.
        if !xt.verify() {
            warn!(signer = %xt.signer, "extrinsic signature rejected");
            return Err(NodeError::InvalidSignature(xt.signer));
        }
        let expected_nonce = self.accounts.info(&xt.signer).nonce;
        if xt.nonce != expected_nonce {
            return Err(NodeError::InvalidNonce {
                expected: expected_nonce,
                got: xt.nonce,
            });
        }
        let registry = self
            .contracts
            .get(&xt.call.dest)
            .ok_or(NodeError::ContractNotFound(xt.call.dest))?
            .clone();

        let available = self.accounts.info(&xt.signer).free;
        if available < xt.call.value {
            return Err(NodeError::InsufficientFunds {
                who: xt.signer,
                available,
                required: xt.call.value,
            });
        }

        self.accounts.bump_nonce(&xt.signer);
        self.accounts
            .transfer(&xt.signer, &xt.call.dest, xt.call.value)?;

        // Dispatch against a working registry; commit everything or
        // nothing.
        let mut working = registry;
        let outcome = dispatch(
            &mut working,
            CallContext {
                caller: xt.signer,
                transferred_value: xt.call.value,
                now: self.now,
                gas_limit: xt.call.gas_limit,
            },
            &xt.call.input,
        );

        let dispatch_error = match &outcome.error {
            None => {
                // Payouts come from rent held by the contract account; the
                // transfer cannot fail unless the contract is insolvent.
                for (to, amount) in &outcome.pay_outs {
                    self.accounts.transfer(&xt.call.dest, to, *amount)?;
                }
                let mut touched: Vec<AccountId> =
                    outcome.pay_outs.iter().map(|(to, _)| *to).collect();
                touched.push(xt.signer);
                for who in touched {
                    let locked = working
                        .storage
                        .locked_balance
                        .get(&who)
                        .copied()
                        .unwrap_or_default();
                    self.accounts.set_reserved(&who, locked);
                }
                self.contracts.insert(xt.call.dest, working);
                None
            }
            Some(err) => {
                // Roll the value transfer back; contract state was never
                // committed.
                self.accounts
                    .transfer(&xt.call.dest, &xt.signer, xt.call.value)?;
                Some(to_dispatch_error(err))
            }
        };

        let header = self.seal_block(xt);
        debug!(
            block = header.number,
            hash = %header.hash,
            error = ?dispatch_error,
            events = outcome.events.len(),
            "extrinsic applied"
        );

        Ok(TxStatus {
            in_block: header.hash,
            events: outcome.events,
            dispatch_error,
        })
    }

    fn seal_block(&mut self, xt: &SignedExtrinsic) -> Header {
        let extrinsics_root = extrinsics_root(xt);
        self.now = self.now.saturating_add(self.block_time);
        self.chain.seal_block(extrinsics_root, self.accounts.snapshot())
    }
}

fn extrinsics_root(xt: &SignedExtrinsic) -> Hash {
    let bytes = bincode::serialize(xt).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Hash::new(hasher.finalize().into())
}

fn to_dispatch_error(err: &ContractError) -> DispatchError {
    match err {
        ContractError::OutOfGas => DispatchError::OutOfGas,
        other => DispatchError::Module(other.to_module_error()),
    }
}
