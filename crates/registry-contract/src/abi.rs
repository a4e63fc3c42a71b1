//! # Call ABI
//!
//! Selector table, call wire encoding, and the dispatcher. A call is
//! `selector ++ bincode(args tuple)`; output is bincode of
//! `Result<T, ContractError>`. Selectors here must match the metadata
//! JSON shipped with the workspace.
//!
//! Mutating messages run against a working copy of storage; the copy is
//! committed only when the message succeeds, so failed calls leave no
//! state change behind.

use crate::domain::entities::GasMeter;
use crate::domain::invariants::check_all_invariants;
use crate::errors::ContractError;
use crate::events::RegistryEvent;
use crate::registry::{DomainRegistry, MessageEnv};
use registry_types::{AccountId, Balance, Hash, Moment, Weight};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

/// A 4-byte message selector.
pub type Selector = [u8; 4];

/// Selectors for every message, as recorded in the contract metadata.
pub mod selectors {
    use super::Selector;

    /// `feePerLetter()`
    pub const FEE_PER_LETTER: Selector = [0x3a, 0x2d, 0x9f, 0x10];
    /// `domainLength(domain)`
    pub const DOMAIN_LENGTH: Selector = [0x7c, 0x4f, 0x0b, 0x2e];
    /// `generateSecret(domain, salt)`
    pub const GENERATE_SECRET: Selector = [0x91, 0xd0, 0xc5, 0xaa];
    /// `getDomainData(domain)`
    pub const GET_DOMAIN_DATA: Selector = [0x2f, 0x86, 0x5b, 0xd9];
    /// `rentPrice(domain, duration)`
    pub const RENT_PRICE: Selector = [0x8b, 0x5a, 0x70, 0xe3];
    /// `requestDomain(secret)`
    pub const REQUEST_DOMAIN: Selector = [0x44, 0xc9, 0x7e, 0x11];
    /// `registerDomain(domain, salt, duration, metadata)`
    pub const REGISTER_DOMAIN: Selector = [0xd3, 0xf1, 0xaa, 0x27];
    /// `renewDomain(domain, duration)`
    pub const RENEW_DOMAIN: Selector = [0x65, 0xe8, 0x40, 0x2b];
    /// `releaseDomain(domain)`
    pub const RELEASE_DOMAIN: Selector = [0xba, 0x0f, 0x2e, 0x54];
    /// `claimRefund(domain)`
    pub const CLAIM_REFUND: Selector = [0x0c, 0xd8, 0xa7, 0x6f];
}

/// Host-supplied context of one call.
#[derive(Debug, Clone, Copy)]
pub struct CallContext {
    /// The calling account.
    pub caller: AccountId,
    /// Value attached to the call.
    pub transferred_value: Balance,
    /// Current chain time, milliseconds.
    pub now: Moment,
    /// Gas limit for the call.
    pub gas_limit: Weight,
}

/// What one dispatched call produced.
#[derive(Debug, Clone)]
pub struct CallOutcome {
    /// bincode of `Result<T, ContractError>`.
    pub data: Vec<u8>,
    /// Weight the call consumed.
    pub weight_consumed: Weight,
    /// Events emitted. Empty when the call failed.
    pub events: Vec<RegistryEvent>,
    /// Transfers out of the contract account. Empty when the call failed.
    pub pay_outs: Vec<(AccountId, Balance)>,
    /// The failure, if the call failed.
    pub error: Option<ContractError>,
}

/// Encodes a call: selector followed by the bincode of the argument tuple.
pub fn encode_call<A: Serialize>(selector: Selector, args: &A) -> Result<Vec<u8>, ContractError> {
    let mut out = selector.to_vec();
    let encoded =
        bincode::serialize(args).map_err(|e| ContractError::Decoding(e.to_string()))?;
    out.extend_from_slice(&encoded);
    Ok(out)
}

fn decode_args<A: DeserializeOwned>(bytes: &[u8]) -> Result<A, ContractError> {
    bincode::deserialize(bytes).map_err(|e| ContractError::Decoding(e.to_string()))
}

fn encode_output<T: Serialize>(result: &Result<T, ContractError>) -> Vec<u8> {
    // Result encoding cannot itself fail for the types used here.
    bincode::serialize(result).unwrap_or_default()
}

fn input_cost(len: usize) -> Weight {
    use crate::domain::services::costs::PER_INPUT_BYTE;
    let len = len as u64;
    Weight::from_parts(
        PER_INPUT_BYTE.ref_time.saturating_mul(len),
        PER_INPUT_BYTE.proof_size.saturating_mul(len),
    )
}

/// Dispatches a call against the registry.
///
/// Read-only messages never touch storage. Mutating messages run on a
/// working copy that replaces the live storage only on success.
pub fn dispatch(registry: &mut DomainRegistry, ctx: CallContext, input: &[u8]) -> CallOutcome {
    let mut gas = GasMeter::new(ctx.gas_limit);
    let entry_cost = crate::domain::services::costs::BASE_CALL.saturating_add(input_cost(input.len()));
    if let Err(err) = gas.charge(entry_cost) {
        return failure(gas.consumed(), err);
    }

    if input.len() < 4 {
        return failure(
            gas.consumed(),
            ContractError::Decoding("input shorter than a selector".into()),
        );
    }
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&input[..4]);
    let args = &input[4..];
    trace!(selector = ?selector, input_len = input.len(), "dispatching call");

    match selector {
        // Read-only messages.
        selectors::FEE_PER_LETTER => {
            let output = Ok(registry.fee_per_letter());
            success(&output, gas.consumed(), Vec::new(), Vec::new())
        }
        selectors::DOMAIN_LENGTH => match decode_args::<(String,)>(args) {
            Ok((domain,)) => {
                let output = Ok(registry.domain_length(&domain));
                success(&output, gas.consumed(), Vec::new(), Vec::new())
            }
            Err(err) => failure(gas.consumed(), err),
        },
        selectors::GENERATE_SECRET => match decode_args::<(String, Hash)>(args) {
            Ok((domain, salt)) => {
                let output = Ok(registry.generate_secret(&domain, &salt));
                success(&output, gas.consumed(), Vec::new(), Vec::new())
            }
            Err(err) => failure(gas.consumed(), err),
        },
        selectors::GET_DOMAIN_DATA => match decode_args::<(String,)>(args) {
            Ok((domain,)) => {
                let output = Ok(registry.get_domain_data(ctx.now, &domain));
                success(&output, gas.consumed(), Vec::new(), Vec::new())
            }
            Err(err) => failure(gas.consumed(), err),
        },
        selectors::RENT_PRICE => match decode_args::<(String, Moment)>(args) {
            Ok((domain, duration)) => {
                let output = Ok(registry.rent_price(&domain, duration));
                success(&output, gas.consumed(), Vec::new(), Vec::new())
            }
            Err(err) => failure(gas.consumed(), err),
        },

        // Mutating messages.
        selectors::REQUEST_DOMAIN => match decode_args::<(Hash,)>(args) {
            Ok((secret,)) => mutate(registry, ctx, gas, |registry, env| {
                registry.request_domain(env, secret)
            }),
            Err(err) => failure(gas.consumed(), err),
        },
        selectors::REGISTER_DOMAIN => {
            match decode_args::<(String, Hash, Moment, String)>(args) {
                Ok((domain, salt, duration, metadata)) => {
                    mutate(registry, ctx, gas, |registry, env| {
                        registry.register_domain(env, &domain, salt, duration, metadata)
                    })
                }
                Err(err) => failure(gas.consumed(), err),
            }
        }
        selectors::RENEW_DOMAIN => match decode_args::<(String, Moment)>(args) {
            Ok((domain, duration)) => mutate(registry, ctx, gas, |registry, env| {
                registry.renew_domain(env, &domain, duration)
            }),
            Err(err) => failure(gas.consumed(), err),
        },
        selectors::RELEASE_DOMAIN => match decode_args::<(String,)>(args) {
            Ok((domain,)) => mutate(registry, ctx, gas, |registry, env| {
                registry.release_domain(env, &domain)
            }),
            Err(err) => failure(gas.consumed(), err),
        },
        selectors::CLAIM_REFUND => match decode_args::<(String,)>(args) {
            Ok((domain,)) => mutate(registry, ctx, gas, |registry, env| {
                registry.claim_refund(env, &domain)
            }),
            Err(err) => failure(gas.consumed(), err),
        },

        other => failure(gas.consumed(), ContractError::UnknownSelector(other)),
    }
}

/// Runs a mutating message on a working copy, committing only on success.
fn mutate<T, F>(
    registry: &mut DomainRegistry,
    ctx: CallContext,
    gas: GasMeter,
    f: F,
) -> CallOutcome
where
    T: Serialize,
    F: FnOnce(&mut DomainRegistry, &mut MessageEnv) -> Result<T, ContractError>,
{
    let snapshot = registry.storage.clone();
    let mut env = MessageEnv {
        caller: ctx.caller,
        transferred_value: ctx.transferred_value,
        now: ctx.now,
        gas,
        events: Vec::new(),
        pay_outs: Vec::new(),
    };

    match f(registry, &mut env) {
        Ok(value) => {
            debug_assert!(check_all_invariants(&registry.storage).is_ok());
            success(&Ok(value), env.gas.consumed(), env.events, env.pay_outs)
        }
        Err(err) => {
            registry.storage = snapshot;
            failure(env.gas.consumed(), err)
        }
    }
}

fn success<T: Serialize>(
    output: &Result<T, ContractError>,
    weight_consumed: Weight,
    events: Vec<RegistryEvent>,
    pay_outs: Vec<(AccountId, Balance)>,
) -> CallOutcome {
    CallOutcome {
        data: encode_output(output),
        weight_consumed,
        events,
        pay_outs,
        error: None,
    }
}

fn failure(weight_consumed: Weight, err: ContractError) -> CallOutcome {
    CallOutcome {
        data: encode_output::<()>(&Err(err.clone())),
        weight_consumed,
        events: Vec::new(),
        pay_outs: Vec::new(),
        error: Some(err),
    }
}

// =============================================================================
// TESTS
// =============================================================================
