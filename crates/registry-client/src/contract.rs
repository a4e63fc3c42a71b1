//! # Contract Handle
//!
//! Drives a deployed contract through its metadata: read-only `query`
//! calls and signed `tx(...).sign_and_send(...)` submissions. The call
//! wire is `selector ++ bincode(args tuple)`; outputs decode as
//! `Result<T, E>` where `E` is the contract's error type.

use crate::api::Api;
use crate::errors::ClientError;
use crate::metadata::ContractMetadata;
use crate::signer::Signer;
use crate::weights::max_call_weight;
use registry_node::prelude::{
    ContractCall, RpcRequest, RpcResponse, SignedExtrinsic, TxStatus,
};
use registry_node::extrinsic::signing_payload;
use registry_types::{AccountId, Balance, Weight};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Per-call options: gas limit and storage deposit limit.
///
/// Defaults to the maximum call weight and an unlimited deposit.
#[derive(Debug, Clone, Copy)]
pub struct CallOptions {
    /// Gas limit for the call.
    pub gas_limit: Weight,
    /// Storage deposit limit; `None` means unlimited. The dev node levies
    /// no storage deposit, so any limit passes through unenforced.
    pub storage_deposit_limit: Option<Balance>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            gas_limit: max_call_weight(),
            storage_deposit_limit: None,
        }
    }
}

/// A handle to one deployed contract.
#[derive(Debug)]
pub struct Contract {
    api: Api,
    metadata: ContractMetadata,
    address: AccountId,
}

impl Contract {
    /// Binds metadata to a deployed contract address.
    #[must_use]
    pub fn new(api: &Api, metadata: ContractMetadata, address: AccountId) -> Self {
        Self {
            api: api.clone(),
            metadata,
            address,
        }
    }

    /// The contract's on-chain address.
    #[must_use]
    pub fn address(&self) -> AccountId {
        self.address
    }

    /// The bound metadata.
    #[must_use]
    pub fn metadata(&self) -> &ContractMetadata {
        &self.metadata
    }

    fn encode_input<A: Serialize>(&self, label: &str, args: &A) -> Result<Vec<u8>, ClientError> {
        let message = self.metadata.message(label)?;
        let selector = message.selector_bytes()?;
        let mut input = selector.to_vec();
        let encoded =
            bincode::serialize(args).map_err(|e| ClientError::Encoding(e.to_string()))?;
        input.extend_from_slice(&encoded);
        Ok(input)
    }

    /// Read-only call. Decodes the output as `Result<R, E>`: `Ok` carries
    /// the message's return value, `Err` the contract's own error.
    pub async fn query<A, R, E>(
        &self,
        caller: &AccountId,
        label: &str,
        args: &A,
        options: &CallOptions,
    ) -> Result<Result<R, E>, ClientError>
    where
        A: Serialize,
        R: DeserializeOwned,
        E: DeserializeOwned,
    {
        let input = self.encode_input(label, args)?;
        debug!(label, caller = %caller, "contract query");

        let result = match self
            .api
            .handle()
            .call(RpcRequest::ContractQuery {
                caller: *caller,
                dest: self.address,
                gas_limit: options.gas_limit,
                storage_deposit_limit: options.storage_deposit_limit,
                input,
            })
            .await?
        {
            RpcResponse::ContractResult(result) => result,
            _ => return Err(ClientError::UnexpectedResponse("ContractResult")),
        };

        bincode::deserialize(&result.data).map_err(|e| ClientError::Decoding(e.to_string()))
    }

    /// Builds a state-changing call, ready to sign and send.
    ///
    /// Fails early when the label is unknown or value is attached to a
    /// non-payable message.
    pub fn tx<A: Serialize>(
        &self,
        label: &str,
        args: &A,
        options: &CallOptions,
        value: Balance,
    ) -> Result<TxBuilder<'_>, ClientError> {
        let message = self.metadata.message(label)?;
        if value > 0 && !message.payable {
            return Err(ClientError::NotPayable(label.to_string()));
        }
        let input = self.encode_input(label, args)?;
        Ok(TxBuilder {
            contract: self,
            label: label.to_string(),
            input,
            options: *options,
            value,
        })
    }
}

/// A built but unsigned contract call.
#[derive(Debug)]
pub struct TxBuilder<'a> {
    contract: &'a Contract,
    label: String,
    input: Vec<u8>,
    options: CallOptions,
    value: Balance,
}

impl TxBuilder<'_> {
    /// Signs with the signer's current nonce and submits. The returned
    /// status carries the containing block, emitted events, and the
    /// dispatch error if the call failed on-chain.
    pub async fn sign_and_send(self, signer: &Signer) -> Result<TxStatus, ClientError> {
        let who = signer.account_id();
        let nonce = self.contract.api.account(&who).await?.nonce;

        let call = ContractCall {
            dest: self.contract.address,
            value: self.value,
            gas_limit: self.options.gas_limit,
            storage_deposit_limit: self.options.storage_deposit_limit,
            input: self.input,
        };
        let signature = signer.sign(&signing_payload(&call, nonce));
        let xt = SignedExtrinsic {
            call,
            nonce,
            signer: who,
            signature,
        };

        debug!(label = %self.label, signer = %who, nonce, value = self.value, "sign and send");
        match self
            .contract
            .api
            .handle()
            .call(RpcRequest::SubmitExtrinsic { xt })
            .await?
        {
            RpcResponse::ExtrinsicStatus(status) => Ok(status),
            _ => Err(ClientError::UnexpectedResponse("ExtrinsicStatus")),
        }
    }
}
