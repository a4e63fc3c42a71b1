//! # RPC Requests & Responses
//!
//! The full request surface of the node: header lookup, (historical)
//! balance queries, read-only contract queries, signed extrinsic
//! submission, and the dev-chain timestamp facility.

use crate::extrinsic::SignedExtrinsic;
use registry_contract::prelude::RegistryEvent;
use registry_types::{
    AccountId, AccountInfo, Balance, DispatchError, Hash, Header, Moment, Weight,
};
use serde::{Deserialize, Serialize};

/// A request to the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RpcRequest {
    /// Chain identity; used as the readiness ping at connect time.
    SystemProperties,

    /// Header lookup, latest when `at` is `None`.
    ChainGetHeader {
        /// Block hash, or `None` for the best block.
        at: Option<Hash>,
    },

    /// Account info, optionally at a historical block.
    AccountInfo {
        /// The account to look up.
        who: AccountId,
        /// Block hash, or `None` for current state.
        at: Option<Hash>,
    },

    /// Current account info for several accounts at once.
    AccountInfoMulti {
        /// The accounts to look up.
        who: Vec<AccountId>,
    },

    /// Read-only contract call.
    ContractQuery {
        /// The account posing as caller.
        caller: AccountId,
        /// The contract account.
        dest: AccountId,
        /// Gas limit for the call.
        gas_limit: Weight,
        /// Storage deposit limit; `None` means unlimited. The dev node
        /// levies no storage deposit and treats the limit as
        /// informational.
        storage_deposit_limit: Option<Balance>,
        /// Selector plus encoded arguments.
        input: Vec<u8>,
    },

    /// Submit a signed extrinsic; seals one block.
    SubmitExtrinsic {
        /// The signed extrinsic.
        xt: SignedExtrinsic,
    },

    /// Dev facility: move chain time forward.
    DevSetTimestamp {
        /// The new chain time, milliseconds.
        now: Moment,
    },
}

/// A successful response from the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RpcResponse {
    /// Answer to `SystemProperties`.
    Properties(ChainProperties),
    /// Answer to `ChainGetHeader`.
    Header(Header),
    /// Answer to `AccountInfo`.
    Account(AccountInfo),
    /// Answer to `AccountInfoMulti`, in request order.
    Accounts(Vec<AccountInfo>),
    /// Answer to `ContractQuery`.
    ContractResult(ContractQueryResult),
    /// Answer to `SubmitExtrinsic`.
    ExtrinsicStatus(TxStatus),
    /// Answer to `DevSetTimestamp`: the new chain time.
    Timestamp(Moment),
}

/// Chain identity reported at connect time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProperties {
    /// Chain name.
    pub chain_name: String,
    /// Token symbol for display.
    pub token_symbol: String,
    /// Token decimals for display.
    pub token_decimals: u8,
}

/// Result of a read-only contract call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractQueryResult {
    /// bincode of `Result<T, ContractError>`.
    pub data: Vec<u8>,
    /// Weight the call consumed.
    pub weight_consumed: Weight,
}

/// What happened to a submitted extrinsic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxStatus {
    /// The block the extrinsic was sealed into.
    pub in_block: Hash,
    /// Contract events emitted during dispatch.
    pub events: Vec<RegistryEvent>,
    /// The dispatch failure, if the call failed inside the block.
    pub dispatch_error: Option<DispatchError>,
}

impl TxStatus {
    /// True if the dispatch succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.dispatch_error.is_none()
    }
}
