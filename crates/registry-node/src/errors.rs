//! # Error Types
//!
//! Failures raised by the node outside of contract dispatch. These are
//! pool-level rejections and transport faults; a contract failure inside a
//! sealed block is reported through `TxStatus::dispatch_error` instead.

use registry_types::{AccountId, Balance, Hash};
use thiserror::Error;

/// Errors the node reports to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// The RPC channel to the node task is gone.
    #[error("node endpoint closed")]
    EndpointClosed,

    /// A historical query referenced an unknown block hash.
    #[error("unknown block {0:?}")]
    UnknownBlock(Hash),

    /// The extrinsic signature did not verify.
    #[error("invalid extrinsic signature for {0}")]
    InvalidSignature(AccountId),

    /// The extrinsic nonce does not match the account's next nonce.
    #[error("invalid nonce: expected {expected}, got {got}")]
    InvalidNonce {
        /// The account's next nonce.
        expected: u64,
        /// What the extrinsic carried.
        got: u64,
    },

    /// The signer cannot pay the transferred value.
    #[error("insufficient funds: {who} has {available}, needs {required}")]
    InsufficientFunds {
        /// The paying account.
        who: AccountId,
        /// Spendable balance.
        available: Balance,
        /// What the call required.
        required: Balance,
    },

    /// No contract is deployed at the destination account.
    #[error("no contract at {0}")]
    ContractNotFound(AccountId),

    /// Dev timestamps may only move forward.
    #[error("timestamp must advance: current {current}, requested {requested}")]
    TimestampMustAdvance {
        /// Current chain time.
        current: u128,
        /// The rejected timestamp.
        requested: u128,
    },
}
