//! # Registry Node - Instant-Seal Development Chain
//!
//! A single-node development chain hosting the domain registry contract.
//! Every submitted extrinsic seals one block; account balances are
//! snapshotted per block so historical queries resolve at any known hash.
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | Accounts | `accounts.rs` | Balance/nonce ledger |
//! | Chain | `chain.rs` | Headers + per-block snapshots |
//! | Extrinsics | `extrinsic.rs` | Signed contract calls |
//! | Runtime | `runtime.rs` | Extrinsic application, contract hosting |
//! | RPC | `rpc/` | The endpoint clients connect to |
//!
//! ## Usage
//!
//! ```ignore
//! use registry_node::prelude::*;
//!
//! let handle = Node::spawn(NodeConfig::dev());
//! let response = handle.call(RpcRequest::ChainGetHeader { at: None }).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accounts;
pub mod chain;
pub mod config;
pub mod errors;
pub mod extrinsic;
pub mod rpc;
pub mod runtime;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::accounts::Accounts;
    pub use crate::chain::Chain;
    pub use crate::config::NodeConfig;
    pub use crate::errors::NodeError;
    pub use crate::extrinsic::{ContractCall, SignedExtrinsic};
    pub use crate::rpc::correlation::CorrelationId;
    pub use crate::rpc::handler::{Node, NodeHandle};
    pub use crate::rpc::requests::{
        ChainProperties, ContractQueryResult, RpcRequest, RpcResponse, TxStatus,
    };
    pub use crate::runtime::Runtime;
}

/// Chain name reported through `SystemProperties`.
pub const CHAIN_NAME: &str = "registry-dev";
