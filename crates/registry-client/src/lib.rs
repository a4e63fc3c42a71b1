//! # Registry Client
//!
//! The typed client for the registry node: connect to an endpoint, query
//! headers and balances (current or at a historical block), and drive the
//! deployed contract through its ABI metadata — read-only `query` calls
//! and state-changing `tx(...).sign_and_send(...)` calls.
//!
//! ## Usage
//!
//! ```ignore
//! use registry_client::prelude::*;
//!
//! let api = Api::connect(handle).await?;
//! let header = api.chain_get_header().await?;
//!
//! let metadata = ContractMetadata::from_file("contract-metadata/domain_registry.json")?;
//! let contract = Contract::new(&api, metadata, contract_address);
//!
//! let price: Result<Balance, ContractError> = contract
//!     .query(&alice, "rentPrice", &("testDomain".to_string(), duration), &CallOptions::default())
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod contract;
pub mod errors;
pub mod metadata;
pub mod signer;
pub mod weights;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::api::{Api, ApiAt};
    pub use crate::contract::{CallOptions, Contract};
    pub use crate::errors::ClientError;
    pub use crate::metadata::{ContractMetadata, MessageSpec};
    pub use crate::signer::Signer;
    pub use crate::weights::{max_call_weight, MAX_CALL_REF_TIME, PROOF_SIZE};
}
