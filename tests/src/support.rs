//! Shared fixtures for the integration suite.
//!
//! Every test spawns its own dev node so flows cannot interfere with one
//! another; the fixture wires the node handle, the connected API, and a
//! contract handle bound to the dev registry address.

use registry_client::prelude::{Api, CallOptions, Contract, ContractMetadata, Signer};
use registry_node::config::DEV_CONTRACT_ADDRESS;
use registry_node::prelude::{Node, NodeConfig, RpcRequest, RpcResponse, TxStatus};
use registry_types::{AccountId, Hash, Moment};

/// Shortest rental the dev registry accepts: 30 days in milliseconds.
pub const MIN_DURATION: Moment = 2_592_000_000;

/// A fresh dev chain with a connected API and a bound contract handle.
pub struct TestChain {
    /// The connected API.
    pub api: Api,
    /// Handle to the deployed registry.
    pub contract: Contract,
    /// The node configuration the chain was spawned with.
    pub config: NodeConfig,
}

/// Path to the registry metadata JSON checked into the workspace.
#[must_use]
pub fn metadata_path() -> String {
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../contract-metadata/domain_registry.json"
    )
    .to_string()
}

/// Spawns a dev node with default dev balances and connects to it.
pub async fn spawn_dev_chain() -> TestChain {
    spawn_chain(NodeConfig::dev()).await
}

/// Spawns a node with the given configuration and connects to it.
pub async fn spawn_chain(config: NodeConfig) -> TestChain {
    let handle = Node::spawn(config.clone());
    let api = Api::connect(handle).await.expect("connect to dev node");
    let metadata =
        ContractMetadata::from_file(&metadata_path()).expect("load registry metadata");
    let contract = Contract::new(&api, metadata, DEV_CONTRACT_ADDRESS);
    TestChain {
        api,
        contract,
        config,
    }
}

impl TestChain {
    /// Moves chain time forward through the dev timestamp facility and
    /// returns the time the node settled on.
    pub async fn set_time(&self, now: Moment) -> Moment {
        match self
            .api
            .handle()
            .call(RpcRequest::DevSetTimestamp { now })
            .await
            .expect("set dev timestamp")
        {
            RpcResponse::Timestamp(now) => now,
            other => panic!("unexpected response: {other:?}"),
        }
    }

    /// Commit-and-reveal a name for `signer`, attaching exactly the rent.
    /// Returns the reveal's transaction status and the price paid.
    pub async fn register(
        &self,
        signer: &Signer,
        domain: &str,
        salt: &Hash,
        duration: Moment,
    ) -> (TxStatus, u128) {
        let options = CallOptions::default();
        let secret = registry_contract::prelude::generate_secret(domain, salt);

        let requested = self
            .contract
            .tx("requestDomain", &(secret,), &options, 0)
            .expect("build requestDomain")
            .sign_and_send(signer)
            .await
            .expect("submit requestDomain");
        assert!(
            requested.is_success(),
            "requestDomain failed: {:?}",
            requested.dispatch_error
        );

        let price = registry_contract::prelude::rent_price(domain, duration);
        let status = self
            .contract
            .tx(
                "registerDomain",
                &(
                    domain.to_string(),
                    *salt,
                    duration,
                    String::new(),
                ),
                &options,
                price,
            )
            .expect("build registerDomain")
            .sign_and_send(signer)
            .await
            .expect("submit registerDomain");
        (status, price)
    }
}

/// A deterministic 32-byte salt for tests that only need one.
#[must_use]
pub fn salt(tag: u8) -> Hash {
    Hash::new([tag; 32])
}

/// The three dev signers, in the order the dev chain endows them.
#[must_use]
pub fn dev_signers() -> (Signer, Signer, Signer) {
    (Signer::alice(), Signer::bob(), Signer::charlie())
}

/// Convenience: the three dev account ids.
#[must_use]
pub fn dev_accounts() -> (AccountId, AccountId, AccountId) {
    (
        Signer::alice().account_id(),
        Signer::bob().account_id(),
        Signer::charlie().account_id(),
    )
}
