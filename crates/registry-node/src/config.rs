//! # Node Configuration
//!
//! Genesis balances, the contract deployment, and chain timing.

use registry_contract::prelude::RegistryConfig;
use registry_types::{AccountId, Balance, Moment};

/// Well-known address the dev chain deploys the registry at.
pub const DEV_CONTRACT_ADDRESS: AccountId = AccountId::new([0xC0; 32]);

/// Balance every dev account starts with.
pub const DEV_ENDOWMENT: Balance = 1_000_000_000_000_000;

/// Configuration of one node instance.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Genesis balances.
    pub balances: Vec<(AccountId, Balance)>,
    /// Where the registry contract is deployed.
    pub contract_address: AccountId,
    /// Parameters the registry is instantiated with.
    pub registry_config: RegistryConfig,
    /// Chain time at genesis, milliseconds.
    pub start_time: Moment,
    /// How far chain time advances per sealed block.
    pub block_time: Moment,
    /// RPC channel capacity.
    pub channel_capacity: usize,
}

impl NodeConfig {
    /// The standard dev-chain setup: alice, bob and charlie funded, the
    /// registry deployed with its default parameters.
    #[must_use]
    pub fn dev() -> Self {
        Self {
            balances: vec![
                (AccountId::alice(), DEV_ENDOWMENT),
                (AccountId::bob(), DEV_ENDOWMENT),
                (AccountId::charlie(), DEV_ENDOWMENT),
            ],
            contract_address: DEV_CONTRACT_ADDRESS,
            registry_config: RegistryConfig::default(),
            start_time: 1_700_000_000_000,
            block_time: 6_000,
            channel_capacity: 64,
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::dev()
    }
}
