//! # Chain API
//!
//! Connecting to a node endpoint and querying it: headers, account info,
//! multi-account queries, and historical reads pinned to a block hash.

use crate::errors::ClientError;
use registry_node::prelude::{ChainProperties, NodeHandle, RpcRequest, RpcResponse};
use registry_types::{AccountId, AccountInfo, Hash, Header};
use tracing::debug;

/// A connected chain API.
#[derive(Debug, Clone)]
pub struct Api {
    handle: NodeHandle,
    properties: ChainProperties,
}

impl Api {
    /// Connects to an endpoint: pings it for its properties and keeps the
    /// handle once it answers.
    pub async fn connect(handle: NodeHandle) -> Result<Self, ClientError> {
        let properties = match handle.call(RpcRequest::SystemProperties).await? {
            RpcResponse::Properties(props) => props,
            _ => return Err(ClientError::UnexpectedResponse("Properties")),
        };
        debug!(chain = %properties.chain_name, "connected");
        Ok(Self { handle, properties })
    }

    /// The chain identity reported at connect time.
    #[must_use]
    pub fn properties(&self) -> &ChainProperties {
        &self.properties
    }

    /// The latest header.
    pub async fn chain_get_header(&self) -> Result<Header, ClientError> {
        match self.handle.call(RpcRequest::ChainGetHeader { at: None }).await? {
            RpcResponse::Header(header) => Ok(header),
            _ => Err(ClientError::UnexpectedResponse("Header")),
        }
    }

    /// Current account info for one account.
    pub async fn account(&self, who: &AccountId) -> Result<AccountInfo, ClientError> {
        match self
            .handle
            .call(RpcRequest::AccountInfo { who: *who, at: None })
            .await?
        {
            RpcResponse::Account(info) => Ok(info),
            _ => Err(ClientError::UnexpectedResponse("Account")),
        }
    }

    /// Current account info for several accounts, in order.
    pub async fn account_multi(
        &self,
        who: &[AccountId],
    ) -> Result<Vec<AccountInfo>, ClientError> {
        match self
            .handle
            .call(RpcRequest::AccountInfoMulti { who: who.to_vec() })
            .await?
        {
            RpcResponse::Accounts(infos) => Ok(infos),
            _ => Err(ClientError::UnexpectedResponse("Accounts")),
        }
    }

    /// An API view pinned to a historical block.
    #[must_use]
    pub fn at(&self, hash: Hash) -> ApiAt<'_> {
        ApiAt { api: self, at: hash }
    }

    /// The underlying endpoint handle.
    #[must_use]
    pub fn handle(&self) -> &NodeHandle {
        &self.handle
    }
}

/// An API view pinned to one block hash.
#[derive(Debug, Clone, Copy)]
pub struct ApiAt<'a> {
    api: &'a Api,
    at: Hash,
}

impl ApiAt<'_> {
    /// The header of the pinned block.
    pub async fn header(&self) -> Result<Header, ClientError> {
        match self
            .api
            .handle
            .call(RpcRequest::ChainGetHeader { at: Some(self.at) })
            .await?
        {
            RpcResponse::Header(header) => Ok(header),
            _ => Err(ClientError::UnexpectedResponse("Header")),
        }
    }

    /// Account info as of the pinned block.
    pub async fn account(&self, who: &AccountId) -> Result<AccountInfo, ClientError> {
        match self
            .api
            .handle
            .call(RpcRequest::AccountInfo {
                who: *who,
                at: Some(self.at),
            })
            .await?
        {
            RpcResponse::Account(info) => Ok(info),
            _ => Err(ClientError::UnexpectedResponse("Account")),
        }
    }
}
