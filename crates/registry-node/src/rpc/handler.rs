//! # RPC Handler
//!
//! The node task and the handle clients hold. Requests travel over an mpsc
//! channel wrapped in a correlation envelope; each one carries a oneshot
//! for its response. The handle is the "endpoint" — cloning it is cheap
//! and every clone talks to the same node.

use crate::config::NodeConfig;
use crate::errors::NodeError;
use crate::rpc::correlation::CorrelationId;
use crate::rpc::requests::{ChainProperties, RpcRequest, RpcResponse};
use crate::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Result type of every RPC call.
pub type RpcResult = Result<RpcResponse, NodeError>;

/// A request envelope: correlation ID plus the request itself.
#[derive(Debug)]
pub struct RpcEnvelope {
    /// Correlation ID for tracing.
    pub correlation_id: CorrelationId,
    /// The request.
    pub request: RpcRequest,
}

struct Inbound {
    envelope: RpcEnvelope,
    reply: oneshot::Sender<RpcResult>,
}

/// Cloneable handle to a running node; the endpoint clients connect to.
#[derive(Debug, Clone)]
pub struct NodeHandle {
    tx: mpsc::Sender<Inbound>,
}

impl NodeHandle {
    /// Sends a request and awaits its response.
    pub async fn call(&self, request: RpcRequest) -> RpcResult {
        let envelope = RpcEnvelope {
            correlation_id: CorrelationId::new(),
            request,
        };
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Inbound { envelope, reply })
            .await
            .map_err(|_| NodeError::EndpointClosed)?;
        rx.await.map_err(|_| NodeError::EndpointClosed)?
    }
}

/// The development node.
pub struct Node;

impl Node {
    /// Spawns a node task and returns the endpoint handle.
    ///
    /// The task runs until every handle is dropped.
    #[must_use]
    pub fn spawn(config: NodeConfig) -> NodeHandle {
        let (tx, mut rx) = mpsc::channel::<Inbound>(config.channel_capacity);
        let mut runtime = Runtime::new(config);

        tokio::spawn(async move {
            info!("node task started");
            while let Some(inbound) = rx.recv().await {
                let correlation_id = inbound.envelope.correlation_id;
                let result = serve(&mut runtime, inbound.envelope.request);
                if let Err(err) = &result {
                    warn!(%correlation_id, error = %err, "rpc request failed");
                } else {
                    debug!(%correlation_id, "rpc request served");
                }
                // A dropped receiver just means the caller gave up waiting.
                let _ = inbound.reply.send(result);
            }
            info!("node task stopped, all handles dropped");
        });

        NodeHandle { tx }
    }
}

fn serve(runtime: &mut Runtime, request: RpcRequest) -> RpcResult {
    match request {
        RpcRequest::SystemProperties => Ok(RpcResponse::Properties(ChainProperties {
            chain_name: crate::CHAIN_NAME.to_string(),
            token_symbol: "UNIT".to_string(),
            token_decimals: 12,
        })),

        RpcRequest::ChainGetHeader { at } => runtime.header(at).map(RpcResponse::Header),

        RpcRequest::AccountInfo { who, at } => {
            runtime.account_info(&who, at).map(RpcResponse::Account)
        }

        RpcRequest::AccountInfoMulti { who } => {
            let infos = who
                .iter()
                .map(|w| runtime.account_info(w, None))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RpcResponse::Accounts(infos))
        }

        RpcRequest::ContractQuery {
            caller,
            dest,
            gas_limit,
            storage_deposit_limit: _,
            input,
        } => runtime
            .contract_query(caller, dest, gas_limit, &input)
            .map(RpcResponse::ContractResult),

        RpcRequest::SubmitExtrinsic { xt } => {
            runtime.apply_extrinsic(&xt).map(RpcResponse::ExtrinsicStatus)
        }

        RpcRequest::DevSetTimestamp { now } => {
            runtime.set_timestamp(now).map(RpcResponse::Timestamp)
        }
    }
}
