//! End-to-end flows driven through the RPC surface: a spawned dev node,
//! a connected API, and metadata-driven contract calls.

pub mod chain_queries;
pub mod commit_reveal;
pub mod refunds;
pub mod renewals;
