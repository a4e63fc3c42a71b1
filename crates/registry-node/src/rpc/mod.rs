//! # RPC Layer
//!
//! The endpoint clients connect to: request/response shapes, correlation
//! IDs, and the node task that serves them.

pub mod correlation;
pub mod handler;
pub mod requests;
