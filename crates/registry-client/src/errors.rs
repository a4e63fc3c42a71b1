//! # Error Types
//!
//! Everything the client can fail with, from metadata parsing to node
//! rejections.

use registry_node::prelude::NodeError;
use thiserror::Error;

/// Client-side errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Metadata file could not be read.
    #[error("metadata io: {0}")]
    Io(String),

    /// Metadata JSON did not parse.
    #[error("metadata parse: {0}")]
    Metadata(String),

    /// No message with this label exists in the metadata.
    #[error("unknown message: {0}")]
    UnknownMessage(String),

    /// A selector in the metadata was not 4 hex bytes.
    #[error("bad selector for {label}: {selector}")]
    BadSelector {
        /// The message label.
        label: String,
        /// The offending selector string.
        selector: String,
    },

    /// Value attached to a non-payable message.
    #[error("message {0} is not payable")]
    NotPayable(String),

    /// Argument encoding failed.
    #[error("argument encoding: {0}")]
    Encoding(String),

    /// Output decoding failed.
    #[error("output decoding: {0}")]
    Decoding(String),

    /// The node rejected the request.
    #[error("node: {0}")]
    Node(#[from] NodeError),

    /// The node answered with an unexpected response variant.
    #[error("unexpected response, expected {0}")]
    UnexpectedResponse(&'static str),
}
