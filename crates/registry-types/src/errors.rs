//! # Error Types
//!
//! Errors for constructing and parsing the shared value types.

use thiserror::Error;

/// Errors raised while parsing or constructing shared types.
#[derive(Debug, Clone, Error)]
pub enum TypesError {
    /// Hex decoding failed.
    #[error("invalid hex: {0}")]
    Hex(String),

    /// A fixed-length field was fed the wrong number of bytes.
    #[error("bad length: expected {expected} bytes, got {actual}")]
    BadLength {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },
}
