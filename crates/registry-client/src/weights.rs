//! # Call Weights
//!
//! The gas-limit constants every contract call defaults to when the
//! caller does not override them.

use registry_types::Weight;

/// Maximum ref-time a call may consume: `500_000_000_000 - 1`.
pub const MAX_CALL_REF_TIME: u64 = 500_000_000_000 - 1;

/// Proof size allowance per call.
pub const PROOF_SIZE: u64 = 1_000_000;

/// The default gas limit: [`MAX_CALL_REF_TIME`] / [`PROOF_SIZE`].
#[must_use]
pub fn max_call_weight() -> Weight {
    Weight::from_parts(MAX_CALL_REF_TIME, PROOF_SIZE)
}
