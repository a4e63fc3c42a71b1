//! # Domain Services
//!
//! Pure functions: hashing, secret generation, pricing, and the weight
//! cost table.
//!
//! Pricing and hashing work on raw strings: lookups and price quotes are
//! answered for any input, validation only gates registration.

use registry_types::{Balance, Hash, Moment, Weight};
use sha2::{Digest, Sha256};

/// Weight costs charged by the dispatcher and the messages.
pub mod costs {
    use super::Weight;

    /// Flat cost of entering any message.
    pub const BASE_CALL: Weight = Weight::from_parts(1_000_000, 10_000);
    /// Cost per byte of call input.
    pub const PER_INPUT_BYTE: Weight = Weight::from_parts(1_000, 10);
    /// Cost of one storage read or write.
    pub const STORAGE_OP: Weight = Weight::from_parts(200_000, 1_000);
    /// Cost of scheduling a balance transfer out of the contract.
    pub const TRANSFER: Weight = Weight::from_parts(100_000, 0);
}

/// SHA-256 of the raw name bytes; the storage key for a domain.
#[must_use]
pub fn name_hash(name: &str) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    Hash::new(hasher.finalize().into())
}

/// Commitment hash for commit-reveal: SHA-256 over name bytes then salt.
///
/// Both `requestDomain` callers and the `registerDomain` reveal recompute
/// this; the two must agree byte for byte.
#[must_use]
pub fn generate_secret(name: &str, salt: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(salt.as_bytes());
    Hash::new(hasher.finalize().into())
}

/// Rent for a name over a duration: one balance unit per letter per
/// millisecond. `rentPrice("testDomain", d) == 10 * d`.
#[must_use]
pub fn rent_price(name: &str, duration: Moment) -> Balance {
    (name.len() as Balance).saturating_mul(duration)
}
