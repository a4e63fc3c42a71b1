//! # Core Entities
//!
//! Account identifiers, hashes, block headers and balance bookkeeping.

use crate::errors::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Balance of an account, in the chain's smallest unit.
pub type Balance = u128;

/// A point in time, in milliseconds since the Unix epoch.
pub type Moment = u128;

/// Block height.
pub type BlockNumber = u64;

// =============================================================================
// ACCOUNT ID (32 bytes, ed25519 public key)
// =============================================================================

/// A 32-byte account identifier (an ed25519 public key).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

/// Fixed seeds for the well-known development accounts.
pub mod dev {
    /// Seed for the `alice` development account.
    pub const ALICE_SEED: [u8; 32] = [0x01; 32];
    /// Seed for the `bob` development account.
    pub const BOB_SEED: [u8; 32] = [0x02; 32];
    /// Seed for the `charlie` development account.
    pub const CHARLIE_SEED: [u8; 32] = [0x03; 32];
}

impl AccountId {
    /// The zero account. Used as the "nobody" owner for unregistered domains.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an account id from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates an account id from a slice. Returns `None` if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Derives the account id belonging to an ed25519 signing seed.
    #[must_use]
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let key = ed25519_dalek::SigningKey::from_bytes(seed);
        Self(key.verifying_key().to_bytes())
    }

    /// The `alice` development account.
    #[must_use]
    pub fn alice() -> Self {
        Self::from_seed(&dev::ALICE_SEED)
    }

    /// The `bob` development account.
    #[must_use]
    pub fn bob() -> Self {
        Self::from_seed(&dev::BOB_SEED)
    }

    /// The `charlie` development account.
    #[must_use]
    pub fn charlie() -> Self {
        Self::from_seed(&dev::CHARLIE_SEED)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero account.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}...{}",
            hex::encode(&self.0[..4]),
            hex::encode(&self.0[28..])
        )
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<&ed25519_dalek::VerifyingKey> for AccountId {
    fn from(key: &ed25519_dalek::VerifyingKey) -> Self {
        Self(key.to_bytes())
    }
}

// =============================================================================
// HASH (32 bytes)
// =============================================================================

/// A 32-byte hash (SHA-256 throughout this workspace).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// The zero hash.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a hash from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a slice. Returns `None` if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 32 {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Parses a hash from a `0x`-prefixed (or bare) hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| TypesError::Hex(e.to_string()))?;
        Self::from_slice(&bytes).ok_or(TypesError::BadLength {
            expected: 32,
            actual: bytes.len(),
        })
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero hash.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Hex representation with a `0x` prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{}...{}",
            hex::encode(&self.0[..4]),
            hex::encode(&self.0[28..])
        )
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// HEADER
// =============================================================================

/// A block header, as returned by `chain_get_header`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Block height.
    pub number: BlockNumber,
    /// Hash of this block.
    pub hash: Hash,
    /// Hash of the parent block. Zero for genesis.
    pub parent_hash: Hash,
    /// Root commitment over the extrinsics included in the block.
    pub extrinsics_root: Hash,
}

impl Header {
    /// Returns true if this is the genesis header.
    #[must_use]
    pub fn is_genesis(&self) -> bool {
        self.number == 0
    }
}

// =============================================================================
// ACCOUNT INFO
// =============================================================================

/// Balance and nonce bookkeeping for one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Number of extrinsics this account has submitted.
    pub nonce: u64,
    /// Spendable balance.
    pub free: Balance,
    /// Balance locked inside contracts (informational).
    pub reserved: Balance,
}

impl AccountInfo {
    /// Total balance, free plus reserved.
    #[must_use]
    pub fn total(&self) -> Balance {
        self.free.saturating_add(self.reserved)
    }
}

// =============================================================================
// TESTS
// =============================================================================
