//! # Signer
//!
//! An ed25519 keypair that signs extrinsics. Dev signers exist for the
//! well-known chain accounts.

use ed25519_dalek::{Signer as _, SigningKey};
use registry_types::{dev, AccountId};

/// An extrinsic signer.
pub struct Signer {
    key: SigningKey,
}

impl Signer {
    /// Builds a signer from a 32-byte seed.
    #[must_use]
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(seed),
        }
    }

    /// The `alice` dev signer.
    #[must_use]
    pub fn alice() -> Self {
        Self::from_seed(&dev::ALICE_SEED)
    }

    /// The `bob` dev signer.
    #[must_use]
    pub fn bob() -> Self {
        Self::from_seed(&dev::BOB_SEED)
    }

    /// The `charlie` dev signer.
    #[must_use]
    pub fn charlie() -> Self {
        Self::from_seed(&dev::CHARLIE_SEED)
    }

    /// The account this signer controls.
    #[must_use]
    pub fn account_id(&self) -> AccountId {
        AccountId::from(&self.key.verifying_key())
    }

    /// Signs a payload.
    #[must_use]
    pub fn sign(&self, payload: &[u8]) -> Vec<u8> {
        self.key.sign(payload).to_vec()
    }
}
