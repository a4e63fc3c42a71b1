//! # Extrinsics
//!
//! A signed contract call: destination, attached value, gas limit and call
//! input, signed over with ed25519 together with the account nonce.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use registry_types::{AccountId, Balance, Weight};
use serde::{Deserialize, Serialize};

/// The call a signed extrinsic carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    /// The contract account to call.
    pub dest: AccountId,
    /// Value transferred with the call.
    pub value: Balance,
    /// Gas limit for the dispatch.
    pub gas_limit: Weight,
    /// Storage deposit limit; `None` means unlimited. The dev node levies
    /// no storage deposit, so the limit rides along for call-shape parity
    /// and is never charged against.
    pub storage_deposit_limit: Option<Balance>,
    /// Selector plus encoded arguments.
    pub input: Vec<u8>,
}

/// A contract call signed by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedExtrinsic {
    /// The call payload.
    pub call: ContractCall,
    /// The signer's account nonce at submission.
    pub nonce: u64,
    /// The signing account (an ed25519 public key).
    pub signer: AccountId,
    /// ed25519 signature over [`signing_payload`].
    pub signature: Vec<u8>,
}

/// The bytes an extrinsic signature commits to: the call and the nonce.
pub fn signing_payload(call: &ContractCall, nonce: u64) -> Vec<u8> {
    // Serialization of plain data cannot fail.
    bincode::serialize(&(call, nonce)).unwrap_or_default()
}

impl SignedExtrinsic {
    /// Verifies the ed25519 signature against the signer account.
    #[must_use]
    pub fn verify(&self) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(self.signer.as_bytes()) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&self.signature) else {
            return false;
        };
        let payload = signing_payload(&self.call, self.nonce);
        key.verify(&payload, &signature).is_ok()
    }
}
