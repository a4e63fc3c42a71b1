//! # Chain Bookkeeping
//!
//! Headers plus a per-block snapshot of the account ledger, so balance
//! queries can be answered at any known block hash.

use registry_types::{AccountId, AccountInfo, BlockNumber, Hash, Header};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// The block chain: headers and per-block ledger snapshots.
#[derive(Debug, Clone)]
pub struct Chain {
    headers: Vec<Header>,
    by_hash: HashMap<Hash, usize>,
    snapshots: HashMap<Hash, HashMap<AccountId, AccountInfo>>,
}

impl Chain {
    /// Starts a chain at genesis with the given ledger snapshot.
    #[must_use]
    pub fn genesis(snapshot: HashMap<AccountId, AccountInfo>) -> Self {
        let header = Header {
            number: 0,
            hash: block_hash(0, &Hash::ZERO, &Hash::ZERO),
            parent_hash: Hash::ZERO,
            extrinsics_root: Hash::ZERO,
        };
        let mut chain = Self {
            headers: Vec::new(),
            by_hash: HashMap::new(),
            snapshots: HashMap::new(),
        };
        chain.push(header, snapshot);
        chain
    }

    /// The latest header.
    #[must_use]
    pub fn best_header(&self) -> &Header {
        // Genesis is pushed in the constructor; the chain is never empty.
        self.headers.last().expect("chain has at least genesis")
    }

    /// Looks a header up by hash.
    #[must_use]
    pub fn header_at(&self, hash: &Hash) -> Option<&Header> {
        self.by_hash.get(hash).map(|i| &self.headers[*i])
    }

    /// The ledger snapshot taken at a block.
    #[must_use]
    pub fn snapshot_at(&self, hash: &Hash) -> Option<&HashMap<AccountId, AccountInfo>> {
        self.snapshots.get(hash)
    }

    /// Seals the next block and records the post-block ledger snapshot.
    pub fn seal_block(
        &mut self,
        extrinsics_root: Hash,
        snapshot: HashMap<AccountId, AccountInfo>,
    ) -> Header {
        let parent = self.best_header();
        let number = parent.number + 1;
        let header = Header {
            number,
            hash: block_hash(number, &parent.hash, &extrinsics_root),
            parent_hash: parent.hash,
            extrinsics_root,
        };
        self.push(header.clone(), snapshot);
        header
    }

    fn push(&mut self, header: Header, snapshot: HashMap<AccountId, AccountInfo>) {
        self.by_hash.insert(header.hash, self.headers.len());
        self.snapshots.insert(header.hash, snapshot);
        self.headers.push(header);
    }
}

/// SHA-256 over number, parent hash and extrinsics root.
fn block_hash(number: BlockNumber, parent: &Hash, extrinsics_root: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(number.to_le_bytes());
    hasher.update(parent.as_bytes());
    hasher.update(extrinsics_root.as_bytes());
    Hash::new(hasher.finalize().into())
}
