//! Checkpoint and sync-progress tables
//!
//! Checkpoints pin known-good (height, hash) pairs; validation uses them to
//! reject reorganizations that would rewrite a checkpointed height. The
//! progress tuple only feeds sync-percentage estimation and carries no
//! consensus weight.

use serde::{Deserialize, Serialize};

use crate::crypto::Hash;

/// Ordered table of hard-coded checkpoint hashes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoints {
    entries: Vec<(u64, Hash)>,
}

impl Checkpoints {
    /// Build a checkpoint table. Entries must be given in strictly
    /// increasing height order with height 0 first.
    pub fn new(entries: Vec<(u64, Hash)>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].0 < w[1].0),
            "checkpoint heights must be strictly increasing"
        );
        Checkpoints { entries }
    }

    /// The pinned hash at exactly `height`, if one exists
    pub fn hash_at(&self, height: u64) -> Option<&Hash> {
        self.entries
            .binary_search_by_key(&height, |&(h, _)| h)
            .ok()
            .map(|i| &self.entries[i].1)
    }

    /// Whether a (height, hash) pair is consistent with the table.
    ///
    /// Only a checkpointed height with a different hash is inconsistent;
    /// heights without a checkpoint are always accepted here. Rejection of
    /// deep reorganizations below the last checkpoint lives in validation.
    pub fn check(&self, height: u64, hash: &Hash) -> bool {
        match self.hash_at(height) {
            Some(pinned) => pinned == hash,
            None => true,
        }
    }

    /// Height of the newest checkpoint
    pub fn last_height(&self) -> u64 {
        self.entries.last().map(|&(h, _)| h).unwrap_or(0)
    }

    /// All entries, ascending by height
    pub fn entries(&self) -> &[(u64, Hash)] {
        &self.entries
    }
}

/// Transaction-count statistics as of the newest checkpoint.
///
/// Used to estimate how far initial block download has progressed.
/// Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainTxData {
    /// Unix timestamp of the last known transaction count
    pub time: u64,
    /// Total transactions between genesis and that timestamp
    pub tx_count: u64,
    /// Estimated transactions per second after that timestamp
    pub tx_rate: f64,
}
