//! Block structure
//!
//! Defines the 80-byte block header, its identity hash, and the block's
//! transaction merkle root.

use serde::{Deserialize, Serialize};

use crate::consensus::Transaction;
use crate::crypto::{compute_merkle_root, double_sha256, Hash};

/// Block header containing all consensus metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block format version
    pub version: i32,
    /// Hash of the previous block (zero for genesis)
    pub prev_blockhash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Compact difficulty encoding
    pub bits: u32,
    /// Nonce found by the miner
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialize the header for hashing (80 bytes)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(80);
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.prev_blockhash.0);
        bytes.extend_from_slice(&self.merkle_root.0);
        bytes.extend_from_slice(&self.time.to_le_bytes());
        bytes.extend_from_slice(&self.bits.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Block identity hash: double SHA256 of the serialized header
    pub fn block_hash(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// Transactions in this block
    pub txdata: Vec<Transaction>,
}

impl Block {
    /// Get the block identity hash
    pub fn block_hash(&self) -> Hash {
        self.header.block_hash()
    }

    /// Recompute the merkle root from the transaction set
    pub fn compute_merkle_root(&self) -> Hash {
        let txids: Vec<Hash> = self.txdata.iter().map(|tx| tx.txid()).collect();
        compute_merkle_root(&txids)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_blockhash == Hash::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_blockhash: Hash::zero(),
            merkle_root: Hash::zero(),
            time: 1234567890,
            bits: 0x1d00ffff,
            nonce: 0,
        }
    }

    #[test]
    fn test_header_serializes_to_80_bytes() {
        assert_eq!(header().to_bytes().len(), 80);
    }

    #[test]
    fn test_header_hash_deterministic() {
        assert_eq!(header().block_hash(), header().block_hash());
    }

    #[test]
    fn test_nonce_changes_hash() {
        let a = header();
        let mut b = header();
        b.nonce = 1;
        assert_ne!(a.block_hash(), b.block_hash());
    }

    #[test]
    fn test_genesis_block_detection() {
        let block = Block { header: header(), txdata: vec![] };
        assert!(block.is_genesis());
    }
}
