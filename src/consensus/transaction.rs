//! Transaction structure and wire serialization
//!
//! Only the fields and serialization needed to reconstruct and identify the
//! genesis coinbase. Script execution and UTXO accounting are validation
//! concerns outside this crate.

use serde::{Deserialize, Serialize};

use crate::consensus::Script;
use crate::crypto::{double_sha256, Hash};

/// Reference to an output of a previous transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Txid of the transaction holding the output
    pub txid: Hash,
    /// Index of the output in that transaction
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint used by coinbase inputs.
    ///
    /// References no real previous transaction, so a coinbase input can
    /// never be mistaken for a spend of an existing output.
    pub const fn null() -> Self {
        OutPoint { txid: Hash::zero(), vout: 0xFFFF_FFFF }
    }

    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent (null for coinbase)
    pub previous_output: OutPoint,
    /// Unlocking script (carries the timestamp message in the coinbase)
    pub script_sig: Script,
    /// Sequence number
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in base units
    pub value: u64,
    /// Locking script of the recipient
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction format version
    pub version: i32,
    /// Transaction inputs
    pub inputs: Vec<TxIn>,
    /// Transaction outputs
    pub outputs: Vec<TxOut>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

/// Append a compact-size length prefix
pub(crate) fn write_compact_size(bytes: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => bytes.push(n as u8),
        0xfd..=0xffff => {
            bytes.push(0xfd);
            bytes.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x10000..=0xffff_ffff => {
            bytes.push(0xfe);
            bytes.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            bytes.push(0xff);
            bytes.extend_from_slice(&n.to_le_bytes());
        }
    }
}

impl Transaction {
    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }

    /// Serialize in wire format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.previous_output.txid.0);
            bytes.extend_from_slice(&input.previous_output.vout.to_le_bytes());
            write_compact_size(&mut bytes, input.script_sig.len() as u64);
            bytes.extend_from_slice(input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut bytes, output.script_pubkey.len() as u64);
            bytes.extend_from_slice(output.script_pubkey.as_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction identity hash
    pub fn txid(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }
}
