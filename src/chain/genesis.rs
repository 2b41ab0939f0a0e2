//! Genesis block construction
//!
//! Builds the unique height-0 block of each network from a small set of
//! literals. The computed identity hash and merkle root are checked against
//! the pinned values during bundle construction; a mismatch means the
//! literal tables themselves are wrong and startup must not continue.

use crate::consensus::{
    Block, BlockHeader, Builder, OutPoint, Script, Transaction, TxIn, TxOut, OP_CHECKSIG,
    OP_DUP, OP_EQUALVERIFY, OP_HASH160,
};
use crate::crypto::Hash;

/// Message embedded in the coinbase input of every network's genesis block
pub const GENESIS_TIMESTAMP_MESSAGE: &str =
    "2018, June 7th. A paper medium passed away in Japan, and the MANGA era began.";

/// Public-key hash paid by the genesis coinbase output
const GENESIS_OUTPUT_PKH: [u8; 20] = [
    0xd2, 0x03, 0x4f, 0x9e, 0x9a, 0xd0, 0x9b, 0x1b, 0x32, 0x10, 0x5a, 0x6e, 0xfa, 0x47,
    0xe1, 0x9f, 0xdb, 0xab, 0xdf, 0xe4,
];

fn genesis_output_script() -> Script {
    Builder::new()
        .push_opcode(OP_DUP)
        .push_opcode(OP_HASH160)
        .push_slice(&GENESIS_OUTPUT_PKH)
        .push_opcode(OP_EQUALVERIFY)
        .push_opcode(OP_CHECKSIG)
        .into_script()
}

/// Build the one coinbase transaction of a genesis block.
///
/// The input references the null outpoint, so its output did not originally
/// exist and can never be spent. The script carries the classic pushes
/// (0x1d00ffff as a number, script-number 4) followed by the timestamp
/// message.
fn genesis_coinbase(message: &str, output_script: Script, reward: u64) -> Transaction {
    let script_sig = Builder::new()
        .push_scriptnum(486604799)
        .push_scriptnum(4)
        .push_slice(message.as_bytes())
        .into_script();

    Transaction {
        version: 1,
        inputs: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut { value: reward, script_pubkey: output_script }],
        lock_time: 0,
    }
}

/// Create a genesis block from its header literals and coinbase reward.
///
/// Deterministic: the same inputs reproduce the same block, hash, and
/// merkle root on every invocation.
pub fn create_genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: u64) -> Block {
    let coinbase = genesis_coinbase(GENESIS_TIMESTAMP_MESSAGE, genesis_output_script(), reward);
    let txdata = vec![coinbase];
    let merkle_root = txdata[0].txid();

    Block {
        header: BlockHeader {
            version,
            prev_blockhash: Hash::zero(),
            merkle_root,
            time,
            bits,
            nonce,
        },
        txdata,
    }
}
