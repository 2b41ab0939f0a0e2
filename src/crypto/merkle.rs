//! Merkle tree construction
//!
//! Computes transaction merkle roots with the standard paired-combine step,
//! so roots are comparable with every other place the tree is built.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns the zero hash.
/// If a level has an odd number of elements, the last one is duplicated.
/// A single-leaf tree degenerates to the leaf itself.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    if hashes.is_empty() {
        return Hash::zero();
    }

    let mut current_level: Vec<Hash> = hashes.to_vec();

    while current_level.len() > 1 {
        // If odd number, duplicate last
        if current_level.len() % 2 == 1 {
            let last = *current_level
                .last()
                .expect("level is non-empty inside the loop");
            current_level.push(last);
        }

        let mut next_level = Vec::with_capacity(current_level.len() / 2);
        for chunk in current_level.chunks(2) {
            next_level.push(hash_pair(&chunk[0], &chunk[1]));
        }

        current_level = next_level;
    }

    current_level[0]
}
