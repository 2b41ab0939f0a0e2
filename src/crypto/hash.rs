//! Double-SHA256 hashing
//!
//! All consensus identity hashes (block hashes, txids, merkle nodes) are
//! SHA256(SHA256(x)) over the wire serialization.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash output, stored in internal (little-endian) byte order.
///
/// Hex display follows the chain convention of printing the bytes
/// reversed, so `to_hex()` of a block hash matches what explorers and
/// the reference client show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for the genesis previous-block hash)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from internal-order bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a hash from its display-order (reversed) hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        for (i, b) in bytes.iter().rev().enumerate() {
            arr[i] = *b;
        }
        Ok(Hash(arr))
    }

    /// Convert to the display-order hex string
    pub fn to_hex(&self) -> String {
        let mut rev = self.0;
        rev.reverse();
        hex::encode(rev)
    }

    /// Get as internal-order bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

/// Hash arbitrary bytes with double SHA256
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    Hash(second.into())
}

/// Hash two nodes together (for the merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(&left.0);
    data[32..].copy_from_slice(&right.0);
    double_sha256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let data = b"hello world";
        let hash1 = double_sha256(data);
        let hash2 = double_sha256(data);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_known_vector() {
        // SHA256(SHA256("hello")), forward byte order
        let hash = double_sha256(b"hello");
        assert_eq!(
            hex::encode(hash.0),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_hash_different_inputs() {
        let hash1 = double_sha256(b"hello");
        let hash2 = double_sha256(b"world");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_zero_hash() {
        let zero = Hash::zero();
        assert_eq!(zero.0, [0u8; 32]);
    }

    #[test]
    fn test_hex_roundtrip() {
        let hash = double_sha256(b"test");
        let hex = hash.to_hex();
        let recovered = Hash::from_hex(&hex).unwrap();
        assert_eq!(hash, recovered);
    }

    #[test]
    fn test_hex_is_reversed() {
        // Display order is the byte-reverse of internal order
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        let hash = Hash::from_bytes(bytes);
        assert!(hash.to_hex().ends_with("ab"));
        assert!(hash.to_hex().starts_with("00"));
    }

    #[test]
    fn test_from_hex_accepts_0x_prefix() {
        let plain = Hash::from_hex(
            "e0b0b95cc209e17dd4280e3ab830256783d89ef714accce540232da33e2b320a",
        )
        .unwrap();
        let prefixed = Hash::from_hex(
            "0xe0b0b95cc209e17dd4280e3ab830256783d89ef714accce540232da33e2b320a",
        )
        .unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Hash::from_hex("abcd").is_err());
    }

    #[test]
    fn test_hash_pair() {
        let left = double_sha256(b"left");
        let right = double_sha256(b"right");
        let combined = hash_pair(&left, &right);

        // Should be deterministic
        let combined2 = hash_pair(&left, &right);
        assert_eq!(combined, combined2);

        // Order matters
        let reversed = hash_pair(&right, &left);
        assert_ne!(combined, reversed);
    }
}
