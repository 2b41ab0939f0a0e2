//! Network encoding table
//!
//! Version prefixes for address/key string encodings, the bech32 prefix,
//! the wire message magic, and operational defaults (port, seed lists).
//! The base58/bech32 codecs themselves live outside this crate; only the
//! prefix *values* are defined here.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Base58 version prefixes for a network.
///
/// Must be unique within a network across the encoded-type set, or string
/// decoding becomes ambiguous. Uniqueness *across* networks is deliberately
/// not required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// Pay-to-pubkey-hash address version byte
    pub pubkey_address: u8,
    /// Pay-to-script-hash address version byte
    pub script_address: u8,
    /// Secondary pay-to-script-hash version byte
    pub script_address2: u8,
    /// Private key (WIF) version byte
    pub secret_key: u8,
    /// Legacy private key version byte, kept for backward decoding
    pub old_secret_key: u8,
    /// Extended public key serialization prefix
    pub ext_public_key: [u8; 4],
    /// Extended private key serialization prefix
    pub ext_secret_key: [u8; 4],
}

/// Everything peers and wallets need to speak this network's encodings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEncoding {
    /// Base58 version bytes
    pub base58: Base58Prefixes,
    /// Human-readable prefix of segwit (bech32) addresses
    pub bech32_hrp: String,
    /// Four-byte magic prepended to every wire message.
    /// Differs across networks so peers cannot cross networks undetected.
    pub message_start: [u8; 4],
    /// Default listening port. Operational only, no consensus weight.
    pub default_port: u16,
    /// DNS seed hostnames for peer discovery
    pub dns_seeds: Vec<String>,
    /// Compiled-in fallback seed addresses
    pub fixed_seeds: Vec<SocketAddr>,
}

impl NetworkEncoding {
    /// Whether the single-byte prefixes are pairwise distinct where they
    /// must be.
    ///
    /// The two script-address slots and the two secret-key slots may alias
    /// each other (the secondary/legacy variants intentionally share values
    /// on some networks), but address, script, and secret-key classes must
    /// not collide with one another, and the extended-key prefixes must
    /// differ from each other.
    pub fn has_unique_prefixes(&self) -> bool {
        let b = &self.base58;
        let address_vs_script = b.pubkey_address != b.script_address
            && b.pubkey_address != b.script_address2;
        let address_vs_secret =
            b.pubkey_address != b.secret_key && b.pubkey_address != b.old_secret_key;
        let script_vs_secret = b.script_address != b.secret_key
            && b.script_address != b.old_secret_key
            && b.script_address2 != b.secret_key
            && b.script_address2 != b.old_secret_key;
        let ext_keys = b.ext_public_key != b.ext_secret_key;
        address_vs_script && address_vs_secret && script_vs_secret && ext_keys
    }
}
