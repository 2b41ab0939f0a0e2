//! Manga Chain Parameters Core
//!
//! The single source of truth for everything two nodes must agree on to be
//! part of the same Manga chain: proof-of-work limits and retarget rules,
//! BIP9-style soft-fork deployment windows, the genesis block, hard-coded
//! checkpoints, address/key encoding prefixes, and the network message
//! magic.
//!
//! One [`chain::ParameterBundle`] exists per supported network (`main`,
//! `test`, `regtest`). A process constructs exactly one of them at startup
//! through a [`chain::Registry`] and treats it as read-only thereafter:
//!
//! ```
//! use manga_core::chain::Registry;
//!
//! let mut registry = Registry::new();
//! registry.select_network("regtest").expect("known network");
//! let params = registry.active_bundle();
//! assert_eq!(params.encoding.default_port, 20444);
//! ```
//!
//! Construction recomputes the genesis block from its literals and fails
//! with a fatal configuration error if the result does not match the pinned
//! hash and merkle root. Block validation, peer networking, and address
//! codecs consume these parameters but live outside this crate.

pub mod chain;
pub mod consensus;
pub mod crypto;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: u64 = 100_000_000;
}
