//! Consensus parameters
//!
//! The per-network constants every validating node must agree on: proof of
//! work limits and timing, BIP9-style deployment windows, subsidy rules,
//! soft-fork heights, and hard-fork switch heights. Construction of the
//! per-network values lives in [`crate::chain`]; this module only defines
//! the types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::Hash;

/// A 256-bit unsigned integer stored as big-endian bytes.
///
/// Used for the proof-of-work ceiling and the minimum cumulative chain
/// work. Consumers only ever compare these values, so no arithmetic is
/// provided here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uint256(pub [u8; 32]);

impl Uint256 {
    pub const ZERO: Uint256 = Uint256([0u8; 32]);

    /// Parse from big-endian hex, left-padding short literals with zeros
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() > 64 || hex.len() % 2 != 0 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let bytes = hex::decode(hex)?;
        let mut arr = [0u8; 32];
        arr[32 - bytes.len()..].copy_from_slice(&bytes);
        Ok(Uint256(arr))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", self.to_hex())
    }
}

/// Positions of the soft-fork deployments carried in the version bits table.
///
/// The order is fixed: external validation indexes the deployment array by
/// this discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentPos {
    /// Reserved test deployment, never activates on any production chain
    TestDummy = 0,
    /// BIP68, BIP112 and BIP113 (relative lock times, CSV)
    Csv = 1,
    /// BIP141, BIP143 and BIP147 (segregated witness)
    Segwit = 2,
}

/// Number of deployment slots
pub const MAX_DEPLOYMENTS: usize = 3;

/// One BIP9-style soft-fork deployment window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Version bit reserved for signaling (0-28)
    pub bit: u8,
    /// Unix time at which signaling may begin, or a sentinel
    pub start_time: i64,
    /// Unix time at which the deployment fails if not locked in
    pub timeout: i64,
}

impl Deployment {
    /// Start-time sentinel: active from genesis, no voting window
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// Start-time sentinel: signaling never begins
    pub const NEVER_ACTIVE: i64 = -2;
    /// Timeout sentinel: the deployment never auto-fails
    pub const NO_TIMEOUT: i64 = i64::MAX;
}

/// Parameters that influence chain consensus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Proof-of-work ceiling: the easiest target a block may claim
    pub pow_limit: Uint256,
    /// Difficulty recalculation interval, seconds
    pub pow_target_timespan: u64,
    /// Expected time between blocks, seconds
    pub pow_target_spacing: u64,
    /// Recalculation interval once the DIGI retarget is active, seconds
    pub pow_target_timespan_digishield: u64,
    /// Whether a block may fall back to the minimum difficulty after a gap
    /// (test networks only)
    pub allow_min_difficulty_blocks: bool,
    /// Whether retargeting is disabled entirely (regression test only)
    pub no_pow_retargeting: bool,
    /// Blocks that must signal within one confirmation window for a
    /// deployment to lock in. Read together with
    /// `miner_confirmation_window` as a fraction, e.g. 7560/10080 = 75%.
    pub rule_change_activation_threshold: u32,
    /// Number of blocks in one signaling window
    pub miner_confirmation_window: u32,
    /// Soft-fork deployment table, indexed by [`DeploymentPos`]
    pub deployments: [Deployment; MAX_DEPLOYMENTS],
    /// Minimum cumulative work before a chain is trusted at all.
    /// Advisory for sync logic; never accepts an otherwise-invalid chain.
    pub minimum_chain_work: Uint256,
    /// Block below which ancestor signatures are assumed valid.
    /// An optimization flag, not a security statement.
    pub assume_valid: Option<Hash>,
    /// Fixed block subsidy, base units
    pub subsidy_amount: u64,
    /// Height after which the subsidy schedule changes
    pub subsidy_blank_height: u64,
    /// Blocks between subsidy halvings
    pub subsidy_halving_interval: u64,
    /// Height at which BIP16 (P2SH) is enforced
    pub bip16_height: i64,
    /// Height at which BIP34 (height in coinbase) is enforced, -1 = never
    pub bip34_height: i64,
    /// Hash of the BIP34 activation block, if any
    pub bip34_hash: Option<Hash>,
    /// Height at which BIP65 (CLTV) is enforced, -1 = never
    pub bip65_height: i64,
    /// Height at which BIP66 (strict DER) is enforced, -1 = never
    pub bip66_height: i64,
    /// Height at which the Kimoto Gravity Well retarget switches on, -1 = never
    pub switch_kgw_height: i64,
    /// Height at which the DIGI retarget switches on, -1 = never
    pub switch_digi_height: i64,
    /// Height at which Lyra2REv2 PoW with DGW retarget switches on, -1 = never
    pub switch_lyra2rev2_dgw_height: i64,
    /// Pinned genesis block identity hash
    pub genesis_hash: Hash,
    /// Pinned genesis merkle root
    pub genesis_merkle_root: Hash,
}

impl ConsensusParams {
    /// Number of blocks between difficulty adjustments
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Deployment entry for a given position
    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        &self.deployments[pos as usize]
    }

    /// Whether all simultaneously-defined deployments carry distinct bits
    pub fn deployment_bits_unique(&self) -> bool {
        let mut seen = 0u32;
        for d in &self.deployments {
            let mask = 1u32 << d.bit;
            if seen & mask != 0 {
                return false;
            }
            seen |= mask;
        }
        true
    }
}
