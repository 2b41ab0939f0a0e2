//! Per-network parameter bundles
//!
//! One pure constructor per supported network assembles consensus
//! parameters, the genesis block, checkpoint tables, and encoding prefixes
//! into a [`ParameterBundle`]. Construction recomputes the genesis identity
//! hash and merkle root and refuses to hand out a bundle whose literals do
//! not reproduce the pinned values: a mismatch means the tables themselves
//! are wrong and no runtime value derived from them can be trusted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::chain::checkpoints::{ChainTxData, Checkpoints};
use crate::chain::encoding::{Base58Prefixes, NetworkEncoding};
use crate::chain::genesis::create_genesis_block;
use crate::chain::seeds;
use crate::consensus::{Block, ConsensusParams, Deployment, Uint256};
use crate::constants::COIN;
use crate::crypto::Hash;

/// The supported networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Local regression-test network
    Regtest,
}

impl Network {
    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// All supported networks
    pub fn all() -> [Network; 3] {
        [Network::Main, Network::Test, Network::Regtest]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            other => Err(ChainParamsError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Errors raised while selecting or constructing chain parameters.
///
/// The unknown-network variant is recoverable by the caller supplying a
/// valid identifier. Every other variant is a configuration-integrity
/// failure: the process entry point is expected to treat it as fatal.
#[derive(Debug, Error)]
pub enum ChainParamsError {
    #[error("unknown network \"{0}\" (expected \"main\", \"test\" or \"regtest\")")]
    UnknownNetwork(String),
    #[error("genesis hash mismatch: computed {computed}, pinned {expected}")]
    GenesisHashMismatch { expected: Hash, computed: Hash },
    #[error("genesis merkle root mismatch: computed {computed}, pinned {expected}")]
    GenesisMerkleRootMismatch { expected: Hash, computed: Hash },
    #[error("checkpoint at height 0 is {checkpoint}, but the genesis hash is {genesis}")]
    CheckpointGenesisMismatch { genesis: Hash, checkpoint: Hash },
    #[error("malformed hash literal: {0}")]
    InvalidHashLiteral(#[from] hex::FromHexError),
}

/// Everything that defines one network, assembled once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBundle {
    /// Which network these parameters describe
    pub network: Network,
    /// Consensus-critical constants
    pub consensus: ConsensusParams,
    /// The fully-constructed genesis block
    pub genesis: Block,
    /// Known-good (height, hash) pins
    pub checkpoints: Checkpoints,
    /// Sync-progress estimation data
    pub chain_tx_data: ChainTxData,
    /// Address/key prefixes, magic, port and seeds
    pub encoding: NetworkEncoding,
    /// Height below which block files may not be pruned
    pub prune_after_height: u64,
    /// Whether expensive internal consistency checks default to on
    pub default_consistency_checks: bool,
    /// Whether transactions must be standard to relay
    pub require_standard: bool,
    /// Whether blocks may be produced on demand regardless of timestamp.
    /// Independent of `consensus.no_pow_retargeting`; consumers must not
    /// infer one from the other.
    pub mine_blocks_on_demand: bool,
}

/// Construct a bundle for a network identifier string.
///
/// Pure: two calls with the same identifier yield field-for-field
/// identical bundles.
pub fn create_bundle(identifier: &str) -> Result<ParameterBundle, ChainParamsError> {
    ParameterBundle::for_network(identifier.parse()?)
}

impl ParameterBundle {
    /// Construct the bundle for a network from its literal tables
    pub fn for_network(network: Network) -> Result<Self, ChainParamsError> {
        match network {
            Network::Main => Self::main(),
            Network::Test => Self::test(),
            Network::Regtest => Self::regtest(),
        }
    }

    fn main() -> Result<Self, ChainParamsError> {
        let genesis_hash =
            Hash::from_hex("e0b0b95cc209e17dd4280e3ab830256783d89ef714accce540232da33e2b320a")?;
        let genesis_merkle_root =
            Hash::from_hex("7f7fd8e22ea946489fedb1151fdc397dfc666d474654edc155f07fec6ee64bb2")?;

        let consensus = ConsensusParams {
            pow_limit: Uint256::from_hex(
                "000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_target_timespan: 30 * 60,
            pow_target_spacing: 90,
            pow_target_timespan_digishield: 90,
            allow_min_difficulty_blocks: false,
            no_pow_retargeting: false,
            rule_change_activation_threshold: 7560, // 75% of 10080
            miner_confirmation_window: 10080,
            deployments: [
                // TestDummy
                Deployment { bit: 28, start_time: 1199145601, timeout: 1230767999 },
                // CSV: 2018-07-22 .. 2018-09-22
                Deployment { bit: 0, start_time: 1532185200, timeout: 1537542000 },
                // Segwit: same window as CSV
                Deployment { bit: 1, start_time: 1532185200, timeout: 1537542000 },
            ],
            minimum_chain_work: Uint256::from_hex(
                "00000000000000000000000000000000000000000000000000bbd2a540b18171",
            )?, // height 60000
            assume_valid: Some(genesis_hash),
            subsidy_amount: 10714 * COIN,
            subsidy_blank_height: 2 * 24 * 3600 / 90, // 2 days
            subsidy_halving_interval: 700979,
            bip16_height: 0,
            bip34_height: 0,
            bip34_hash: Some(genesis_hash),
            bip65_height: -1,
            bip66_height: -1,
            switch_kgw_height: -1,
            switch_digi_height: -1,
            switch_lyra2rev2_dgw_height: 1,
            genesis_hash,
            genesis_merkle_root,
        };

        let genesis = create_genesis_block(1532145131, 0xE918, 0x1F0FFFFF, 1, 3500000358212617622);

        let checkpoints = Checkpoints::new(vec![
            (0, genesis_hash),
            (1000, Hash::from_hex("68bbbc087c8e1bb74408e95a9752ac6587fa95e2ef151e4da1829defda557dc4")?),
            (3000, Hash::from_hex("03244c04dcca0be9f4cb94cf15a0bfa3c8e35cb0793862cb71dd8de0b0927298")?),
            (5000, Hash::from_hex("1d8cc09f798eeba22d1a199136d05b8ba80c95410e7a567546d7ddcccfc17a2d")?),
            (7000, Hash::from_hex("54a4f69da2152547b0b1cf94ca216c2b244fc871fd949feda7b549f3dd6e5cfe")?),
            (9000, Hash::from_hex("e0299f12702b7da5e86be95f879f7842a895ee3842b85c5010477c269afc3a37")?),
            (10000, Hash::from_hex("22743d431cac4ae66ffcb29a27ee294fd862202490b9ecf440de55bc9aba7cef")?),
            (20000, Hash::from_hex("e26b767c727e8f98666a7ddec02d7c6d494891f9c9f160d28ff62add858eb8e8")?),
            (30000, Hash::from_hex("aefc30184882696425353b0cb1aa20ff912d0c0b58a574cb6c2a86f210589247")?),
            (40000, Hash::from_hex("21b02f0e2336d5a8193b1afd2defa0cee11c05e11c967e2473a66acee23312d6")?),
            (50000, Hash::from_hex("8109aaaa785f413259cffb4855dcd270c980b22bfb23c0d2dd3f68136e330067")?),
            (60000, Hash::from_hex("f0e4d8880f25b4a12cd637649e50b5451517e5b5a97761067d1157578ab87de6")?),
        ]);

        let bundle = ParameterBundle {
            network: Network::Main,
            consensus,
            genesis,
            checkpoints,
            // Data as of block f8c409c2dd5b84db7c9d69ce5209261854d42da26b1f78c17d8b23aba2f5efc3 (height 60000)
            chain_tx_data: ChainTxData { time: 1538307671, tx_count: 92049, tx_rate: 0.01493686 },
            encoding: NetworkEncoding {
                base58: Base58Prefixes {
                    pubkey_address: 21, // N
                    script_address: 15, // G
                    script_address2: 15,
                    secret_key: 115,
                    old_secret_key: 115,
                    ext_public_key: [0x1e, 0xb2, 0x88, 0x04],
                    ext_secret_key: [0xe4, 0xad, 0x88, 0x04],
                },
                bech32_hrp: "arkr".to_string(),
                message_start: [0x12, 0x34, 0x56, 0x78],
                default_port: 18730,
                dns_seeds: seeds::main_dns_seeds(),
                fixed_seeds: seeds::main_fixed_seeds(),
            },
            prune_after_height: 100000,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
        };
        bundle.verify_genesis()?;
        Ok(bundle)
    }

    fn test() -> Result<Self, ChainParamsError> {
        let genesis_hash =
            Hash::from_hex("39c55d04ea8b5117abb84809c862a9d17212bdae22115bef80f6a508f2a24ab6")?;
        let genesis_merkle_root =
            Hash::from_hex("8f85a3537367aa9a83bec83d70d1a71a54e79354bf875afd96a211d1754ab66e")?;

        let consensus = ConsensusParams {
            pow_limit: Uint256::from_hex(
                "00ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_target_timespan: 95040, // 1.1 days
            pow_target_spacing: 90,
            pow_target_timespan_digishield: 90,
            allow_min_difficulty_blocks: true,
            no_pow_retargeting: false,
            rule_change_activation_threshold: 75, // 75% for testchains
            miner_confirmation_window: 100,
            deployments: [
                Deployment { bit: 28, start_time: 1199145601, timeout: 1230767999 },
                // CSV: 2018-07-17 23:30 .. 2018-07-18 09:30
                Deployment { bit: 0, start_time: 1531837800, timeout: 1531873800 },
                Deployment { bit: 1, start_time: 1531837800, timeout: 1531873800 },
            ],
            minimum_chain_work: Uint256::from_hex(
                "0000000000000000000000000000000000000000000000000000007a577bc240",
            )?,
            assume_valid: Some(genesis_hash),
            subsidy_amount: 2500 * COIN,
            subsidy_blank_height: 30 * 60 / 90, // 30 minutes
            subsidy_halving_interval: 3000010,
            bip16_height: 0,
            bip34_height: 0,
            bip34_hash: Some(genesis_hash),
            bip65_height: -1,
            bip66_height: -1,
            switch_kgw_height: -1,
            switch_digi_height: -1,
            switch_lyra2rev2_dgw_height: 1,
            genesis_hash,
            genesis_merkle_root,
        };

        let genesis = create_genesis_block(1531637354, 0xE1E6, 0x2000FFFF, 1, 3500000250039000130);

        let checkpoints = Checkpoints::new(vec![
            (0, genesis_hash),
            (1942, Hash::from_hex("082beec281f3e7d2eb2dc4400baf526ee4b5713b27226c46fa9c83a61e84b0d9")?),
        ]);

        let bundle = ParameterBundle {
            network: Network::Test,
            consensus,
            genesis,
            checkpoints,
            // Data as of block height 1942
            chain_tx_data: ChainTxData { time: 1531837006, tx_count: 1969, tx_rate: 0.00986216 },
            encoding: NetworkEncoding {
                base58: Base58Prefixes {
                    pubkey_address: 25,
                    script_address: 19,
                    script_address2: 19,
                    secret_key: 233,
                    old_secret_key: 233,
                    ext_public_key: [0xcf, 0x87, 0x35, 0x04],
                    ext_secret_key: [0x94, 0x83, 0x35, 0x04],
                },
                bech32_hrp: "thene".to_string(),
                message_start: [0xab, 0xcd, 0xef, 0x99],
                default_port: 23730,
                dns_seeds: seeds::test_dns_seeds(),
                fixed_seeds: seeds::test_fixed_seeds(),
            },
            prune_after_height: 1000,
            default_consistency_checks: false,
            require_standard: false,
            mine_blocks_on_demand: false,
        };
        bundle.verify_genesis()?;
        Ok(bundle)
    }

    fn regtest() -> Result<Self, ChainParamsError> {
        let genesis_hash =
            Hash::from_hex("77abb7c360a995a03ff62d3231436d2e827f8ddc9a6150d1e35cbf3e4b811462")?;
        let genesis_merkle_root =
            Hash::from_hex("6074c0c6b30c2b932a1c728006a7d2e648b455a2a5d40a3d1ec4f1b290b3401d")?;

        let consensus = ConsensusParams {
            pow_limit: Uint256::from_hex(
                "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_target_timespan: 95040,
            pow_target_spacing: 90,
            pow_target_timespan_digishield: 90,
            allow_min_difficulty_blocks: true,
            no_pow_retargeting: true,
            rule_change_activation_threshold: 108, // 75% for testchains
            miner_confirmation_window: 144, // faster than normal for regtest
            deployments: [
                Deployment { bit: 28, start_time: 0, timeout: Deployment::NO_TIMEOUT },
                Deployment { bit: 0, start_time: 0, timeout: Deployment::NO_TIMEOUT },
                Deployment {
                    bit: 1,
                    start_time: Deployment::ALWAYS_ACTIVE,
                    timeout: Deployment::NO_TIMEOUT,
                },
            ],
            minimum_chain_work: Uint256::ZERO,
            assume_valid: None,
            subsidy_amount: 50 * COIN,
            subsidy_blank_height: 0,
            subsidy_halving_interval: 150,
            bip16_height: 0, // always enforce P2SH on regtest
            bip34_height: -1, // never, so v1 blocks are not rejected in tests
            bip34_hash: None,
            bip65_height: -1,
            bip66_height: -1,
            switch_kgw_height: 20,
            switch_digi_height: 40,
            switch_lyra2rev2_dgw_height: 60,
            genesis_hash,
            genesis_merkle_root,
        };

        let genesis = create_genesis_block(1296688602, 1, 0x207fffff, 1, 50 * COIN);

        let checkpoints = Checkpoints::new(vec![(0, genesis_hash)]);

        let bundle = ParameterBundle {
            network: Network::Regtest,
            consensus,
            genesis,
            checkpoints,
            chain_tx_data: ChainTxData { time: 0, tx_count: 0, tx_rate: 0.0 },
            encoding: NetworkEncoding {
                base58: Base58Prefixes {
                    pubkey_address: 111,
                    script_address: 196,
                    script_address2: 117,
                    secret_key: 239,
                    old_secret_key: 239,
                    ext_public_key: [0x04, 0x35, 0x87, 0xCF],
                    ext_secret_key: [0x04, 0x35, 0x83, 0x94],
                },
                bech32_hrp: "rmona".to_string(),
                message_start: [0xfa, 0xbf, 0xb5, 0xda],
                default_port: 20444,
                dns_seeds: vec![], // regtest has no seeds of either kind
                fixed_seeds: vec![],
            },
            prune_after_height: 1000,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
        };
        bundle.verify_genesis()?;
        Ok(bundle)
    }

    /// Recompute the genesis identity and merkle root and compare them to
    /// the pins, then cross-check the height-0 checkpoint.
    fn verify_genesis(&self) -> Result<(), ChainParamsError> {
        let computed_hash = self.genesis.block_hash();
        if computed_hash != self.consensus.genesis_hash {
            return Err(ChainParamsError::GenesisHashMismatch {
                expected: self.consensus.genesis_hash,
                computed: computed_hash,
            });
        }

        let computed_root = self.genesis.compute_merkle_root();
        if computed_root != self.consensus.genesis_merkle_root
            || computed_root != self.genesis.header.merkle_root
        {
            return Err(ChainParamsError::GenesisMerkleRootMismatch {
                expected: self.consensus.genesis_merkle_root,
                computed: computed_root,
            });
        }

        match self.checkpoints.hash_at(0) {
            Some(pinned) if *pinned == computed_hash => Ok(()),
            pinned => Err(ChainParamsError::CheckpointGenesisMismatch {
                genesis: computed_hash,
                checkpoint: pinned.copied().unwrap_or_else(Hash::zero),
            }),
        }
    }

    /// Override one deployment's signaling window.
    ///
    /// Test harnesses only; never part of the production code path.
    #[cfg(any(test, feature = "test-overrides"))]
    pub fn update_deployment_parameters(
        &mut self,
        pos: crate::consensus::DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        let deployment = &mut self.consensus.deployments[pos as usize];
        deployment.start_time = start_time;
        deployment.timeout = timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::DeploymentPos;

    #[test]
    fn test_all_networks_construct() {
        for network in Network::all() {
            let bundle = ParameterBundle::for_network(network).unwrap();
            assert_eq!(bundle.network, network);
        }
    }

    #[test]
    fn test_create_bundle_by_identifier() {
        assert_eq!(create_bundle("main").unwrap().network, Network::Main);
        assert_eq!(create_bundle("test").unwrap().network, Network::Test);
        assert_eq!(create_bundle("regtest").unwrap().network, Network::Regtest);
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = create_bundle("bogus").unwrap_err();
        assert!(matches!(err, ChainParamsError::UnknownNetwork(ref s) if s == "bogus"));
        assert!(create_bundle("MAIN").is_err());
        assert!(create_bundle("").is_err());
    }

    #[test]
    fn test_construction_is_pure() {
        for network in Network::all() {
            let a = ParameterBundle::for_network(network).unwrap();
            let b = ParameterBundle::for_network(network).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_genesis_pins_reproduced() {
        for network in Network::all() {
            let bundle = ParameterBundle::for_network(network).unwrap();
            assert_eq!(bundle.genesis.block_hash(), bundle.consensus.genesis_hash);
            assert_eq!(bundle.genesis.header.merkle_root, bundle.consensus.genesis_merkle_root);
        }
    }

    #[test]
    fn test_mainnet_example_scenario() {
        let bundle = ParameterBundle::for_network(Network::Main).unwrap();
        assert_eq!(bundle.genesis.header.time, 1532145131);
        assert_eq!(bundle.genesis.header.nonce, 0xE918);
        assert_eq!(bundle.genesis.header.bits, 0x1F0FFFFF);
        assert_eq!(bundle.genesis.header.version, 1);
        assert_eq!(bundle.genesis.txdata[0].outputs[0].value, 3500000358212617622);
        assert_eq!(
            bundle.consensus.genesis_hash.to_hex(),
            "e0b0b95cc209e17dd4280e3ab830256783d89ef714accce540232da33e2b320a"
        );
        assert_eq!(
            bundle.consensus.genesis_merkle_root.to_hex(),
            "7f7fd8e22ea946489fedb1151fdc397dfc666d474654edc155f07fec6ee64bb2"
        );
    }

    #[test]
    fn test_checkpoint_zero_is_genesis() {
        for network in Network::all() {
            let bundle = ParameterBundle::for_network(network).unwrap();
            assert_eq!(bundle.checkpoints.hash_at(0), Some(&bundle.genesis.block_hash()));
        }
    }

    #[test]
    fn test_checkpoint_heights_strictly_increasing() {
        for network in Network::all() {
            let bundle = ParameterBundle::for_network(network).unwrap();
            let entries = bundle.checkpoints.entries();
            assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }

    #[test]
    fn test_deployment_bits_unique_per_network() {
        for network in Network::all() {
            let bundle = ParameterBundle::for_network(network).unwrap();
            assert!(bundle.consensus.deployment_bits_unique());
            assert!(bundle.consensus.deployments.iter().all(|d| d.bit <= 28));
        }
    }

    #[test]
    fn test_message_start_unique_across_networks() {
        let magics: Vec<[u8; 4]> = Network::all()
            .iter()
            .map(|n| ParameterBundle::for_network(*n).unwrap().encoding.message_start)
            .collect();
        assert_ne!(magics[0], magics[1]);
        assert_ne!(magics[0], magics[2]);
        assert_ne!(magics[1], magics[2]);
    }

    #[test]
    fn test_prefixes_unique_within_each_network() {
        for network in Network::all() {
            let bundle = ParameterBundle::for_network(network).unwrap();
            assert!(bundle.encoding.has_unique_prefixes());
        }
    }

    #[test]
    fn test_regtest_flags_are_independent() {
        let bundle = ParameterBundle::for_network(Network::Regtest).unwrap();
        // Difficulty never adjusts, and blocks may be produced on demand;
        // both hold at once but are separate switches.
        assert!(bundle.consensus.no_pow_retargeting);
        assert!(bundle.mine_blocks_on_demand);

        let main = ParameterBundle::for_network(Network::Main).unwrap();
        assert!(!main.consensus.no_pow_retargeting);
        assert!(!main.mine_blocks_on_demand);
    }

    #[test]
    fn test_regtest_deployment_sentinels() {
        let bundle = ParameterBundle::for_network(Network::Regtest).unwrap();
        let segwit = bundle.consensus.deployment(DeploymentPos::Segwit);
        assert_eq!(segwit.start_time, Deployment::ALWAYS_ACTIVE);
        assert_eq!(segwit.timeout, Deployment::NO_TIMEOUT);
    }

    #[test]
    fn test_switch_heights_literals() {
        let main = ParameterBundle::for_network(Network::Main).unwrap();
        assert_eq!(main.consensus.switch_kgw_height, -1);
        assert_eq!(main.consensus.switch_digi_height, -1);
        assert_eq!(main.consensus.switch_lyra2rev2_dgw_height, 1);

        let regtest = ParameterBundle::for_network(Network::Regtest).unwrap();
        assert_eq!(regtest.consensus.switch_kgw_height, 20);
        assert_eq!(regtest.consensus.switch_digi_height, 40);
        assert_eq!(regtest.consensus.switch_lyra2rev2_dgw_height, 60);
    }

    #[test]
    fn test_override_touches_only_named_deployment() {
        let baseline = ParameterBundle::for_network(Network::Main).unwrap();
        let mut adjusted = baseline.clone();
        adjusted.update_deployment_parameters(DeploymentPos::Csv, 7, 11);

        let csv = adjusted.consensus.deployment(DeploymentPos::Csv);
        assert_eq!((csv.start_time, csv.timeout), (7, 11));
        assert_eq!(csv.bit, baseline.consensus.deployment(DeploymentPos::Csv).bit);

        // Everything else is untouched
        let mut reverted = adjusted.clone();
        reverted.update_deployment_parameters(
            DeploymentPos::Csv,
            baseline.consensus.deployment(DeploymentPos::Csv).start_time,
            baseline.consensus.deployment(DeploymentPos::Csv).timeout,
        );
        assert_eq!(reverted, baseline);
    }

    #[test]
    fn test_network_identifier_round_trip() {
        for network in Network::all() {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
        }
    }
}
