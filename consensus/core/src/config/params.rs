use once_cell::sync::Lazy;
use primitive_types::U256;
use tracing::debug;

use super::constants::*;
use crate::errors::ParamsError;
use crate::forks::{rules_for, ConsensusRules, ConsensusRulesExt, Fork};
use crate::network::NetworkType;
use crate::pow::{PerAlgo, PowAlgo};
use crate::{Hash, ZERO_HASH};

/// Parameters that influence chain consensus.
///
/// One table exists per network. Tables are validated when built and are
/// read-only afterwards; obtain the shared instance with [`select_params`].
#[derive(Debug)]
pub struct Params {
    /// Network this table belongs to
    pub network: NetworkType,
    pub genesis_hash: Hash,
    pub subsidy_halving_interval: u32,

    /* Block version upgrade majorities, counted over the last `majority_window` blocks */
    pub majority_enforce_block_upgrade: u32,
    pub majority_reject_block_outdated: u32,
    pub majority_window: u32,

    /// Block height at which BIP34 becomes active
    pub bip34_height: u32,
    /// Expected block hash at `bip34_height`
    pub bip34_hash: Hash,

    /* Proof of work */
    pub pow_limit: PerAlgo<U256>,
    pub pow_no_retargeting: bool,
    /// Seconds per block
    pub pow_target_spacing: u64,
    /// Seconds per retarget period
    pub pow_target_timespan: u64,

    /* Auxpow */
    pub auxpow_chain_id: PerAlgo<u32>,
    pub strict_chain_id: bool,

    /// Fork schedule of this network
    pub rules: Box<dyn ConsensusRules>,
}

impl Params {
    /// Validates `params`, returning it unchanged when every table invariant holds.
    pub fn checked(params: Params) -> Result<Params, ParamsError> {
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.subsidy_halving_interval == 0 {
            return Err(ParamsError::ZeroSubsidyHalvingInterval);
        }
        if self.pow_target_spacing == 0 {
            return Err(ParamsError::ZeroTargetSpacing);
        }
        if self.pow_target_timespan % self.pow_target_spacing != 0 {
            return Err(ParamsError::UnevenTimespan { timespan: self.pow_target_timespan, spacing: self.pow_target_spacing });
        }
        if self.majority_window == 0 {
            return Err(ParamsError::ZeroMajorityWindow);
        }
        for (name, threshold) in [
            ("enforce_block_upgrade", self.majority_enforce_block_upgrade),
            ("reject_block_outdated", self.majority_reject_block_outdated),
        ] {
            if threshold > self.majority_window {
                return Err(ParamsError::MajorityExceedsWindow { name, threshold, window: self.majority_window });
            }
        }
        Ok(())
    }

    /// Number of blocks between difficulty retargets.
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Legacy block versions are only accepted for the genesis block.
    pub fn allow_legacy_blocks(&self, height: u32) -> bool {
        height == 0
    }

    #[inline]
    pub fn fork_in_effect(&self, fork: Fork, height: u32) -> bool {
        self.rules.fork_in_effect(fork, height)
    }

    #[inline]
    pub fn is_fork_height(&self, fork: Fork, height: u32) -> bool {
        self.rules.is_fork_height(fork, height)
    }

    pub fn activation_height(&self, fork: Fork) -> Option<u32> {
        self.rules.activation_height(fork)
    }

    pub fn pow_limit_for(&self, algo: PowAlgo) -> U256 {
        self.pow_limit[algo.index()]
    }

    pub fn auxpow_chain_id_for(&self, algo: PowAlgo) -> u32 {
        self.auxpow_chain_id[algo.index()]
    }

    /// Whether `target` is no easier than the proof-of-work limit of `algo`.
    pub fn is_target_within_limit(&self, algo: PowAlgo, target: &U256) -> bool {
        *target <= self.pow_limit_for(algo)
    }
}

impl From<NetworkType> for Params {
    /// Builds a fresh, validated table. Prefer [`select_params`] for the shared one.
    fn from(network: NetworkType) -> Self {
        build(network)
    }
}

pub fn mainnet_params() -> Params {
    Params {
        network: NetworkType::Mainnet,
        genesis_hash: MAINNET_GENESIS_HASH,
        subsidy_halving_interval: 2_100_000,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        bip34_height: 1_000_000,
        bip34_hash: ZERO_HASH,
        pow_limit: [POW_LIMIT_SHA256D, POW_LIMIT_SCRYPT],
        pow_no_retargeting: false,
        pow_target_spacing: POW_TARGET_SPACING,
        pow_target_timespan: POW_TARGET_TIMESPAN,
        auxpow_chain_id: [AUXPOW_CHAIN_ID_SHA256D, AUXPOW_CHAIN_ID_SCRYPT],
        strict_chain_id: true,
        rules: rules_for(NetworkType::Mainnet),
    }
}

pub fn testnet_params() -> Params {
    Params {
        network: NetworkType::Testnet,
        genesis_hash: TESTNET_GENESIS_HASH,
        subsidy_halving_interval: 2_100_000,
        majority_enforce_block_upgrade: 51,
        majority_reject_block_outdated: 75,
        majority_window: 100,
        bip34_height: 1_000_000,
        bip34_hash: ZERO_HASH,
        pow_limit: [POW_LIMIT_SHA256D, POW_LIMIT_SCRYPT],
        pow_no_retargeting: false,
        pow_target_spacing: POW_TARGET_SPACING,
        pow_target_timespan: POW_TARGET_TIMESPAN,
        auxpow_chain_id: [AUXPOW_CHAIN_ID_SHA256D, AUXPOW_CHAIN_ID_SCRYPT],
        strict_chain_id: false,
        rules: rules_for(NetworkType::Testnet),
    }
}

pub fn regtest_params() -> Params {
    Params {
        network: NetworkType::Regtest,
        genesis_hash: REGTEST_GENESIS_HASH,
        subsidy_halving_interval: 150,
        majority_enforce_block_upgrade: 750,
        majority_reject_block_outdated: 950,
        majority_window: 1000,
        // not reached on regtest chains
        bip34_height: 100_000_000,
        bip34_hash: ZERO_HASH,
        pow_limit: [POW_LIMIT_REGTEST, POW_LIMIT_REGTEST],
        pow_no_retargeting: true,
        pow_target_spacing: POW_TARGET_SPACING,
        pow_target_timespan: POW_TARGET_TIMESPAN,
        auxpow_chain_id: [AUXPOW_CHAIN_ID_SHA256D, AUXPOW_CHAIN_ID_SCRYPT],
        strict_chain_id: true,
        rules: rules_for(NetworkType::Regtest),
    }
}

fn build(network: NetworkType) -> Params {
    build_checked(match network {
        NetworkType::Mainnet => mainnet_params(),
        NetworkType::Testnet => testnet_params(),
        NetworkType::Regtest => regtest_params(),
    })
}

/// Validates a table literal. A malformed literal is a build defect, so this panics.
fn build_checked(params: Params) -> Params {
    let network = params.network;
    match Params::checked(params) {
        Ok(params) => {
            debug!(
                %network,
                genesis = %params.genesis_hash,
                difficulty_adjustment_interval = params.difficulty_adjustment_interval(),
                "built consensus parameters"
            );
            params
        }
        Err(err) => panic!("malformed {network} consensus parameters: {err}"),
    }
}

static MAINNET_PARAMS: Lazy<Params> = Lazy::new(|| build(NetworkType::Mainnet));
static TESTNET_PARAMS: Lazy<Params> = Lazy::new(|| build(NetworkType::Testnet));
static REGTEST_PARAMS: Lazy<Params> = Lazy::new(|| build(NetworkType::Regtest));

/// Returns the process-wide parameter table for `network`, building it on first use.
pub fn select_params(network: NetworkType) -> &'static Params {
    match network {
        NetworkType::Mainnet => Lazy::force(&MAINNET_PARAMS),
        NetworkType::Testnet => Lazy::force(&TESTNET_PARAMS),
        NetworkType::Regtest => Lazy::force(&REGTEST_PARAMS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_valid() {
        for network in NetworkType::iter() {
            let params = select_params(network);
            assert_eq!(params.network, network);
            assert_eq!(params.validate(), Ok(()));
        }
    }

    #[test]
    fn difficulty_adjustment_interval_is_exact() {
        for network in NetworkType::iter() {
            let params = select_params(network);
            assert_eq!(params.pow_target_timespan % params.pow_target_spacing, 0);
            assert_eq!(params.difficulty_adjustment_interval(), 8064);
        }
    }

    #[test]
    fn interval_from_custom_timing() {
        let mut params = regtest_params();
        params.pow_target_timespan = 1440;
        params.pow_target_spacing = 2;
        assert_eq!(params.difficulty_adjustment_interval(), 720);
    }

    #[test]
    fn legacy_blocks_only_at_genesis() {
        let params = select_params(NetworkType::Mainnet);
        assert!(params.allow_legacy_blocks(0));
        assert!(!params.allow_legacy_blocks(1));
        assert!(!params.allow_legacy_blocks(255_000));
        assert!(!params.allow_legacy_blocks(u32::MAX));
    }

    #[test]
    fn mainnet_values() {
        let params = select_params(NetworkType::Mainnet);
        assert_eq!(params.genesis_hash.to_string(), "00000000db7eb7a9e1a06cf995363dcdc4c28e8ae04827a961942657db9a1631");
        assert_eq!(params.subsidy_halving_interval, 2_100_000);
        assert_eq!(
            (params.majority_enforce_block_upgrade, params.majority_reject_block_outdated, params.majority_window),
            (750, 950, 1000)
        );
        assert_eq!(params.pow_limit_for(PowAlgo::Sha256d), U256::MAX >> 32);
        assert_eq!(params.pow_limit_for(PowAlgo::Scrypt), U256::MAX >> 20);
        assert_eq!(params.auxpow_chain_id_for(PowAlgo::Sha256d), 6);
        assert_eq!(params.auxpow_chain_id_for(PowAlgo::Scrypt), 2);
        assert!(params.strict_chain_id);
        assert!(!params.pow_no_retargeting);
    }

    #[test]
    fn testnet_and_regtest_values() {
        let testnet = select_params(NetworkType::Testnet);
        assert!(!testnet.strict_chain_id);
        assert_eq!(testnet.majority_window, 100);
        assert_ne!(testnet.genesis_hash, select_params(NetworkType::Mainnet).genesis_hash);

        let regtest = select_params(NetworkType::Regtest);
        assert!(regtest.pow_no_retargeting);
        assert_eq!(regtest.subsidy_halving_interval, 150);
        assert_eq!(regtest.pow_limit_for(PowAlgo::Scrypt), U256::MAX >> 1);
    }

    #[test]
    fn target_limit_check() {
        let params = select_params(NetworkType::Mainnet);
        let limit = params.pow_limit_for(PowAlgo::Sha256d);
        assert!(params.is_target_within_limit(PowAlgo::Sha256d, &limit));
        assert!(params.is_target_within_limit(PowAlgo::Sha256d, &(limit >> 8)));
        assert!(!params.is_target_within_limit(PowAlgo::Sha256d, &(limit + 1)));
        // the scrypt limit is easier than the sha256d one
        assert!(params.is_target_within_limit(PowAlgo::Scrypt, &(limit + 1)));
    }

    #[test]
    fn params_delegate_to_rules() {
        let params = select_params(NetworkType::Testnet);
        assert!(params.fork_in_effect(Fork::ReducedHeartSpawn, 240_000));
        assert!(params.is_fork_height(Fork::ReducedHeartSpawn, 240_000));
        assert!(!params.is_fork_height(Fork::ReducedHeartSpawn, 240_001));
    }

    #[test]
    fn selection_is_shared() {
        let a = select_params(NetworkType::Regtest);
        let b = select_params(NetworkType::Regtest);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn from_network_builds_fresh_table() {
        let params: Params = NetworkType::Testnet.into();
        assert!(!std::ptr::eq(&params, select_params(NetworkType::Testnet)));
        assert_eq!(params.genesis_hash, TESTNET_GENESIS_HASH);
    }

    #[test]
    #[should_panic(expected = "malformed mainnet consensus parameters: pow target spacing must be non-zero")]
    fn building_a_zero_spacing_table_panics() {
        let mut params = mainnet_params();
        params.pow_target_spacing = 0;
        build_checked(params);
    }

    #[test]
    #[should_panic(expected = "malformed testnet consensus parameters")]
    fn building_a_table_with_oversized_majority_panics() {
        let mut params = testnet_params();
        params.majority_enforce_block_upgrade = params.majority_window + 1;
        build_checked(params);
    }

    #[test]
    fn building_a_valid_table_returns_it() {
        let params = build_checked(regtest_params());
        assert_eq!(params.network, NetworkType::Regtest);
        assert_eq!(params.activation_height(Fork::LifeSteal), Some(301_000));
    }

    #[test]
    fn rejects_zero_spacing() {
        let mut params = mainnet_params();
        params.pow_target_spacing = 0;
        assert_eq!(Params::checked(params).unwrap_err(), ParamsError::ZeroTargetSpacing);
    }

    #[test]
    fn rejects_uneven_timespan() {
        let mut params = mainnet_params();
        params.pow_target_timespan = 1441;
        params.pow_target_spacing = 2;
        assert_eq!(params.validate(), Err(ParamsError::UnevenTimespan { timespan: 1441, spacing: 2 }));
    }

    #[test]
    fn rejects_majority_above_window() {
        let mut params = testnet_params();
        params.majority_reject_block_outdated = 101;
        assert_eq!(
            params.validate(),
            Err(ParamsError::MajorityExceedsWindow { name: "reject_block_outdated", threshold: 101, window: 100 })
        );

        let mut params = testnet_params();
        params.majority_enforce_block_upgrade = 200;
        assert!(matches!(params.validate(), Err(ParamsError::MajorityExceedsWindow { name: "enforce_block_upgrade", .. })));
    }

    #[test]
    fn rejects_empty_window_and_halving() {
        let mut params = regtest_params();
        params.majority_window = 0;
        params.majority_enforce_block_upgrade = 0;
        params.majority_reject_block_outdated = 0;
        assert_eq!(params.validate(), Err(ParamsError::ZeroMajorityWindow));

        let mut params = regtest_params();
        params.subsidy_halving_interval = 0;
        assert_eq!(params.validate(), Err(ParamsError::ZeroSubsidyHalvingInterval));
    }
}
