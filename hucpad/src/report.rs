//! Serializable snapshot of a consensus parameter table.

use consensus_core::{Fork, Hash, NetworkType, Params, PowAlgo};
use primitive_types::U256;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ParamsReport {
    pub network: NetworkType,
    pub genesis_hash: Hash,
    pub subsidy_halving_interval: u32,
    pub majority: MajorityReport,
    pub bip34_height: u32,
    pub bip34_hash: Hash,
    pub pow_no_retargeting: bool,
    pub pow_target_spacing: u64,
    pub pow_target_timespan: u64,
    pub difficulty_adjustment_interval: u64,
    pub strict_chain_id: bool,
    pub algos: Vec<AlgoReport>,
    /// Height the fork statuses were evaluated at
    pub height: Option<u32>,
    pub forks: Vec<ForkReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MajorityReport {
    pub enforce_block_upgrade: u32,
    pub reject_block_outdated: u32,
    pub window: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgoReport {
    pub algo: PowAlgo,
    pub pow_limit: String,
    pub auxpow_chain_id: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForkReport {
    pub fork: Fork,
    pub activation_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_effect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fork_height: Option<bool>,
}

impl ParamsReport {
    pub fn new(params: &Params, height: Option<u32>) -> Self {
        let algos = PowAlgo::iter()
            .map(|algo| AlgoReport {
                algo,
                pow_limit: u256_hex(params.pow_limit_for(algo)),
                auxpow_chain_id: params.auxpow_chain_id_for(algo),
            })
            .collect();

        let forks = Fork::iter()
            .map(|fork| ForkReport {
                fork,
                activation_height: params.activation_height(fork),
                in_effect: height.map(|h| params.fork_in_effect(fork, h)),
                is_fork_height: height.map(|h| params.is_fork_height(fork, h)),
            })
            .collect();

        Self {
            network: params.network,
            genesis_hash: params.genesis_hash,
            subsidy_halving_interval: params.subsidy_halving_interval,
            majority: MajorityReport {
                enforce_block_upgrade: params.majority_enforce_block_upgrade,
                reject_block_outdated: params.majority_reject_block_outdated,
                window: params.majority_window,
            },
            bip34_height: params.bip34_height,
            bip34_hash: params.bip34_hash,
            pow_no_retargeting: params.pow_no_retargeting,
            pow_target_spacing: params.pow_target_spacing,
            pow_target_timespan: params.pow_target_timespan,
            difficulty_adjustment_interval: params.difficulty_adjustment_interval(),
            strict_chain_id: params.strict_chain_id,
            algos,
            height,
            forks,
        }
    }
}

/// 64 hex characters, big endian.
pub fn u256_hex(value: U256) -> String {
    let mut be = [0u8; 32];
    value.to_big_endian(&mut be);
    hex::encode(be)
}
