use primitive_types::U256;

use crate::forks::ForkSchedule;
use crate::Hash;

pub const MAINNET_FORK_SCHEDULE: ForkSchedule =
    ForkSchedule { poison_disaster: 255_000, carrying_capacity_limit: 500_000, reduced_heart_spawn: 590_000, life_steal: 795_000 };

pub const TESTNET_FORK_SCHEDULE: ForkSchedule =
    ForkSchedule { poison_disaster: 190_000, carrying_capacity_limit: 200_000, reduced_heart_spawn: 240_000, life_steal: 301_000 };

pub const MAINNET_GENESIS_HASH: Hash = Hash::from_hex_const("00000000db7eb7a9e1a06cf995363dcdc4c28e8ae04827a961942657db9a1631");
pub const TESTNET_GENESIS_HASH: Hash = Hash::from_hex_const("000000492c361a01ce7558a3bfb198ea3ff2f86f8b0c2e00d26135c53f4acbf7");
pub const REGTEST_GENESIS_HASH: Hash = Hash::from_hex_const("7543a69d7c2fcdb29a5ebec2fc064c074a35253b6f3072c8a749473aa590a29c");

/// Two weeks, in seconds.
pub const POW_TARGET_TIMESPAN: u64 = 14 * 24 * 60 * 60;
/// Per-block target spacing in seconds.
pub const POW_TARGET_SPACING: u64 = 150;

/// Merged-mining chain id for SHA256d auxpow.
pub const AUXPOW_CHAIN_ID_SHA256D: u32 = 6;
/// Merged-mining chain id for scrypt auxpow.
pub const AUXPOW_CHAIN_ID_SCRYPT: u32 = 2;

// U256 limbs are little endian, so the shift only touches the top limb.
/// `!0 >> 32`
pub const POW_LIMIT_SHA256D: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 32]);
/// `!0 >> 20`
pub const POW_LIMIT_SCRYPT: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 20]);
/// `!0 >> 1`, practically no limit
pub const POW_LIMIT_REGTEST: U256 = U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]);
