//!
//! # Fork schedule
//!
//! Height-gated consensus rule changes. A fork becomes active at a fixed,
//! per-network height and stays active forever after. This module only
//! answers *whether* a fork is active; what a fork changes is decided by the
//! validation code that asks.
//!

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::constants::{MAINNET_FORK_SCHEDULE, TESTNET_FORK_SCHEDULE};
use crate::errors::ForkError;
use crate::network::NetworkType;

/// Named protocol changes, in order of their historical activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fork {
    /// General cost raised from 1 to 10 HUC and poison disasters introduced.
    PoisonDisaster,
    /// Maximum carrying capacity, no spawn death, stricter tx version and auxpow checks.
    CarryingCapacityLimit,
    /// General cost 200 HUC, carrying capacity 2000 HUC, heart spawn rate 1/500.
    ReducedHeartSpawn,
    /// Destruct game fee, hearts disabled, randomised spawn and banks.
    LifeSteal,
}

impl Fork {
    pub const ALL: [Fork; 4] = [Fork::PoisonDisaster, Fork::CarryingCapacityLimit, Fork::ReducedHeartSpawn, Fork::LifeSteal];

    /// Stable numeric id, as carried between components.
    pub const fn id(self) -> u32 {
        self as u32
    }

    pub fn iter() -> impl Iterator<Item = Fork> {
        Self::ALL.into_iter()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Fork::PoisonDisaster => "poison-disaster",
            Fork::CarryingCapacityLimit => "carrying-capacity-limit",
            Fork::ReducedHeartSpawn => "reduced-heart-spawn",
            Fork::LifeSteal => "life-steal",
        }
    }
}

impl TryFrom<u32> for Fork {
    type Error = ForkError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Fork::iter().find(|fork| fork.id() == id).ok_or(ForkError::UnknownFork(id))
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Fork {
    type Err = ForkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Fork::iter().find(|fork| fork.name() == lower).ok_or_else(|| ForkError::UnknownForkName(s.to_string()))
    }
}

/// Activation height of every fork on one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForkSchedule {
    pub poison_disaster: u32,
    pub carrying_capacity_limit: u32,
    pub reduced_heart_spawn: u32,
    pub life_steal: u32,
}

impl ForkSchedule {
    pub const fn activation_height(&self, fork: Fork) -> u32 {
        match fork {
            Fork::PoisonDisaster => self.poison_disaster,
            Fork::CarryingCapacityLimit => self.carrying_capacity_limit,
            Fork::ReducedHeartSpawn => self.reduced_heart_spawn,
            Fork::LifeSteal => self.life_steal,
        }
    }

    #[inline]
    pub const fn is_active(&self, fork: Fork, height: u32) -> bool {
        height >= self.activation_height(fork)
    }
}

/// Consensus behaviour that is more than a set of constants.
///
/// Implementors provide [`fork_in_effect`](Self::fork_in_effect) only. It must be
/// monotonic in `height`: once a fork is in effect it stays in effect. Everything
/// derived from it lives on [`ConsensusRulesExt`].
pub trait ConsensusRules: fmt::Debug + Send + Sync {
    /// Whether `fork` is in effect for a block at `height`.
    fn fork_in_effect(&self, fork: Fork, height: u32) -> bool;
}

/// Queries derived from [`ConsensusRules::fork_in_effect`], identical for every network.
///
/// Implemented for all rule sets by the blanket impl below, so no rule set can
/// override them.
pub trait ConsensusRulesExt: ConsensusRules {
    /// Whether `height` is exactly the first block at which `fork` is in effect.
    ///
    /// Height 0 is never a fork height, there is no parent height to compare with.
    fn is_fork_height(&self, fork: Fork, height: u32) -> bool {
        if height == 0 {
            return false;
        }
        self.fork_in_effect(fork, height) && !self.fork_in_effect(fork, height - 1)
    }

    /// Same as [`fork_in_effect`](ConsensusRules::fork_in_effect) for a raw fork id.
    ///
    /// # Panics
    ///
    /// Panics if `id` names no fork. That means two components disagree on the
    /// fork list, and no answer is safe to return.
    fn fork_id_in_effect(&self, id: u32, height: u32) -> bool {
        match Fork::try_from(id) {
            Ok(fork) => self.fork_in_effect(fork, height),
            Err(err) => panic!("consensus rules queried with {err}"),
        }
    }

    /// Forks in effect at `height`, in activation order.
    fn active_forks(&self, height: u32) -> Vec<Fork> {
        Fork::iter().filter(|&fork| self.fork_in_effect(fork, height)).collect()
    }

    /// Lowest height at which `fork` is in effect, `None` if it never activates.
    fn activation_height(&self, fork: Fork) -> Option<u32> {
        if !self.fork_in_effect(fork, u32::MAX) {
            return None;
        }
        let (mut lo, mut hi) = (0u32, u32::MAX);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.fork_in_effect(fork, mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Some(lo)
    }
}

impl<T: ConsensusRules + ?Sized> ConsensusRulesExt for T {}

#[derive(Debug, Clone, Copy, Default)]
pub struct MainnetRules;

impl ConsensusRules for MainnetRules {
    fn fork_in_effect(&self, fork: Fork, height: u32) -> bool {
        MAINNET_FORK_SCHEDULE.is_active(fork, height)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TestnetRules;

impl ConsensusRules for TestnetRules {
    fn fork_in_effect(&self, fork: Fork, height: u32) -> bool {
        TESTNET_FORK_SCHEDULE.is_active(fork, height)
    }
}

/// Regtest uses the testnet schedule unchanged. Overrides go here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegtestRules {
    testnet: TestnetRules,
}

impl ConsensusRules for RegtestRules {
    fn fork_in_effect(&self, fork: Fork, height: u32) -> bool {
        self.testnet.fork_in_effect(fork, height)
    }
}

/// Builds the rule set for `network`.
pub fn rules_for(network: NetworkType) -> Box<dyn ConsensusRules> {
    match network {
        NetworkType::Mainnet => Box::new(MainnetRules),
        NetworkType::Testnet => Box::new(TestnetRules),
        NetworkType::Regtest => Box::new(RegtestRules::default()),
    }
}
