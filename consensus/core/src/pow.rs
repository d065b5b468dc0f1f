//!
//! # Proof-of-work algorithms
//!
//! Blocks are mined with one of two algorithms. Every per-algorithm consensus
//! value is stored in a [`PerAlgo`] array indexed by [`PowAlgo::index`].
//!

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PowError;

/// Number of supported proof-of-work algorithms.
pub const NUM_ALGOS: usize = 2;

/// One value per proof-of-work algorithm.
pub type PerAlgo<T> = [T; NUM_ALGOS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PowAlgo {
    Sha256d = 0,
    Scrypt = 1,
}

impl PowAlgo {
    pub const ALL: [PowAlgo; NUM_ALGOS] = [PowAlgo::Sha256d, PowAlgo::Scrypt];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn iter() -> impl Iterator<Item = PowAlgo> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for PowAlgo {
    type Error = PowError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PowAlgo::Sha256d),
            1 => Ok(PowAlgo::Scrypt),
            _ => Err(PowError::UnknownAlgo(value)),
        }
    }
}

impl fmt::Display for PowAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowAlgo::Sha256d => write!(f, "sha256d"),
            PowAlgo::Scrypt => write!(f, "scrypt"),
        }
    }
}

impl FromStr for PowAlgo {
    type Err = PowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256d" | "sha256" => Ok(PowAlgo::Sha256d),
            "scrypt" => Ok(PowAlgo::Scrypt),
            _ => Err(PowError::UnknownAlgoName(s.to_string())),
        }
    }
}
