//! Consensus parameters and fork schedule of the HUC chain.
//!
//! Validation code selects a network once at startup with
//! [`select_params`] and then queries the returned table read-only:
//!
//! ```
//! use consensus_core::{select_params, Fork, NetworkType};
//!
//! let params = select_params(NetworkType::Mainnet);
//! assert!(params.fork_in_effect(Fork::PoisonDisaster, 255_000));
//! assert!(params.is_fork_height(Fork::PoisonDisaster, 255_000));
//! assert_eq!(params.difficulty_adjustment_interval(), 8064);
//! ```

pub mod config;
pub mod errors;
pub mod forks;
pub mod network;
pub mod pow;

pub use config::{select_params, Params};
pub use forks::{ConsensusRules, ConsensusRulesExt, Fork};
pub use huc_hashes::{Hash, ZERO_HASH};
pub use network::NetworkType;
pub use pow::{PowAlgo, NUM_ALGOS};
