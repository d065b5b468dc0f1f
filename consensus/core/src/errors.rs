use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForkError {
    #[error("unknown fork id {0}")]
    UnknownFork(u32),

    #[error("unknown fork name '{0}'")]
    UnknownForkName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PowError {
    #[error("unknown pow algorithm id {0}")]
    UnknownAlgo(u8),

    #[error("unknown pow algorithm '{0}'")]
    UnknownAlgoName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkTypeError {
    #[error("unknown network '{0}'")]
    Unknown(String),
}

/// Contract violations in a consensus parameter table, reported when the table is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("pow target spacing must be non-zero")]
    ZeroTargetSpacing,

    #[error("pow target timespan {timespan} is not a multiple of target spacing {spacing}")]
    UnevenTimespan { timespan: u64, spacing: u64 },

    #[error("majority window must be non-zero")]
    ZeroMajorityWindow,

    #[error("majority threshold '{name}' ({threshold}) exceeds majority window ({window})")]
    MajorityExceedsWindow { name: &'static str, threshold: u32, window: u32 },

    #[error("subsidy halving interval must be non-zero")]
    ZeroSubsidyHalvingInterval,
}
