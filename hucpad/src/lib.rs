//! HUCPad - HUC node tooling
//!
//! Resolves the startup network selection (config file plus CLI overrides) into
//! the consensus parameter table and reports its constants and fork schedule.

pub mod cli;
pub mod config;
pub mod report;
pub mod ui;

pub use cli::Args;
pub use config::Config;
pub use report::ParamsReport;
