use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hucpad")]
#[command(about = "Inspect HUC consensus parameters and fork schedule", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Network (mainnet, testnet, regtest)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Report fork status at this block height
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["hucpad"]);
        assert!(args.config_path.is_none());
        assert!(args.network.is_none());
        assert!(args.height.is_none());
        assert!(!args.json);
    }

    #[test]
    fn all_flags() {
        let args =
            Args::parse_from(["hucpad", "-c", "huc.toml", "--network", "testnet", "-l", "debug", "--height", "240000", "--json"]);
        assert_eq!(args.config_path, Some(PathBuf::from("huc.toml")));
        assert_eq!(args.network.as_deref(), Some("testnet"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.height, Some(240_000));
        assert!(args.json);
    }
}
