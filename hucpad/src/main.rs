use consensus_core::select_params;
use hucpad::{cli, ui, Config, ParamsReport};
use std::process;
use tracing::{debug, error, info};

fn main() {
    // Parse command line arguments
    let args = cli::parse_args();

    // Load configuration (use defaults unless config file is provided)
    let mut config = match &args.config_path {
        Some(path) => Config::load(path).unwrap_or_else(|e| fail(&format!("Failed to load config: {}", e))),
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Err(e) = config.apply_cli_overrides(&args) {
        fail(&format!("Invalid arguments: {}", e));
    }

    init_logging(&config.log_level);
    debug!(?config, "configuration resolved");

    let params = select_params(config.network);
    info!(network = %config.network, genesis = %params.genesis_hash, "consensus parameters selected");

    let report = ParamsReport::new(params, config.report.height);
    if config.report.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&format!("Failed to serialize report: {}", e)),
        }
        return;
    }

    ui::print_banner(env!("CARGO_PKG_VERSION"), &config.network.to_string());
    ui::print_report(&report);
    ui::print_status("✓", &format!("{} parameter table valid", config.network), ui::StatusType::Success);
}

fn fail(message: &str) -> ! {
    ui::print_status("✗", message, ui::StatusType::Error);
    error!("{}", message);
    process::exit(1);
}

fn init_logging(log_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries the report
    fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).init();
}
