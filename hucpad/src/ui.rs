//! User interface utilities for console output

use crate::report::ParamsReport;
use std::io::{self, Write};

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
}

/// Print startup banner
pub fn print_banner(version: &str, network: &str) {
    println!();
    println!("{}╔══════════════════════════════════════════════════════════════╗{}", colors::BRIGHT_CYAN, colors::RESET);
    println!(
        "{}║{}          {}HUC CONSENSUS PARAMETERS - HUCPAD v{:<10}{}          {}║{}",
        colors::BRIGHT_CYAN,
        colors::RESET,
        colors::BOLD,
        version,
        colors::RESET,
        colors::BRIGHT_CYAN,
        colors::RESET
    );
    println!(
        "{}║{}  Network: {}{:<50}{}  {}║{}",
        colors::BRIGHT_CYAN,
        colors::RESET,
        colors::BRIGHT_GREEN,
        network,
        colors::RESET,
        colors::BRIGHT_CYAN,
        colors::RESET
    );
    println!("{}╚══════════════════════════════════════════════════════════════╝{}", colors::BRIGHT_CYAN, colors::RESET);
    println!();
}

/// Status types for colored output
#[derive(Debug, Clone, Copy)]
pub enum StatusType {
    Success,
    Error,
}

/// Print status line with icon and color to stderr
pub fn print_status(icon: &str, message: &str, status: StatusType) {
    // stderr is unbuffered; nothing useful to do if it is gone
    let _ = write_status(&mut io::stderr().lock(), icon, message, status);
}

pub fn write_status<W: Write>(out: &mut W, icon: &str, message: &str, status: StatusType) -> io::Result<()> {
    let color = match status {
        StatusType::Success => colors::BRIGHT_GREEN,
        StatusType::Error => colors::BRIGHT_RED,
    };

    writeln!(out, "{}[{}]{} {}{}{}", color, icon, colors::RESET, color, message, colors::RESET)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!();
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
    println!("{}  {}{}{}", colors::BRIGHT_CYAN, colors::BOLD, title, colors::RESET);
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
    println!();
}

/// Print key-value pair in a formatted way
pub fn print_kv(key: &str, value: &str) {
    println!("  {}{:<32}{} {}{}{}", colors::BRIGHT_WHITE, key, colors::RESET, colors::BRIGHT_CYAN, value, colors::RESET);
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn print_report(report: &ParamsReport) {
    print_section("Consensus Parameters");
    print_kv("Genesis Hash", &report.genesis_hash.to_string());
    print_kv("Subsidy Halving Interval", &report.subsidy_halving_interval.to_string());
    print_kv(
        "Majority (enforce/reject/window)",
        &format!("{}/{}/{}", report.majority.enforce_block_upgrade, report.majority.reject_block_outdated, report.majority.window),
    );
    print_kv("BIP34 Height", &report.bip34_height.to_string());
    print_kv("BIP34 Hash", &report.bip34_hash.to_string());
    print_kv("Target Spacing", &format!("{}s", report.pow_target_spacing));
    print_kv("Target Timespan", &format!("{}s", report.pow_target_timespan));
    print_kv("Difficulty Adjustment Interval", &report.difficulty_adjustment_interval.to_string());
    print_kv("Retargeting Disabled", yes_no(report.pow_no_retargeting));
    print_kv("Strict Chain Id", yes_no(report.strict_chain_id));

    print_section("Proof of Work");
    for algo in &report.algos {
        print_kv(&format!("{} pow limit", algo.algo), &algo.pow_limit);
        print_kv(&format!("{} auxpow chain id", algo.algo), &algo.auxpow_chain_id.to_string());
    }

    match report.height {
        Some(height) => print_section(&format!("Forks at height {}", height)),
        None => print_section("Fork Schedule"),
    }
    for fork in &report.forks {
        let activation = fork.activation_height.map_or_else(|| "never".to_string(), |h| h.to_string());
        let status = match (fork.in_effect, fork.is_fork_height) {
            (Some(_), Some(true)) => format!("{}activates here{}", colors::BRIGHT_YELLOW, colors::RESET),
            (Some(true), _) => format!("{}active{}", colors::BRIGHT_GREEN, colors::RESET),
            (Some(false), _) => format!("{}inactive{}", colors::DIM, colors::RESET),
            _ => String::new(),
        };
        println!("  {}{:<26}{} {:>10}  {}", colors::BRIGHT_WHITE, fork.fork, colors::RESET, activation, status);
    }
    println!();
}
