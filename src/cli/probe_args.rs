// nmap invocation arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// How nmap is run
///
/// Every field overrides the matching setting of the `--config` file.
#[derive(Args, Debug, Clone, Default)]
pub struct ProbeArgs {
    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the nmap binary
    #[arg(long = "nmap-path", value_name = "PATH")]
    pub nmap_path: Option<String>,

    /// Ports to scan (nmap -p syntax: lists, ranges, `-` for all, T:/U:/S:
    /// qualifiers; default 443)
    #[arg(
        short = 'p',
        long = "ports",
        value_name = "PORTS",
        allow_hyphen_values = true
    )]
    pub ports: Option<String>,

    /// Timeout for each nmap run in seconds (default 300)
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Maximum number of concurrent nmap runs
    #[arg(long = "max-concurrent", value_name = "N")]
    pub max_concurrent: Option<usize>,

    /// Retries for timed out or failed runs
    #[arg(long = "retries", value_name = "N")]
    pub retries: Option<usize>,
}
