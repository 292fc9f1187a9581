// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::config::ProbeConfig;
use crate::error::InventoryError;
use clap::Parser;
use std::path::PathBuf;

mod output_args;
mod probe_args;

pub use output_args::OutputArgs;
pub use probe_args::ProbeArgs;

/// tlsinventory - TLS cipher inventories from nmap ssl-enum-ciphers
///
/// The Args struct composes:
/// - Targets and input sources
/// - nmap invocation settings (ProbeArgs)
/// - Output formats (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version)]
#[command(name = "tlsinventory")]
#[command(about = "TLS cipher-suite inventories from nmap ssl-enum-ciphers", long_about = None)]
pub struct Args {
    // ============ Target Specification and Input ============
    /// Hosts, IP addresses or CIDR ranges to scan
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Read a saved nmap normal-format report instead of scanning
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Parse raw ssl-enum-ciphers text for a single port
    #[arg(long = "script-output", value_name = "FILE")]
    pub script_output: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    // ============ nmap Invocation ============
    #[command(flatten)]
    pub probe: ProbeArgs,

    // ============ Output Formats and Display ============
    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Configuration from `--config` with command-line overrides applied
    pub fn probe_config(&self) -> Result<ProbeConfig, InventoryError> {
        let mut config = match &self.probe.config {
            Some(path) => ProbeConfig::from_file(&path.to_string_lossy())?,
            None => ProbeConfig::default(),
        };

        if let Some(path) = &self.probe.nmap_path {
            config.nmap_path = path.clone();
        }
        if let Some(ports) = &self.probe.ports {
            config.ports = ports.clone();
        }
        if let Some(timeout) = self.probe.timeout {
            config.timeout_seconds = timeout;
        }
        if let Some(max) = self.probe.max_concurrent {
            config.max_concurrent = max;
        }
        if let Some(retries) = self.probe.retries {
            config.retries = retries;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets_and_overrides() {
        let args = Args::parse_from([
            "tlsinventory",
            "example.com",
            "10.0.0.0/30",
            "-p",
            "443,8443",
            "--timeout",
            "60",
            "--json-pretty",
        ]);

        assert_eq!(args.targets, vec!["example.com", "10.0.0.0/30"]);
        assert!(args.output.json_pretty);

        let config = args.probe_config().unwrap();
        assert_eq!(config.ports, "443,8443");
        assert_eq!(config.timeout_seconds, 60);
        assert_eq!(config.nmap_path, "nmap");
    }

    #[test]
    fn test_config_file_with_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.toml");
        std::fs::write(&path, "ports = \"8443\"\nmax_concurrent = 2\n").unwrap();

        let args = Args::parse_from([
            "tlsinventory",
            "--config",
            path.to_str().unwrap(),
            "--max-concurrent",
            "6",
        ]);

        let config = args.probe_config().unwrap();
        assert_eq!(config.ports, "8443");
        assert_eq!(config.max_concurrent, 6);
    }

    #[test]
    fn test_all_ports_and_qualified_ports() {
        let args = Args::parse_from(["tlsinventory", "-p", "-", "example.com."]);
        assert_eq!(args.targets, vec!["example.com."]);
        assert_eq!(args.probe_config().unwrap().ports, "-");

        let args = Args::parse_from(["tlsinventory", "--ports", "-1024", "example.com"]);
        assert_eq!(args.probe_config().unwrap().ports, "-1024");

        let args = Args::parse_from(["tlsinventory", "-p", "T:443,U:53", "example.com"]);
        assert_eq!(args.probe_config().unwrap().ports, "T:443,U:53");
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = Args::parse_from(["tlsinventory", "-p", "443;id"]);
        assert!(args.probe_config().is_err());
    }
}
