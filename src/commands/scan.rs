// ScanCommand - Live nmap scan of the given targets
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use super::report::emit_inventory;
use crate::external::NmapClient;
use crate::inventory::Inventory;
use crate::{Args, Result};
use async_trait::async_trait;
use tracing::{info, warn};

/// ScanCommand runs nmap's ssl-enum-ciphers script against every target
///
/// This command is responsible for:
/// - Resolving the probe configuration (file + CLI overrides)
/// - Running one nmap process per target with bounded concurrency
/// - Assembling the per-host/per-port inventory
/// - Reporting failed targets separately from ports without TLS data
pub struct ScanCommand {
    args: Args,
}

impl ScanCommand {
    /// Create a new ScanCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ScanCommand {
    async fn execute(&self) -> Result<()> {
        if self.args.targets.is_empty() {
            anyhow::bail!("No targets given. Pass hosts to scan, --input or --script-output.");
        }

        let config = self.args.probe_config()?;
        let client = NmapClient::with_path(config.nmap_path.clone());

        // Fail fast when nmap is missing rather than once per target
        let version = client.get_version().await?;
        info!("Using {}", version);

        let started = chrono::Utc::now();
        info!(
            "Scanning {} target(s) on ports {} (max {} concurrent)",
            self.args.targets.len(),
            config.ports,
            config.max_concurrent
        );

        let outcomes = client.scan_all(&self.args.targets, &config).await;
        let inventory = Inventory::from_outcomes(outcomes);

        let elapsed = chrono::Utc::now() - started;
        info!(
            "Scan finished in {}s: {} host(s), {} port(s) with TLS data, {} failure(s)",
            elapsed.num_seconds(),
            inventory.hosts.len(),
            inventory.tls_port_count(),
            inventory.failures.len()
        );

        emit_inventory(&self.args.output, &inventory)?;

        if inventory.hosts.is_empty() && !inventory.failures.is_empty() {
            warn!("Every target failed");
            anyhow::bail!("All {} target(s) failed", inventory.failures.len());
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ScanCommand"
    }
}
