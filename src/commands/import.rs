// ImportCommand - Inventory from a saved nmap report
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use super::report::emit_inventory;
use crate::inventory::Inventory;
use crate::nmap::ScanRun;
use crate::{Args, Result};
use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

/// ImportCommand reads a saved nmap normal-format report (`-oN`) and
/// builds the same inventory a live scan would
pub struct ImportCommand {
    args: Args,
}

impl ImportCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ImportCommand {
    async fn execute(&self) -> Result<()> {
        let path = self
            .args
            .input_file
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No input file given"))?;

        let run = ScanRun::from_file(&path.to_string_lossy())
            .with_context(|| format!("Failed to read nmap report {}", path.display()))?;
        let inventory = Inventory::from_scan_run(&run);

        info!(
            "Imported {} host(s), {} port(s), {} with TLS data",
            inventory.hosts.len(),
            inventory.port_count(),
            inventory.tls_port_count()
        );

        emit_inventory(&self.args.output, &inventory)
    }

    fn name(&self) -> &'static str {
        "ImportCommand"
    }
}
