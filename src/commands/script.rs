// ScriptCommand - Parse raw ssl-enum-ciphers text for a single port
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::output::json::{generate_json, write_json_file};
use crate::tls_enum::{ScriptReport, split_report};
use crate::{Args, Result};
use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

/// ScriptCommand feeds one file of script output straight to the parser and
/// prints the resulting sections as JSON
pub struct ScriptCommand {
    args: Args,
}

impl ScriptCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ScriptCommand {
    async fn execute(&self) -> Result<()> {
        let path = self
            .args
            .script_output
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No script output file given"))?;

        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let report = split_report(Some(&text));
        if report == ScriptReport::NoData {
            info!("{} is empty, no TLS data", path.display());
        }
        let result = report.into_result();

        let output = &self.args.output;
        if let Some(json_path) = &output.json {
            write_json_file(&result, &json_path.to_string_lossy(), output.json_pretty)?;
        }
        if !output.quiet {
            println!("{}", generate_json(&result, output.json_pretty)?);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ScriptCommand"
    }
}
