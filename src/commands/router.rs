// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, ConfigExampleCommand, ImportCommand, ScanCommand, ScriptCommand};
use crate::Args;
use crate::error::InventoryError;

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Priority-based routing:
/// 1. Example configuration (--config-example)
/// 2. Raw script output parsing (--script-output)
/// 3. Saved nmap report import (--input)
/// 4. Live nmap scan of the given targets (default)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    ///
    /// # Errors
    /// Returns an [`InventoryError`] if the arguments combine conflicting
    /// input sources
    pub fn route(args: Args) -> Result<Box<dyn Command>, InventoryError> {
        Self::validate_routing(&args)?;

        // Priority 1: Example configuration
        if args.config_example.is_some() {
            return Ok(Box::new(ConfigExampleCommand::new(args)));
        }

        // Priority 2: Raw script output for one port
        if args.script_output.is_some() {
            return Ok(Box::new(ScriptCommand::new(args)));
        }

        // Priority 3: Saved nmap report
        if args.input_file.is_some() {
            return Ok(Box::new(ImportCommand::new(args)));
        }

        // Priority 4: Live scan (default)
        Ok(Box::new(ScanCommand::new(args)))
    }

    /// Check that at most one input source was given
    pub fn validate_routing(args: &Args) -> Result<(), InventoryError> {
        let sources = [
            !args.targets.is_empty(),
            args.input_file.is_some(),
            args.script_output.is_some(),
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        if sources > 1 {
            crate::inventory_bail!(
                "Choose one input: targets, --input or --script-output ({} given)",
                sources
            );
        }

        Ok(())
    }
}
