// Commands module - Command Pattern implementation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod command;
mod report;
mod router;

// Individual command implementations
mod config_example;
mod import;
mod scan;
mod script;

pub use command::Command;
pub use router::CommandRouter;

// Re-export individual commands for testing purposes
pub use config_example::ConfigExampleCommand;
pub use import::ImportCommand;
pub use scan::ScanCommand;
pub use script::ScriptCommand;
