// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::output::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Output format and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output to JSON file
    #[arg(long = "json", value_name = "FILE", id = "output_json")]
    pub json: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Print a terminal summary instead of JSON on stdout
    #[arg(long = "summary")]
    pub summary: bool,

    /// Quiet mode (no output on stdout)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl OutputArgs {
    /// Format used for stdout
    pub fn stdout_format(&self) -> OutputFormat {
        if self.summary {
            OutputFormat::Terminal
        } else if self.json_pretty {
            OutputFormat::JSONPretty
        } else {
            OutputFormat::JSON
        }
    }

    pub fn colorize(&self) -> bool {
        !self.no_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_format() {
        let mut args = OutputArgs::default();
        assert_eq!(args.stdout_format(), OutputFormat::JSON);

        args.json_pretty = true;
        assert_eq!(args.stdout_format(), OutputFormat::JSONPretty);

        args.summary = true;
        assert_eq!(args.stdout_format(), OutputFormat::Terminal);
    }
}
