// tlsinventory - TLS cipher-suite inventories from nmap ssl-enum-ciphers reports
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! tlsinventory turns the free-form report of nmap's `ssl-enum-ciphers`
//! script into a structured inventory: per host, per port, per TLS version
//! the offered ciphers, compressors, cipher preference and warnings, plus
//! the port's least-strength grade.
//!
//! The parser lives in [`tls_enum`] and has no I/O; everything around it
//! (running nmap, reading saved reports, rendering) is layered on top.
//!
//! ```
//! use tlsinventory::tls_enum::parse;
//!
//! let result = parse("TLSv1.2:\n  ciphers:\n    TLS_AES_128_GCM_SHA256\nleast strength: A\n");
//! assert_eq!(result.sections["TLSv1.2"].ciphers, vec!["TLS_AES_128_GCM_SHA256"]);
//! assert_eq!(result.least_strength, "A");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod external;
pub mod inventory;
pub mod nmap;
pub mod output;
pub mod security;
pub mod tls_enum;
pub mod utils;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::InventoryError;
pub use crate::inventory::Inventory;
pub use crate::output::OutputFormat;
pub use crate::tls_enum::{ParseResult, SectionRecord, parse};

/// Result type for tlsinventory operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for tlsinventory operations
pub use anyhow::Error;
