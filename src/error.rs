// Error types for tlsinventory
//
// Failures of the scan pipeline around the parser. The parser itself has no
// error type: missing script output is a ScriptReport, not an error.

use crate::security::ValidationError;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Main error type for tlsinventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The nmap binary could not be started
    #[error("nmap binary not found at '{path}': {source}")]
    ProbeNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    /// nmap ran but exited unsuccessfully
    #[error("nmap exited with status {status} for {target}: {stderr}")]
    ProbeFailed {
        target: String,
        status: i32,
        stderr: String,
    },

    /// nmap did not finish in time
    #[error("nmap timed out after {duration:?} for {target}")]
    ProbeTimeout { target: String, duration: Duration },

    /// Target, port or argument rejected before running nmap
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {path}: {message}")]
    ConfigError { path: String, message: String },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: io::Error,
    },

    /// File system errors
    #[error("File system error: {path}: {source}")]
    FileSystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl InventoryError {
    /// Timeouts and non-zero exits are worth retrying; bad input is not
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            InventoryError::ProbeTimeout { .. } | InventoryError::ProbeFailed { .. }
        )
    }
}

/// Helper macro for bailing out with an [`InventoryError::Other`]
#[macro_export]
macro_rules! inventory_bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::InventoryError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::InventoryError::Other(format!($fmt, $($arg)*)))
    };
}
