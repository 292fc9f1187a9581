// Probe configuration - TOML file settings for the nmap runner

use crate::error::InventoryError;
use crate::security::{validate_extra_arg, validate_port_spec};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for running nmap, loadable from a TOML file
///
/// Any field missing from the file falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Path or name of the nmap binary
    pub nmap_path: String,

    /// Port specification handed to `-p`
    pub ports: String,

    /// Timeout for one nmap invocation in seconds
    pub timeout_seconds: u64,

    /// Maximum number of nmap processes running at once
    pub max_concurrent: usize,

    /// Retries for timed out or failed invocations
    pub retries: usize,

    /// Additional arguments appended before the target
    pub extra_args: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            nmap_path: "nmap".to_string(),
            ports: "443".to_string(),
            timeout_seconds: 300, // 5 minutes
            max_concurrent: 4,
            retries: 0,
            extra_args: Vec::new(),
        }
    }
}

impl ProbeConfig {
    /// Create config from file
    pub fn from_file(path: &str) -> Result<Self, InventoryError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| InventoryError::FileSystemError {
                path: path.to_string(),
                source,
            })?;
        Self::from_toml(&content).map_err(|e| match e {
            InventoryError::ConfigError { message, .. } => InventoryError::ConfigError {
                path: path.to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self, InventoryError> {
        let config: ProbeConfig =
            toml::from_str(content).map_err(|e| InventoryError::ConfigError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Create example config file
    pub fn create_example(path: &str) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), InventoryError> {
        validate_port_spec(&self.ports)?;
        for arg in &self.extra_args {
            validate_extra_arg(arg)?;
        }
        if self.max_concurrent == 0 {
            return Err(InventoryError::ConfigError {
                path: "<inline>".to_string(),
                message: "max_concurrent must be at least 1".to_string(),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(InventoryError::ConfigError {
                path: "<inline>".to_string(),
                message: "timeout_seconds must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProbeConfig::default();
        assert_eq!(config.nmap_path, "nmap");
        assert_eq!(config.timeout(), Duration::from_secs(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = ProbeConfig::from_toml("ports = \"443,8443\"\nmax_concurrent = 8\n").unwrap();
        assert_eq!(config.ports, "443,8443");
        assert_eq!(config.max_concurrent, 8);
        assert_eq!(config.nmap_path, "nmap");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ProbeConfig::from_toml("ports = \"443;id\"").is_err());
        assert!(ProbeConfig::from_toml("max_concurrent = 0").is_err());
        assert!(ProbeConfig::from_toml("extra_args = [\"-oX\"]").is_err());
        assert!(matches!(
            ProbeConfig::from_toml("timeout_seconds = \"soon\""),
            Err(InventoryError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_example_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.toml");
        let path = path.to_str().unwrap();

        ProbeConfig::create_example(path).unwrap();
        assert_eq!(ProbeConfig::from_file(path).unwrap(), ProbeConfig::default());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ProbeConfig::from_file("/nonexistent/probe.toml"),
            Err(InventoryError::FileSystemError { .. })
        ));
    }
}
