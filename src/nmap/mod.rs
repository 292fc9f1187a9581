// Nmap module - hosts, ports and script output of one nmap run

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;

pub mod parser;

pub use parser::parse_normal_output;

/// Output of one script attached to a port
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptOutput {
    pub id: String,
    pub output: String,
}

/// A scanned port and the scripts that ran against it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedPort {
    pub id: u16,
    pub protocol: String,
    pub state: String,
    pub service: String,
    pub scripts: Vec<ScriptOutput>,
}

impl ScannedPort {
    /// Output of every script with the given id, joined in run order
    ///
    /// `None` when no such script ran on this port.
    pub fn script_output(&self, id: &str) -> Option<String> {
        let outputs: Vec<&str> = self
            .scripts
            .iter()
            .filter(|s| s.id == id)
            .map(|s| s.output.as_str())
            .collect();

        if outputs.is_empty() {
            None
        } else {
            Some(outputs.join("\n"))
        }
    }
}

/// One host from a scan report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedHost {
    pub ip: String,
    pub hostnames: Vec<String>,
    pub ports: Vec<ScannedPort>,
}

/// Everything read from one nmap run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRun {
    pub hosts: Vec<ScannedHost>,
}

impl ScanRun {
    /// Read a saved normal-format (`-oN`) report
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(parse_normal_output(&content))
    }

    pub fn port_count(&self) -> usize {
        self.hosts.iter().map(|h| h.ports.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(id: &str, output: &str) -> ScriptOutput {
        ScriptOutput {
            id: id.to_string(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_script_output_absent() {
        let port = ScannedPort {
            id: 443,
            scripts: vec![script("http-title", "Example")],
            ..Default::default()
        };
        assert_eq!(port.script_output("ssl-enum-ciphers"), None);
    }

    #[test]
    fn test_script_output_joins_repeats() {
        let port = ScannedPort {
            id: 443,
            scripts: vec![
                script("ssl-enum-ciphers", "TLSv1.2:"),
                script("http-title", "Example"),
                script("ssl-enum-ciphers", "TLSv1.3:"),
            ],
            ..Default::default()
        };
        assert_eq!(
            port.script_output("ssl-enum-ciphers").as_deref(),
            Some("TLSv1.2:\nTLSv1.3:")
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.nmap");
        fs::write(
            &path,
            "Nmap scan report for 10.0.0.1\nPORT    STATE SERVICE\n443/tcp open  https\n",
        )
        .unwrap();

        let run = ScanRun::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(run.hosts.len(), 1);
        assert_eq!(run.port_count(), 1);
    }
}
