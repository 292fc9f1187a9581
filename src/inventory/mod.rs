// Inventory module - per-host, per-port TLS inventory assembled from nmap runs
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::external::TargetOutcome;
use crate::nmap::{ScanRun, ScannedHost, ScannedPort};
use crate::tls_enum::{SCRIPT_ID, ScriptReport, TlsVersions, split_report};
use serde::{Deserialize, Serialize};

/// One port with its TLS inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInventory {
    pub id: u16,
    pub protocol: String,
    pub service: String,
    pub state: String,
    #[serde(rename = "ssl-enum-ciphers")]
    pub tls: TlsVersions,
    /// Whether the port carried any ssl-enum-ciphers output at all
    #[serde(skip)]
    pub has_script_output: bool,
}

impl PortInventory {
    /// Build the inventory for one port
    ///
    /// Only ssl-enum-ciphers output is considered. Several outputs for the
    /// same port are concatenated and parsed as one report, so sections
    /// from each are kept.
    pub fn from_port(port: &ScannedPort) -> Self {
        let output = port.script_output(SCRIPT_ID);
        let report = split_report(output.as_deref());

        if let ScriptReport::Parsed(result) = &report {
            let unknown = result.unknown_labels();
            if !unknown.is_empty() {
                tracing::debug!(
                    "Port {}/{}: ignoring unknown version sections {:?}",
                    port.id,
                    port.protocol,
                    unknown
                );
            }
        }

        Self {
            id: port.id,
            protocol: port.protocol.clone(),
            service: port.service.clone(),
            state: port.state.clone(),
            tls: report.to_versions(),
            has_script_output: report.has_data(),
        }
    }
}

/// One host with all of its ports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInventory {
    pub ip: String,
    pub hostnames: Vec<String>,
    pub ports: Vec<PortInventory>,
}

impl HostInventory {
    pub fn from_host(host: &ScannedHost) -> Self {
        Self {
            ip: host.ip.clone(),
            hostnames: host.hostnames.clone(),
            ports: host.ports.iter().map(PortInventory::from_port).collect(),
        }
    }
}

/// A target whose scan failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeFailure {
    pub target: String,
    pub error: String,
}

/// Complete inventory for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub hosts: Vec<HostInventory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ProbeFailure>,
}

impl Inventory {
    pub fn from_scan_run(run: &ScanRun) -> Self {
        Self {
            hosts: run.hosts.iter().map(HostInventory::from_host).collect(),
            failures: Vec::new(),
        }
    }

    /// Assemble the outcomes of several nmap runs, in order
    ///
    /// Failed targets go to `failures`; they never turn into hosts with
    /// empty TLS data.
    pub fn from_outcomes(outcomes: Vec<TargetOutcome>) -> Self {
        let mut inventory = Inventory::default();

        for outcome in outcomes {
            match outcome.result {
                Ok(run) => inventory.merge(Inventory::from_scan_run(&run)),
                Err(e) => inventory.failures.push(ProbeFailure {
                    target: outcome.target,
                    error: e.to_string(),
                }),
            }
        }

        inventory
    }

    pub fn merge(&mut self, other: Inventory) {
        self.hosts.extend(other.hosts);
        self.failures.extend(other.failures);
    }

    pub fn port_count(&self) -> usize {
        self.hosts.iter().map(|h| h.ports.len()).sum()
    }

    /// Ports that carried ssl-enum-ciphers output
    pub fn tls_port_count(&self) -> usize {
        self.hosts
            .iter()
            .flat_map(|h| h.ports.iter())
            .filter(|p| p.has_script_output)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::nmap::{ScriptOutput, parse_normal_output};
    use std::time::Duration;

    fn port_with(scripts: Vec<(&str, &str)>) -> ScannedPort {
        ScannedPort {
            id: 443,
            protocol: "tcp".to_string(),
            state: "open".to_string(),
            service: "https".to_string(),
            scripts: scripts
                .into_iter()
                .map(|(id, output)| ScriptOutput {
                    id: id.to_string(),
                    output: output.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_port_without_scripts_is_empty() {
        let port = PortInventory::from_port(&port_with(vec![]));
        assert!(!port.has_script_output);
        assert_eq!(port.tls, TlsVersions::default());
        assert_eq!(port.service, "https");
    }

    #[test]
    fn test_other_scripts_do_not_overwrite() {
        let port = PortInventory::from_port(&port_with(vec![
            ("ssl-enum-ciphers", "  TLSv1.2:\n    ciphers:\n      X\n  least strength: A"),
            ("http-title", "Example Domain"),
        ]));
        assert!(port.has_script_output);
        assert_eq!(port.tls.tls12.ciphers, vec!["X"]);
        assert_eq!(port.tls.least_strength, "A");
    }

    #[test]
    fn test_repeated_script_outputs_combined() {
        let port = PortInventory::from_port(&port_with(vec![
            ("ssl-enum-ciphers", "TLSv1.2:\n  ciphers:\n    X\nleast strength: B"),
            ("ssl-enum-ciphers", "TLSv1.3:\n  ciphers:\n    Y\nleast strength: A"),
        ]));
        assert_eq!(port.tls.tls12.ciphers, vec!["X"]);
        assert_eq!(port.tls.tls13.ciphers, vec!["Y"]);
        assert_eq!(port.tls.least_strength, "A");
    }

    #[test]
    fn test_from_normal_output() {
        let run = parse_normal_output(
            "Nmap scan report for example.com (93.184.216.34)
PORT    STATE SERVICE
80/tcp  open  http
443/tcp open  https
| ssl-enum-ciphers:
|   TLSv1.3:
|     ciphers:
|       TLS_AKE_WITH_AES_256_GCM_SHA384 (ecdh_x25519) - A
|     cipher preference: server
|_  least strength: A
",
        );

        let inventory = Inventory::from_scan_run(&run);
        assert_eq!(inventory.port_count(), 2);
        assert_eq!(inventory.tls_port_count(), 1);

        let https = &inventory.hosts[0].ports[1];
        assert_eq!(
            https.tls.tls13.ciphers,
            vec!["TLS_AKE_WITH_AES_256_GCM_SHA384 (ecdh_x25519) - A"]
        );
        assert_eq!(https.tls.tls13.cipher_preference, "server");
        assert_eq!(https.tls.least_strength, "A");
    }

    #[test]
    fn test_failures_kept_apart() {
        let outcomes = vec![
            TargetOutcome {
                target: "ok.example".to_string(),
                result: Ok(parse_normal_output(
                    "Nmap scan report for 10.0.0.1\n443/tcp open https\n",
                )),
            },
            TargetOutcome {
                target: "slow.example".to_string(),
                result: Err(InventoryError::ProbeTimeout {
                    target: "slow.example".to_string(),
                    duration: Duration::from_secs(300),
                }),
            },
        ];

        let inventory = Inventory::from_outcomes(outcomes);
        assert_eq!(inventory.hosts.len(), 1);
        assert_eq!(inventory.failures.len(), 1);
        assert_eq!(inventory.failures[0].target, "slow.example");
        assert!(inventory.failures[0].error.contains("timed out"));
    }

    #[test]
    fn test_failures_omitted_when_empty() {
        let json = serde_json::to_value(Inventory::default()).unwrap();
        assert!(json.get("failures").is_none());
        assert!(json["hosts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_port_serialized_shape() {
        let port = PortInventory::from_port(&port_with(vec![]));
        let json = serde_json::to_value(&port).unwrap();
        assert_eq!(json["id"], 443);
        assert!(json["ssl-enum-ciphers"]["TLSv1.0"]["ciphers"].is_array());
        assert!(json.get("has_script_output").is_none());
    }
}
