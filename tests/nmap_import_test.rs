// Copyright (c) 2025 Marc Rivero López
// Licensed under GPLv3. See LICENSE file for details.

//! Saved nmap report import tests
//!
//! Reads a captured two-host `-oN` report and checks the assembled
//! inventory end to end, including its JSON form.

use tlsinventory::Inventory;
use tlsinventory::nmap::{ScanRun, parse_normal_output};
use tlsinventory::output::json::generate_json;

const TWO_HOSTS: &str = include_str!("fixtures/two_hosts.nmap");

#[test]
fn test_hosts_and_ports_read() {
    let run = parse_normal_output(TWO_HOSTS);

    assert_eq!(run.hosts.len(), 2);
    assert_eq!(run.hosts[0].ip, "93.184.216.34");
    assert_eq!(run.hosts[1].hostnames, vec!["legacy.example"]);
    assert_eq!(run.port_count(), 4);
    assert_eq!(run.hosts[1].ports[0].state, "closed");
}

#[test]
fn test_inventory_from_report() {
    let inventory = Inventory::from_scan_run(&parse_normal_output(TWO_HOSTS));

    assert_eq!(inventory.tls_port_count(), 2);

    let modern = &inventory.hosts[0].ports[1].tls;
    assert!(modern.tls10.is_empty());
    assert_eq!(modern.tls12.ciphers.len(), 3);
    assert_eq!(modern.tls12.cipher_preference, "client");
    assert!(modern.tls12.compressors.is_empty());
    assert_eq!(modern.tls13.ciphers.len(), 3);
    assert_eq!(modern.least_strength, "A");

    let legacy = &inventory.hosts[1].ports[1].tls;
    assert_eq!(
        legacy.tls10.ciphers[0],
        "TLS_RSA_WITH_3DES_EDE_CBC_SHA (rsa 2048) - C"
    );
    assert_eq!(legacy.tls10.warnings.len(), 1);
    assert_eq!(legacy.tls12.warnings.len(), 1);
    assert!(legacy.tls13.is_empty());
    assert_eq!(legacy.least_strength, "C");
}

#[test]
fn test_port_without_script_renders_empty_fields() {
    let inventory = Inventory::from_scan_run(&parse_normal_output(TWO_HOSTS));
    let http = &inventory.hosts[0].ports[0];

    assert_eq!(http.id, 80);
    assert!(!http.has_script_output);
    assert!(http.tls.offered_versions().is_empty());
    assert_eq!(http.tls.least_strength, "");
}

#[test]
fn test_json_shape() {
    let inventory = Inventory::from_scan_run(&parse_normal_output(TWO_HOSTS));
    let json: serde_json::Value =
        serde_json::from_str(&generate_json(&inventory, true).unwrap()).unwrap();

    let port = &json["hosts"][1]["ports"][1];
    assert_eq!(port["id"], 443);
    assert_eq!(port["protocol"], "tcp");
    assert_eq!(port["service"], "https");
    assert_eq!(port["ssl-enum-ciphers"]["least_strength"], "C");
    assert_eq!(
        port["ssl-enum-ciphers"]["TLSv1.0"]["cipher_preference"],
        "server"
    );
    assert!(json.get("failures").is_none());
}

#[test]
fn test_read_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.nmap");
    std::fs::write(&path, TWO_HOSTS).unwrap();

    let run = ScanRun::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(run, parse_normal_output(TWO_HOSTS));
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(ScanRun::from_file("/nonexistent/scan.nmap").is_err());
}
