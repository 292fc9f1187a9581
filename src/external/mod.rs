// External tool integrations
// nmap

pub mod nmap_client;

pub use nmap_client::{NmapClient, NmapScanOptions, TargetOutcome};
