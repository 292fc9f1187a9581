// TLS enumeration module - ssl-enum-ciphers report model and parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod parser;
pub mod splitter;

pub use parser::parse;
pub use splitter::{ScriptReport, split_report};

/// Id of the nmap script whose output this module understands
pub const SCRIPT_ID: &str = "ssl-enum-ciphers";

/// Protocol versions surfaced in the fixed output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlsVersion {
    Tls10,
    Tls11,
    Tls12,
    Tls13,
}

impl TlsVersion {
    pub const ALL: [TlsVersion; 4] = [
        TlsVersion::Tls10,
        TlsVersion::Tls11,
        TlsVersion::Tls12,
        TlsVersion::Tls13,
    ];

    /// Label as printed by the script
    pub fn label(&self) -> &'static str {
        match self {
            TlsVersion::Tls10 => "TLSv1.0",
            TlsVersion::Tls11 => "TLSv1.1",
            TlsVersion::Tls12 => "TLSv1.2",
            TlsVersion::Tls13 => "TLSv1.3",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the script reported for one protocol version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub ciphers: Vec<String>,
    pub compressors: Vec<String>,
    pub cipher_preference: String,
    pub warnings: Vec<String>,
}

impl SectionRecord {
    pub fn is_empty(&self) -> bool {
        self.ciphers.is_empty()
            && self.compressors.is_empty()
            && self.cipher_preference.is_empty()
            && self.warnings.is_empty()
    }
}

/// Result of parsing one port's script output
///
/// Sections are keyed by the literal version label found in the text, so
/// labels outside [`TlsVersion::ALL`] are kept as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub sections: HashMap<String, SectionRecord>,
    pub least_strength: String,
}

impl ParseResult {
    pub fn section(&self, version: TlsVersion) -> Option<&SectionRecord> {
        self.sections.get(version.label())
    }

    /// Labels that do not map to a known [`TlsVersion`]
    pub fn unknown_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .sections
            .keys()
            .map(String::as_str)
            .filter(|label| TlsVersion::from_label(label).is_none())
            .collect();
        labels.sort_unstable();
        labels
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.least_strength.is_empty()
    }
}

/// Fixed per-port shape: the four known versions plus the overall grade
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsVersions {
    #[serde(rename = "TLSv1.0")]
    pub tls10: SectionRecord,
    #[serde(rename = "TLSv1.1")]
    pub tls11: SectionRecord,
    #[serde(rename = "TLSv1.2")]
    pub tls12: SectionRecord,
    #[serde(rename = "TLSv1.3")]
    pub tls13: SectionRecord,
    pub least_strength: String,
}

impl TlsVersions {
    pub fn get(&self, version: TlsVersion) -> &SectionRecord {
        match version {
            TlsVersion::Tls10 => &self.tls10,
            TlsVersion::Tls11 => &self.tls11,
            TlsVersion::Tls12 => &self.tls12,
            TlsVersion::Tls13 => &self.tls13,
        }
    }

    fn get_mut(&mut self, version: TlsVersion) -> &mut SectionRecord {
        match version {
            TlsVersion::Tls10 => &mut self.tls10,
            TlsVersion::Tls11 => &mut self.tls11,
            TlsVersion::Tls12 => &mut self.tls12,
            TlsVersion::Tls13 => &mut self.tls13,
        }
    }

    /// Versions that carry at least one cipher
    pub fn offered_versions(&self) -> Vec<TlsVersion> {
        TlsVersion::ALL
            .into_iter()
            .filter(|v| !self.get(*v).ciphers.is_empty())
            .collect()
    }
}

impl From<&ParseResult> for TlsVersions {
    fn from(result: &ParseResult) -> Self {
        let mut versions = TlsVersions {
            least_strength: result.least_strength.clone(),
            ..Default::default()
        };

        for version in TlsVersion::ALL {
            if let Some(section) = result.section(version) {
                *versions.get_mut(version) = section.clone();
            }
        }

        versions
    }
}

impl From<ParseResult> for TlsVersions {
    fn from(result: ParseResult) -> Self {
        TlsVersions::from(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_labels() {
        assert_eq!(TlsVersion::from_label("TLSv1.2"), Some(TlsVersion::Tls12));
        assert_eq!(TlsVersion::from_label("TLSv1.4"), None);
        assert_eq!(TlsVersion::Tls13.to_string(), "TLSv1.3");
    }

    #[test]
    fn test_projection_defaults_absent_versions() {
        let mut result = ParseResult {
            least_strength: "A".to_string(),
            ..Default::default()
        };
        result.sections.insert(
            "TLSv1.2".to_string(),
            SectionRecord {
                ciphers: vec!["TLS_AES_128_GCM_SHA256".to_string()],
                ..Default::default()
            },
        );
        result
            .sections
            .insert("TLSv1.4".to_string(), SectionRecord::default());

        let versions = TlsVersions::from(&result);
        assert_eq!(versions.tls12.ciphers, vec!["TLS_AES_128_GCM_SHA256"]);
        assert!(versions.tls10.is_empty());
        assert!(versions.tls13.is_empty());
        assert_eq!(versions.least_strength, "A");
        assert_eq!(versions.offered_versions(), vec![TlsVersion::Tls12]);
        assert_eq!(result.unknown_labels(), vec!["TLSv1.4"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(TlsVersions::default()).unwrap();
        for key in ["TLSv1.0", "TLSv1.1", "TLSv1.2", "TLSv1.3", "least_strength"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert!(json["TLSv1.2"].get("cipher_preference").is_some());
    }
}
