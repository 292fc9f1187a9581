/*
 * Copyright (C) 2026 Marc Rivero López
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */

//! Input Validation Module
//!
//! Checks every value that ends up on the nmap command line. Arguments are
//! passed to the process directly (no shell), but targets and port specs
//! still have to look like what nmap expects so a hostile target list
//! cannot smuggle extra options in.
//!
//! # Security Standards
//! - CWE-78: OS Command Injection
//! - CWE-88: Argument Injection

use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// Maximum length for hostname (RFC 1035)
const MAX_HOSTNAME_LENGTH: usize = 253;

/// Maximum length for label in hostname (RFC 1035)
const MAX_LABEL_LENGTH: usize = 63;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidHostname(String),
    InvalidPort(String),
    InvalidArgument(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHostname(msg) => write!(f, "Invalid hostname: {}", msg),
            Self::InvalidPort(msg) => write!(f, "Invalid port: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate hostname according to RFC 1035 and RFC 1123
///
/// # Security Requirements
/// - Prevents command injection via shell metacharacters
/// - Rejects values that nmap would read as an option (leading `-`)
/// - Validates length constraints per RFC 1035
///
/// # Arguments
/// * `hostname` - The hostname to validate
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ValidationError)` if invalid
pub fn validate_hostname(hostname: &str) -> std::result::Result<(), ValidationError> {
    if hostname.is_empty() {
        return Err(ValidationError::InvalidHostname(
            "Hostname cannot be empty".to_string(),
        ));
    }

    if hostname.len() > MAX_HOSTNAME_LENGTH {
        return Err(ValidationError::InvalidHostname(format!(
            "Hostname too long (max {} characters)",
            MAX_HOSTNAME_LENGTH
        )));
    }

    if hostname.starts_with('-') {
        return Err(ValidationError::InvalidHostname(
            "Hostname cannot start with '-'".to_string(),
        ));
    }

    let dangerous_chars = [
        '|', '&', ';', '$', '`', '\n', '\r', '<', '>', '(', ')', '{', '}', '\\', '\'', '"', ' ',
    ];
    for ch in dangerous_chars.iter() {
        if hostname.contains(*ch) {
            return Err(ValidationError::InvalidHostname(format!(
                "Hostname contains forbidden character: '{}'",
                ch
            )));
        }
    }

    if hostname.parse::<IpAddr>().is_ok() {
        return Ok(());
    }

    // Fully qualified names may end with the root label
    let name = hostname.strip_suffix('.').unwrap_or(hostname);
    for label in name.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            return Err(ValidationError::InvalidHostname(format!(
                "Label '{}' has invalid length (must be 1-{} characters)",
                label, MAX_LABEL_LENGTH
            )));
        }

        for (i, ch) in label.chars().enumerate() {
            let is_first = i == 0;
            let is_last = i == label.len() - 1;

            let is_valid = ch.is_ascii_alphanumeric() || (ch == '-' && !is_first && !is_last);
            if !is_valid {
                return Err(ValidationError::InvalidHostname(format!(
                    "Label '{}' contains invalid character or invalid position for hyphen",
                    label
                )));
            }
        }
    }

    Ok(())
}

/// Validate an nmap target: a hostname, an IP address, or an IP in CIDR
/// notation (`10.0.0.0/24`)
pub fn validate_target(target: &str) -> std::result::Result<(), ValidationError> {
    if target.contains('/') {
        return target
            .parse::<IpNetwork>()
            .map(|_| ())
            .map_err(|e| {
                ValidationError::InvalidHostname(format!(
                    "Invalid CIDR format '{}': {}",
                    target, e
                ))
            });
    }
    validate_hostname(target)
}

/// Validate port number
///
/// # Security Requirements
/// - Ensures port is within valid range (1-65535)
pub fn validate_port(port: u16) -> std::result::Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::InvalidPort(
            "Port must be between 1 and 65535".to_string(),
        ));
    }
    Ok(())
}

/// Validate an nmap port specification such as `443`, `443,8443`,
/// `1-1024,8443`, `-` (all ports), open ranges like `1024-`, or protocol
/// qualified entries like `T:443,U:53`
pub fn validate_port_spec(spec: &str) -> std::result::Result<(), ValidationError> {
    if spec.trim().is_empty() {
        return Err(ValidationError::InvalidPort(
            "Port specification cannot be empty".to_string(),
        ));
    }

    for entry in spec.split(',') {
        let entry = entry.trim();
        let range = match entry.split_once(':') {
            Some(("T" | "U" | "S", rest)) => rest,
            Some(_) => {
                return Err(ValidationError::InvalidPort(format!(
                    "Unknown protocol qualifier in '{}' (expected T:, U: or S:)",
                    entry
                )));
            }
            None => entry,
        };

        let (start, end) = match range.split_once('-') {
            Some((start, end)) => (
                if start.is_empty() { 1 } else { parse_port(start)? },
                if end.is_empty() { u16::MAX } else { parse_port(end)? },
            ),
            None => {
                let port = parse_port(range)?;
                (port, port)
            }
        };

        if start > end {
            return Err(ValidationError::InvalidPort(format!(
                "Range '{}' is reversed",
                entry
            )));
        }
    }

    Ok(())
}

fn parse_port(value: &str) -> std::result::Result<u16, ValidationError> {
    let port = value.trim().parse::<u16>().map_err(|_| {
        ValidationError::InvalidPort(format!("'{}' is not a port number", value))
    })?;
    validate_port(port)?;
    Ok(port)
}

/// Validate an extra argument passed through to nmap from configuration
///
/// Options that change where or how output is written are rejected since
/// the runner relies on normal output arriving on stdout.
pub fn validate_extra_arg(arg: &str) -> std::result::Result<(), ValidationError> {
    const RESERVED_PREFIXES: &[&str] = &["-oN", "-oX", "-oG", "-oA", "-oS", "-iL"];

    if arg.is_empty() {
        return Err(ValidationError::InvalidArgument(
            "Argument cannot be empty".to_string(),
        ));
    }

    // `--script-args`, `--script-timeout` etc. stay allowed
    let replaces_script = arg == "--script" || arg.starts_with("--script=");
    if replaces_script || RESERVED_PREFIXES.iter().any(|reserved| arg.starts_with(reserved)) {
        return Err(ValidationError::InvalidArgument(format!(
            "'{}' conflicts with options managed by the runner",
            arg
        )));
    }

    if arg
        .chars()
        .any(|ch| matches!(ch, '|' | '&' | ';' | '$' | '`' | '\n' | '\r' | '<' | '>'))
    {
        return Err(ValidationError::InvalidArgument(format!(
            "'{}' contains a shell metacharacter",
            arg
        )));
    }

    Ok(())
}
