// Nmap integration
// Runs nmap with the ssl-enum-ciphers script and reads its normal output

use crate::config::ProbeConfig;
use crate::error::InventoryError;
use crate::nmap::{ScanRun, parse_normal_output};
use crate::security::{validate_extra_arg, validate_port_spec, validate_target};
use crate::tls_enum::SCRIPT_ID;
use crate::utils::retry::{RetryConfig, retry_with_backoff};
use futures::stream::{self, StreamExt};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Options for one nmap invocation
#[derive(Debug, Clone)]
pub struct NmapScanOptions {
    pub target: String,
    pub ports: String,
    pub timeout: Duration,
    pub extra_args: Vec<String>,
}

impl NmapScanOptions {
    pub fn from_config(target: &str, config: &ProbeConfig) -> Self {
        Self {
            target: target.to_string(),
            ports: config.ports.clone(),
            timeout: config.timeout(),
            extra_args: config.extra_args.clone(),
        }
    }
}

/// Result of scanning one target, kept separate from other targets so a
/// failure never hides the hosts that did succeed
#[derive(Debug)]
pub struct TargetOutcome {
    pub target: String,
    pub result: Result<ScanRun, InventoryError>,
}

/// nmap wrapper
#[derive(Debug, Clone)]
pub struct NmapClient {
    nmap_path: String,
}

impl Default for NmapClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NmapClient {
    pub fn new() -> Self {
        Self {
            nmap_path: "nmap".to_string(),
        }
    }

    pub fn with_path(path: String) -> Self {
        Self { nmap_path: path }
    }

    /// Build the argument list for one invocation
    ///
    /// Every user-supplied value is validated first; nothing goes through a
    /// shell but a target starting with `-` would still be read as an option.
    pub fn build_args(&self, options: &NmapScanOptions) -> Result<Vec<String>, InventoryError> {
        validate_target(&options.target)?;
        validate_port_spec(&options.ports)?;
        for arg in &options.extra_args {
            validate_extra_arg(arg)?;
        }

        let mut args = vec![
            "-Pn".to_string(),
            "-p".to_string(),
            options.ports.replace(' ', ""),
            "--script".to_string(),
            SCRIPT_ID.to_string(),
            "-oN".to_string(),
            "-".to_string(),
        ];
        args.extend(options.extra_args.iter().cloned());
        args.push(options.target.clone());

        Ok(args)
    }

    /// Run nmap and return its normal output
    pub async fn run_raw(&self, options: &NmapScanOptions) -> Result<String, InventoryError> {
        let args = self.build_args(options)?;
        tracing::debug!("Running {} {}", self.nmap_path, args.join(" "));

        let mut cmd = Command::new(&self.nmap_path);
        cmd.args(&args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        let child = cmd.spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                InventoryError::ProbeNotFound {
                    path: self.nmap_path.clone(),
                    source,
                }
            } else {
                InventoryError::IoError { source }
            }
        })?;

        let output = match tokio::time::timeout(options.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                return Err(InventoryError::ProbeTimeout {
                    target: options.target.clone(),
                    duration: options.timeout,
                });
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|l| l.starts_with("Warning:")) {
            tracing::warn!("nmap ({}): {}", options.target, line);
        }

        if !output.status.success() {
            return Err(InventoryError::ProbeFailed {
                target: options.target.clone(),
                status: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Run nmap against one target and parse the report
    pub async fn scan(&self, options: &NmapScanOptions) -> Result<ScanRun, InventoryError> {
        let stdout = self.run_raw(options).await?;
        let run = parse_normal_output(&stdout);
        tracing::info!(
            "{}: {} host(s), {} port(s)",
            options.target,
            run.hosts.len(),
            run.port_count()
        );
        Ok(run)
    }

    /// Scan every target with at most `config.max_concurrent` nmap processes
    ///
    /// Outcomes are returned in target order.
    pub async fn scan_all(&self, targets: &[String], config: &ProbeConfig) -> Vec<TargetOutcome> {
        let retry = if config.retries == 0 {
            RetryConfig::no_retry()
        } else {
            RetryConfig {
                max_retries: config.retries,
                ..Default::default()
            }
        };

        stream::iter(targets.iter().cloned())
            .map(|target| {
                let options = NmapScanOptions::from_config(&target, config);
                let retry = retry.clone();
                async move {
                    let result = retry_with_backoff(&retry, || self.scan(&options)).await;
                    if let Err(ref e) = result {
                        tracing::warn!("Scan of {} failed: {}", target, e);
                    }
                    TargetOutcome { target, result }
                }
            })
            .buffered(config.max_concurrent.max(1))
            .collect::<Vec<_>>()
            .await
    }

    /// Get nmap version line
    pub async fn get_version(&self) -> Result<String, InventoryError> {
        let output = Command::new(&self.nmap_path)
            .arg("--version")
            .output()
            .await
            .map_err(|source| InventoryError::ProbeNotFound {
                path: self.nmap_path.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match stdout.lines().find(|l| l.starts_with("Nmap version")) {
            Some(line) if output.status.success() => Ok(line.trim().to_string()),
            _ => Err(InventoryError::Other(
                "Failed to get nmap version".to_string(),
            )),
        }
    }
}
