// Retry utilities - Exponential backoff around nmap invocations
//
// Only transient probe failures (timeouts, non-zero exits) are retried.
// A missing binary or a rejected target fails immediately.

use crate::error::InventoryError;
use std::future::Future;
use std::time::Duration;

/// Configuration for retry behavior with exponential backoff.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tlsinventory::utils::retry::RetryConfig;
///
/// let config = RetryConfig {
///     max_retries: 2,
///     initial_backoff: Duration::from_secs(1),
///     max_backoff: Duration::from_secs(10),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts before giving up.
    pub max_retries: usize,

    /// Backoff before the first retry, doubled on each subsequent one.
    pub initial_backoff: Duration,

    /// Upper bound for the backoff.
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 1,
            initial_backoff: Duration::from_secs(2),
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    pub fn new(max_retries: usize, initial_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_retries,
            initial_backoff,
            max_backoff,
        }
    }

    /// Fail immediately on error.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::from_millis(0),
            max_backoff: Duration::from_millis(0),
        }
    }
}

/// Retry an async operation with exponential backoff.
///
/// Returns the first success, the first non-transient error, or the last
/// error once `max_retries` is exhausted.
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    operation: F,
) -> Result<T, InventoryError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, InventoryError>>,
{
    let mut retries = 0;
    let mut backoff = config.initial_backoff;

    loop {
        match operation().await {
            Ok(result) => {
                if retries > 0 {
                    tracing::debug!("Operation succeeded after {} retry(ies)", retries);
                }
                return Ok(result);
            }
            Err(e) => {
                if !e.is_transient() {
                    tracing::debug!("Non-retriable error encountered: {}", e);
                    return Err(e);
                }

                if retries >= config.max_retries {
                    tracing::debug!(
                        "Max retries ({}) exhausted, giving up: {}",
                        config.max_retries,
                        e
                    );
                    return Err(e);
                }

                retries += 1;
                tracing::warn!(
                    "Attempt {}/{} failed: {}, retrying in {:?}",
                    retries,
                    config.max_retries,
                    e,
                    backoff
                );

                tokio::time::sleep(backoff).await;
                backoff = std::cmp::min(backoff * 2, config.max_backoff);
            }
        }
    }
}
