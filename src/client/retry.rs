use crate::client::error::ApiError;
use std::future::Future;
use std::time::Duration;

/// Default number of re-attempts after the first failure
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Default fixed delay between attempts
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

/// Bounded retry for transient backend failures
///
/// Re-attempts only failures where no HTTP status was received or the status
/// is >= 500; `AUTH`, `NOT_FOUND` and other 4xx responses fail immediately.
/// Attempts are strictly sequential with a fixed delay between them.
///
/// Retrying a non-idempotent write can duplicate its effect if the server
/// does not deduplicate. That is an accepted property of this policy and
/// callers issuing such writes should account for it.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    pub fn from_settings(settings: &crate::config::RetrySettings) -> Self {
        Self {
            max_retries: settings.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            backoff: settings
                .backoff_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_BACKOFF),
        }
    }

    /// Run an operation with up to `max_retries` additional attempts
    ///
    /// The factory is invoked once per attempt. Once the budget is exhausted
    /// the final classified error is returned unchanged.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempt: u32 = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) if attempt < self.max_retries && error.is_retryable() => {
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        code = %error.code,
                        "transient backend failure, retrying"
                    );
                    tokio::time::sleep(self.backoff).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BACKOFF)
    }
}
