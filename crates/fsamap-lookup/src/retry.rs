//! Fixed-delay retry for postal-code lookups.
//!
//! The delay is a rate limiter as much as a back-off: it is slept before
//! every attempt, first tries included, so one run never issues more than one
//! request per delay however many retries it takes.

use std::future::Future;
use std::time::Duration;

use fsamap_core::AppConfig;

use crate::error::LookupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.lookup_max_retries,
            Duration::from_millis(config.lookup_delay_ms),
        )
    }

    /// Runs `operation` once, plus up to `max_retries` more times while it
    /// fails with a transient error.
    ///
    /// # Errors
    ///
    /// Returns the first permanent error, or the last transient one once the
    /// retries are used up.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, LookupError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LookupError>>,
    {
        let mut attempt = 0u32;
        loop {
            tokio::time::sleep(self.delay).await;
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if !err.is_transient() || attempt >= self.max_retries {
                        return Err(err);
                    }
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "lookup failed, retrying"
                    );
                }
            }
        }
    }
}
