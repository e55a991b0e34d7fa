//! Optional retry wrapper around a transport.
//!
//! The ISS client performs no retries on its own; wrap an [`IssClient`]
//! in [`Retrying`] to opt in.

use std::time::Duration;

use serde_json::Value;

use moexiss_types::TransportError;

use crate::client::IssTransport;

/// Bounded retry with exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 30_000,
        }
    }
}

impl RetryPolicy {
    /// Calculates the backoff delay with exponential backoff and jitter.
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self.base_delay_ms.saturating_mul(1u64 << attempt.min(10));
        let capped_delay = exp_delay.min(self.max_delay_ms);

        // Deterministic jitter (±25%) keyed on the attempt number, so no
        // random number generator is needed.
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let jitter_offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            jitter_offset.saturating_sub(jitter_range)
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter as i64).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Returns true for failures worth retrying: network-level errors and
    /// server-side statuses (5xx, 429). Client errors and malformed
    /// bodies are not retried.
    #[must_use]
    pub const fn is_retryable(error: &TransportError) -> bool {
        match error {
            TransportError::Network(_) => true,
            TransportError::HttpStatus { status } => *status >= 500 || *status == 429,
            TransportError::MalformedResponse(_) => false,
        }
    }
}

/// Transport decorator that retries failed requests per a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct Retrying<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: IssTransport> Retrying<T> {
    /// Wraps a transport with the given retry policy.
    #[must_use]
    pub const fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// Returns the wrapped transport.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: IssTransport> IssTransport for Retrying<T> {
    fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let mut attempts = 0;
        loop {
            match self.inner.get_json(url) {
                Ok(doc) => return Ok(doc),
                Err(error) if RetryPolicy::is_retryable(&error) && attempts < self.policy.max_retries => {
                    attempts += 1;
                    let delay = self.policy.backoff_delay(attempts);
                    tracing::debug!(%error, attempt = attempts, ?delay, "retrying request");
                    std::thread::sleep(delay);
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn base_url(&self) -> &str {
        self.inner.base_url()
    }
}
