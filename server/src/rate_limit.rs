//! In-memory rate limiting for magic-link sign-in requests.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Two limits share one window:
//! - Per-email: caps how many links one address can be sent.
//! - Global: caps total outgoing sign-in mail.
//!
//! TRADE-OFFS
//! ==========
//! State is per-process and lost on restart. Every accepted request sweeps
//! expired per-email queues, so memory tracks active senders only.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::SignInLimits;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-email rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerEmailExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    limits: SignInLimits,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-email request timestamps.
    email_requests: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn with_limits(limits: SignInLimits) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), limits }
    }

    /// Check both per-email and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns which limit was hit. Rejected requests are not recorded.
    pub fn check_and_record(&self, email: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(email, Instant::now())
    }

    /// Check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, email: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let inner = &mut *guard;
        let limits = self.limits;
        let window = Duration::from_secs(limits.window_secs);

        prune_window(&mut inner.global_requests, now, window);
        if inner.global_requests.len() >= limits.global {
            return Err(RateLimitError::GlobalExceeded { limit: limits.global, window_secs: limits.window_secs });
        }

        let email_deque = inner.email_requests.entry(email.to_owned()).or_default();
        prune_window(email_deque, now, window);
        if email_deque.len() >= limits.per_email {
            return Err(RateLimitError::PerEmailExceeded {
                limit: limits.per_email,
                window_secs: limits.window_secs,
            });
        }

        email_deque.push_back(now);
        inner.global_requests.push_back(now);
        inner.email_requests.retain(|_, deque| {
            prune_window(deque, now, window);
            !deque.is_empty()
        });

        Ok(())
    }

    #[cfg(test)]
    fn tracked_emails(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .email_requests
            .len()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::with_limits(SignInLimits::default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
