//! Timeout middleware - time-limited execution wrapper.
//!
//! **Note**: This module requires the `tokio` runtime (`timeout` feature).

use std::time::Duration;
use thiserror::Error;
use waypost_core::{BoxError, Middleware, MiddlewareContext, Outcome};

/// Error returned when a wrapped middleware does not finish in time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("middleware timed out after {duration:?}")]
pub struct TimeoutError {
    duration: Duration,
}

impl TimeoutError {
    /// Create a new timeout error.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Get the duration that was exceeded.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// A middleware that bounds another middleware with a timeout.
///
/// The bound covers the inner middleware and everything it awaits, including
/// the rest of the chain when it calls `next`.
///
/// # Example
///
/// ```rust,ignore
/// use waypost_std::middleware::TimeoutMiddleware;
///
/// // Give the permission check two seconds
/// let timed = TimeoutMiddleware::secs(PermissionCheck, 2);
/// ```
pub struct TimeoutMiddleware<M> {
    inner: M,
    duration: Duration,
}

impl<M> TimeoutMiddleware<M> {
    /// Create a new `TimeoutMiddleware` wrapping the given middleware.
    pub fn new(inner: M, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// Create a `TimeoutMiddleware` with the timeout specified in seconds.
    pub fn secs(inner: M, seconds: u64) -> Self {
        Self::new(inner, Duration::from_secs(seconds))
    }

    /// Create a `TimeoutMiddleware` with the timeout specified in milliseconds.
    pub fn millis(inner: M, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Get the configured timeout duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Get a reference to the inner middleware.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: Middleware> Middleware for TimeoutMiddleware<M> {
    async fn handle(&self, context: MiddlewareContext) -> Result<Outcome, BoxError> {
        match tokio::time::timeout(self.duration, self.inner.handle(context)).await {
            Ok(result) => result,
            Err(_) => Err(Box::new(TimeoutError::new(self.duration))),
        }
    }
}
