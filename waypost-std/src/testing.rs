//! Testing utilities for Waypost.
//!
//! This module provides utilities to make testing middleware and route
//! declarations easier.
//!
//! # Features
//!
//! - [`RecordingMiddleware`]: A middleware that records every navigation it sees
//! - [`MemoryHost`]: An in-memory navigation host that runs installed guards
//! - [`navigation_to`]: Shorthand for building a [`Navigation`]

use std::sync::{Arc, Mutex};
use waypost_core::{
    BoxError, Middleware, MiddlewareContext, Navigation, NavigationGuard, NavigationHost,
    Outcome, RouteLocation,
};

// ============================================================================
// Recording Middleware
// ============================================================================

/// A middleware that records the target path of each navigation it sees.
///
/// By default it defers to the rest of the chain. Built with
/// [`with_outcome`](Self::with_outcome) it short-circuits instead.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingMiddleware::new();
/// let route_middleware = MiddlewareRef::handler(recorder.clone());
///
/// // Navigate...
///
/// assert_eq!(recorder.paths(), vec!["/dashboard"]);
/// ```
pub struct RecordingMiddleware {
    paths: Arc<Mutex<Vec<String>>>,
    outcome: Option<Outcome>,
}

impl RecordingMiddleware {
    /// Create a recording middleware that calls `next`.
    pub fn new() -> Self {
        Self {
            paths: Arc::new(Mutex::new(Vec::new())),
            outcome: None,
        }
    }

    /// Create a recording middleware that returns `outcome` without calling `next`.
    pub fn with_outcome(outcome: Outcome) -> Self {
        Self {
            paths: Arc::new(Mutex::new(Vec::new())),
            outcome: Some(outcome),
        }
    }

    /// Get a clone of the recorded paths.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    /// Get the number of recorded navigations.
    pub fn count(&self) -> usize {
        self.paths.lock().unwrap().len()
    }

    /// Clear all recorded navigations.
    pub fn clear(&self) {
        self.paths.lock().unwrap().clear();
    }
}

impl Default for RecordingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingMiddleware {
    fn clone(&self) -> Self {
        Self {
            paths: self.paths.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

impl Middleware for RecordingMiddleware {
    async fn handle(&self, context: MiddlewareContext) -> Result<Outcome, BoxError> {
        self.paths.lock().unwrap().push(context.to.path.clone());
        match &self.outcome {
            Some(outcome) => Ok(outcome.clone()),
            None => context.next.run().await,
        }
    }
}

// ============================================================================
// Memory Host
// ============================================================================

/// An in-memory navigation host.
///
/// Stores installed guards and runs them in installation order on
/// [`navigate`](Self::navigate). It performs no route matching: callers hand
/// it fully resolved locations.
pub struct MemoryHost {
    guards: Mutex<Vec<Arc<dyn NavigationGuard>>>,
    committed: Mutex<Vec<String>>,
}

impl MemoryHost {
    /// Create a host with no guards installed.
    pub fn new() -> Self {
        Self {
            guards: Mutex::new(Vec::new()),
            committed: Mutex::new(Vec::new()),
        }
    }

    /// Number of installed guards.
    pub fn guard_count(&self) -> usize {
        self.guards.lock().unwrap().len()
    }

    /// Paths of the navigations that were allowed to complete.
    pub fn committed(&self) -> Vec<String> {
        self.committed.lock().unwrap().clone()
    }

    /// Run every guard for a navigation from `from` to `to`.
    ///
    /// Returns the first outcome other than [`Outcome::Pass`], or `Pass` when
    /// every guard passed. `Block` and `Redirect` stop the remaining guards.
    pub async fn navigate(
        self: &Arc<Self>,
        to: RouteLocation,
        from: RouteLocation,
    ) -> Result<Outcome, BoxError> {
        let guards = self.guards.lock().unwrap().clone();
        let router: Arc<dyn NavigationHost> = self.clone();
        let navigation = Navigation::new(to, from, router);

        let mut decided = Outcome::Pass;
        for guard in guards {
            let outcome = guard.before_navigate(navigation.clone()).await?;
            if !outcome.is_proceeding() {
                return Ok(outcome);
            }
            if decided == Outcome::Pass {
                decided = outcome;
            }
        }

        self.committed
            .lock()
            .unwrap()
            .push(navigation.to.path.clone());
        Ok(decided)
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHost for MemoryHost {
    fn before_each(&self, guard: Arc<dyn NavigationGuard>) {
        self.guards.lock().unwrap().push(guard);
    }
}

/// A navigation from `/` to `path` on `router`.
pub fn navigation_to(path: &str, router: Arc<dyn NavigationHost>) -> Navigation {
    Navigation::new(RouteLocation::new(path), RouteLocation::new("/"), router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypost_core::{MiddlewareRef, Next, async_trait};

    struct Fixed(Outcome);

    #[async_trait]
    impl NavigationGuard for Fixed {
        async fn before_navigate(&self, _navigation: Navigation) -> Result<Outcome, BoxError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_recording_middleware_records_and_defers() {
        let recorder = RecordingMiddleware::new();
        let navigation = navigation_to("/a", Arc::new(MemoryHost::new()));
        let next = Next::new(
            Arc::from(vec![MiddlewareRef::handler(recorder.clone())]),
            0,
            navigation,
        );

        assert_eq!(next.run().await.unwrap(), Outcome::Proceed);
        assert_eq!(recorder.paths(), vec!["/a".to_string()]);
    }

    #[tokio::test]
    async fn test_host_stops_at_first_blocking_guard() {
        let host = Arc::new(MemoryHost::new());
        host.before_each(Arc::new(Fixed(Outcome::Pass)));
        host.before_each(Arc::new(Fixed(Outcome::Block)));
        host.before_each(Arc::new(Fixed(Outcome::Proceed)));
        assert_eq!(host.guard_count(), 3);

        let outcome = host
            .navigate(RouteLocation::new("/x"), RouteLocation::new("/"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Block);
        assert!(host.committed().is_empty());
    }

    #[tokio::test]
    async fn test_host_without_guards_passes() {
        let host = Arc::new(MemoryHost::new());
        let outcome = host
            .navigate(RouteLocation::new("/x"), RouteLocation::new("/"))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Pass);
        assert_eq!(host.committed(), vec!["/x".to_string()]);
    }
}
