//! Host navigation engine integration.
//!
//! Waypost does not perform navigations. A host engine does, and exposes a
//! single registration point for a pre-navigation guard. The host calls every
//! installed guard in order before committing a navigation and acts on the
//! returned [`Outcome`]:
//!
//! | Outcome | Host behavior |
//! |---------|---------------|
//! | `Pass` | proceed, as if nothing intercepted |
//! | `Proceed` | proceed |
//! | `Block` | cancel the navigation |
//! | `Redirect(location)` | start a new navigation to `location` |
//!
//! An `Err` aborts the navigation through the host's error channel.

use crate::{error::BoxError, location::RouteLocation, outcome::Outcome};
use async_trait::async_trait;
use std::{fmt, sync::Arc};

/// A navigation engine that accepts pre-navigation guards.
pub trait NavigationHost: Send + Sync + 'static {
    /// Install `guard` to run before every navigation.
    fn before_each(&self, guard: Arc<dyn NavigationGuard>);
}

/// A guard the host runs before committing a navigation.
#[async_trait]
pub trait NavigationGuard: Send + Sync {
    /// Decide what happens to `navigation`.
    async fn before_navigate(&self, navigation: Navigation) -> Result<Outcome, BoxError>;
}

/// One navigation event as seen by guards.
///
/// Each event owns immutable snapshots of both locations; nothing is shared
/// between events apart from the host handle.
#[derive(Clone)]
pub struct Navigation {
    /// Where the navigation is going.
    pub to: Arc<RouteLocation>,
    /// Where the navigation comes from.
    pub from: Arc<RouteLocation>,
    /// The host running the navigation.
    pub router: Arc<dyn NavigationHost>,
}

impl Navigation {
    /// Describe a navigation from `from` to `to` on `router`.
    pub fn new(to: RouteLocation, from: RouteLocation, router: Arc<dyn NavigationHost>) -> Self {
        Self {
            to: Arc::new(to),
            from: Arc::new(from),
            router,
        }
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("to", &self.to.path)
            .field("from", &self.from.path)
            .finish_non_exhaustive()
    }
}
