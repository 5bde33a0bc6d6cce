//! Middleware context and the `Next` continuation.
//!
//! A chain is never materialized up front. [`Next`] is a cursor into the
//! route's middleware list: running it builds the context for the entry it
//! points at, with a fresh cursor one step further along, and invokes that
//! entry. Running a cursor past the end resolves to [`Outcome::Proceed`].

use crate::{
    error::BoxError,
    host::{Navigation, NavigationHost},
    location::RouteLocation,
    middleware::MiddlewareRef,
    outcome::Outcome,
};
use futures::future::BoxFuture;
use std::{fmt, sync::Arc};

/// Everything a middleware sees about the navigation it guards.
#[derive(Clone)]
pub struct MiddlewareContext {
    /// Where the navigation is going.
    pub to: Arc<RouteLocation>,
    /// Where the navigation comes from.
    pub from: Arc<RouteLocation>,
    /// The host running the navigation.
    pub router: Arc<dyn NavigationHost>,
    /// Continuation into the rest of the chain.
    pub next: Next,
}

impl MiddlewareContext {
    /// Build the context for a middleware whose continuation is `next`.
    pub fn new(navigation: &Navigation, next: Next) -> Self {
        Self {
            to: Arc::clone(&navigation.to),
            from: Arc::clone(&navigation.from),
            router: Arc::clone(&navigation.router),
            next,
        }
    }
}

impl fmt::Debug for MiddlewareContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareContext")
            .field("to", &self.to.path)
            .field("from", &self.from.path)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// The "continue" capability handed to each middleware.
///
/// Cloning a `Next` is cheap; running it twice runs the remainder of the
/// chain twice.
#[derive(Clone)]
pub struct Next {
    chain: Arc<[MiddlewareRef]>,
    index: usize,
    navigation: Navigation,
}

impl Next {
    /// A continuation starting at `index` of `chain`.
    pub fn new(chain: Arc<[MiddlewareRef]>, index: usize, navigation: Navigation) -> Self {
        Self {
            chain,
            index,
            navigation,
        }
    }

    /// Index of the middleware this continuation will invoke.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether running this continuation reaches the end of the chain.
    pub fn is_end(&self) -> bool {
        self.index >= self.chain.len()
    }

    /// Number of middleware left to run, including the one at `index`.
    pub fn remaining(&self) -> usize {
        self.chain.len().saturating_sub(self.index)
    }

    /// Hand control to the rest of the chain.
    pub fn run(&self) -> BoxFuture<'static, Result<Outcome, BoxError>> {
        let Some(middleware) = self.chain.get(self.index) else {
            return Box::pin(async { Ok(Outcome::Proceed) });
        };
        let next = Self::new(Arc::clone(&self.chain), self.index + 1, self.navigation.clone());
        middleware.invoke(MiddlewareContext::new(&self.navigation, next))
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("index", &self.index)
            .field("len", &self.chain.len())
            .finish()
    }
}
