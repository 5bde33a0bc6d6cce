#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use waypost::{
    CompiledRouteRecord, MiddlewareContext, MiddlewareRef, Outcome, RouteAction,
    RouteLocation, RouteLocationRaw, View,
};

// ============================================================================
// Route Actions
// ============================================================================

pub fn page(name: &'static str) -> RouteAction {
    RouteAction::component(View::new(name))
}

// ============================================================================
// Test Middleware
// ============================================================================

/// Shared log of middleware invocations, in call order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    /// A middleware that logs `label` and defers to the rest of the chain.
    pub fn deferring(&self, label: &'static str) -> MiddlewareRef {
        let log = self.clone();
        MiddlewareRef::function(move |context: MiddlewareContext| {
            log.0.lock().unwrap().push(label);
            async move { context.next.run().await }
        })
        .named(label)
    }

    /// A middleware that logs `label` and returns `outcome`.
    pub fn returning(&self, label: &'static str, outcome: Outcome) -> MiddlewareRef {
        let log = self.clone();
        MiddlewareRef::function(move |_| {
            log.0.lock().unwrap().push(label);
            let outcome = outcome.clone();
            async move { outcome }
        })
        .named(label)
    }
}

pub fn noop(label: &'static str) -> MiddlewareRef {
    MiddlewareRef::function(|_| async { Outcome::Proceed }).named(label)
}

pub fn redirecting(target: impl Into<RouteLocationRaw>) -> MiddlewareRef {
    let target = target.into();
    MiddlewareRef::function(move |_| {
        let target = target.clone();
        async move { Outcome::Redirect(target) }
    })
}

// ============================================================================
// Helpers
// ============================================================================

pub fn labels(record: &CompiledRouteRecord) -> Vec<&'static str> {
    record.meta.middleware.iter().map(MiddlewareRef::label).collect()
}

pub fn home() -> RouteLocation {
    RouteLocation::new("/")
}
