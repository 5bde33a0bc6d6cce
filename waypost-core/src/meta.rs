//! Route metadata.

use crate::middleware::MiddlewareRef;
use serde_json::{Map, Value};

/// Free-form metadata attached to a route.
pub type MetaData = Map<String, Value>;

/// Metadata carried by a compiled route and read back at navigation time.
///
/// The `middleware` list is the chain the navigation guard runs; `data`
/// holds whatever the application attached with `meta(..)`.
#[derive(Debug, Clone, Default)]
pub struct RouteMeta {
    /// Ordered middleware chain for the route.
    pub middleware: Vec<MiddlewareRef>,
    /// Application-defined values.
    pub data: MetaData,
}

impl RouteMeta {
    /// Metadata with the given chain and no data.
    pub fn with_middleware(middleware: Vec<MiddlewareRef>) -> Self {
        Self {
            middleware,
            data: MetaData::new(),
        }
    }

    /// Look up an application value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}
