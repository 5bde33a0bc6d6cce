//! Compiled route records, the form handed to the host engine.

use super::{action::RouteRedirect, props::RouteProps, view::View};
use std::collections::BTreeMap;
use waypost_core::{RouteLocation, RouteMeta};

/// An immutable route description.
///
/// Produced by [`PreparedRouteRecord::compile`]; never mutated afterwards.
///
/// [`PreparedRouteRecord::compile`]: super::PreparedRouteRecord::compile
#[derive(Debug, Clone)]
pub struct CompiledRouteRecord {
    /// Full path, group prefixes included.
    pub path: String,
    /// Full name, group name prefixes included.
    pub name: Option<String>,
    /// Middleware chain and application data.
    pub meta: RouteMeta,
    /// Nested routes.
    pub children: Vec<CompiledRouteRecord>,
    /// Props for the view(s).
    pub props: Option<RouteProps>,
    /// Single view.
    pub component: Option<View>,
    /// Named views.
    pub components: Option<BTreeMap<String, View>>,
    /// Redirect target.
    pub redirect: Option<RouteRedirect>,
}

impl CompiledRouteRecord {
    /// The location a host would report when this record is matched.
    pub fn to_location(&self) -> RouteLocation {
        let mut location = RouteLocation::new(self.path.clone()).with_meta(self.meta.clone());
        location.name = self.name.clone();
        location
    }

    /// Depth-first search by route name.
    pub fn find_by_name(&self, name: &str) -> Option<&CompiledRouteRecord> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_name(name))
    }
}
