//! # Route registrar
//!
//! The registration surface. Routes are declared at the top level, inside
//! groups that share a path prefix, name prefix and middleware, or inside
//! children groups that nest them under a parent route.
//!
//! ```rust
//! use waypost::{ChildrenGroup, Modifier, RouteAction, RouteRegistrar, View};
//!
//! let mut registrar = RouteRegistrar::new();
//! registrar.group(Modifier::new().prefix("/admin").name("admin"), |routes| {
//!     routes.add("/users", RouteAction::component(View::new("users")))?.name(".users");
//!     routes.children_group(
//!         "/settings",
//!         ChildrenGroup::new(RouteAction::component(View::new("settings"))).name(".settings"),
//!         |children| {
//!             children.add("/profile", RouteAction::component(View::new("profile")))?;
//!             Ok(())
//!         },
//!     )?;
//!     Ok(())
//! })?;
//!
//! let routes = registrar.build_routes();
//! assert_eq!(routes[0].path, "/admin/users");
//! assert_eq!(routes[1].children[0].path, "/profile");
//! # Ok::<(), waypost::ConfigError>(())
//! ```

pub mod modifier;
pub mod scope;

use crate::record::{PreparedRouteRecord, action::RouteAction, compiled::CompiledRouteRecord};
use modifier::{Modifier, ModifierStack, Overwrite};
use scope::RegistrationScope;
use serde_json::Value;
use waypost_core::{ConfigError, IntoMiddlewareList, MetaData, MiddlewareRef};

/// Options of a children group's parent route.
#[derive(Debug, Clone)]
pub struct ChildrenGroup {
    action: RouteAction,
    middleware: Option<Vec<MiddlewareRef>>,
    name: Option<String>,
    meta: Option<MetaData>,
}

impl ChildrenGroup {
    /// Parent route with `action`.
    pub fn new(action: RouteAction) -> Self {
        Self {
            action,
            middleware: None,
            name: None,
            meta: None,
        }
    }

    /// Middleware of the parent route.
    pub fn middleware(mut self, middleware: impl IntoMiddlewareList) -> Self {
        self.middleware = Some(middleware.into_middleware_list());
        self
    }

    /// Name of the parent route. An empty name is ignored.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Metadata of the parent route.
    pub fn meta<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.meta = Some(entries.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }
}

impl From<RouteAction> for ChildrenGroup {
    fn from(action: RouteAction) -> Self {
        Self::new(action)
    }
}

/// Collects route declarations and compiles them.
///
/// A registrar is an ordinary value: construct one at bootstrap and pass it
/// to the code that declares routes.
#[derive(Debug, Default)]
pub struct RouteRegistrar {
    routes: Vec<PreparedRouteRecord>,
    modifiers: ModifierStack,
    /// Index path from the roots to the parent of the open children group.
    targets: Vec<usize>,
}

impl RouteRegistrar {
    /// An empty registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level routes declared so far.
    pub fn routes(&self) -> &[PreparedRouteRecord] {
        &self.routes
    }

    /// Number of open groups.
    pub fn depth(&self) -> usize {
        self.modifiers.depth()
    }

    /// Forget every top-level route.
    ///
    /// Open groups are left untouched. Inside a children group this does
    /// nothing, since the group's parent is one of the top-level routes.
    pub fn clear(&mut self) -> &mut Self {
        if !self.targets.is_empty() {
            #[cfg(feature = "tracing")]
            {
                tracing::warn!(depth = self.targets.len(), "clear ignored inside children group");
            }
            return self;
        }
        self.routes.clear();
        self
    }

    /// Declare a route.
    ///
    /// Inside a children group the route becomes a child of the group's
    /// parent; otherwise it is a top-level route.
    pub fn add_route(
        &mut self,
        path: impl Into<String>,
        action: RouteAction,
    ) -> Result<&mut PreparedRouteRecord, ConfigError> {
        let record = PreparedRouteRecord::new(path, action, self.modifiers.top().cloned())?;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                path = %record.full_path(),
                name = ?record.full_name(),
                depth = self.modifiers.depth(),
                nested = !self.targets.is_empty(),
                "registered route"
            );
        }

        let siblings = self.siblings_mut();
        let index = siblings.len();
        siblings.push(record);
        Ok(&mut siblings[index])
    }

    /// Alias of [`add_route`](Self::add_route).
    pub fn add(
        &mut self,
        path: impl Into<String>,
        action: RouteAction,
    ) -> Result<&mut PreparedRouteRecord, ConfigError> {
        self.add_route(path, action)
    }

    /// Open a group for the lifetime of the returned scope.
    pub fn scope(&mut self, modifier: Modifier) -> RegistrationScope<'_> {
        self.modifiers.push(modifier, Overwrite::empty());
        RegistrationScope::new(self, false)
    }

    /// Declare the routes of `routes` inside a group.
    ///
    /// The group is closed before returning, including when `routes` fails.
    pub fn group<F>(&mut self, modifier: Modifier, routes: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut RouteRegistrar) -> Result<(), ConfigError>,
    {
        let mut scope = self.scope(modifier);
        routes(&mut *scope)
    }

    /// Declare a parent route and, through `routes`, its children.
    ///
    /// The parent's path takes the enclosing groups' prefix; the children's
    /// paths do not. Names and middleware keep accumulating.
    pub fn children_group<F>(
        &mut self,
        path: impl Into<String>,
        group: impl Into<ChildrenGroup>,
        routes: F,
    ) -> Result<&mut PreparedRouteRecord, ConfigError>
    where
        F: FnOnce(&mut RouteRegistrar) -> Result<(), ConfigError>,
    {
        let ChildrenGroup {
            action,
            middleware,
            name,
            meta,
        } = group.into();

        let parent = self.add_route(path, action)?;
        if let Some(middleware) = middleware {
            parent.middleware(middleware);
        }
        if let Some(name) = name.filter(|name| !name.is_empty()) {
            parent.name(name);
        }
        if let Some(meta) = meta {
            parent.meta(meta);
        }

        let index = self.siblings_mut().len() - 1;
        {
            self.modifiers
                .push(Modifier::new().prefix(""), Overwrite::PREFIX);
            self.targets.push(index);
            let mut scope = RegistrationScope::new(self, true);
            routes(&mut *scope)?;
        }
        Ok(&mut self.siblings_mut()[index])
    }

    /// Compile every top-level route, in declaration order.
    pub fn build_routes(&self) -> Vec<CompiledRouteRecord> {
        self.routes.iter().map(PreparedRouteRecord::compile).collect()
    }

    fn siblings_mut(&mut self) -> &mut Vec<PreparedRouteRecord> {
        let mut siblings = &mut self.routes;
        for &index in &self.targets {
            siblings = siblings[index].children_mut();
        }
        siblings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::view::View;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use waypost_core::Outcome;

    fn page() -> RouteAction {
        RouteAction::component(View::new("page"))
    }

    fn noop(label: &'static str) -> MiddlewareRef {
        MiddlewareRef::function(|_| async { Outcome::Proceed }).named(label)
    }

    #[test]
    fn test_add_route_and_alias_register_top_level() {
        let mut registrar = RouteRegistrar::new();
        registrar.add_route("/test", page()).unwrap();
        assert_eq!(registrar.routes().len(), 1);

        registrar.clear();
        registrar.add("/test", page()).unwrap();
        assert_eq!(registrar.routes().len(), 1);
    }

    #[test]
    fn test_group_closes_on_error() {
        let mut registrar = RouteRegistrar::new();
        let result = registrar.group(Modifier::new().prefix("/a"), |routes| {
            routes.add("/ok", page())?;
            routes.add("/broken", RouteAction::default())?;
            Ok(())
        });

        assert!(matches!(result, Err(ConfigError::MissingAction { .. })));
        assert_eq!(registrar.depth(), 0);
        assert_eq!(registrar.routes().len(), 1);

        registrar.add("/after", page()).unwrap();
        assert_eq!(registrar.build_routes()[1].path, "/after");
    }

    #[test]
    fn test_group_closes_on_panic() {
        let mut registrar = RouteRegistrar::new();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _ = registrar.group(Modifier::new().prefix("/a"), |_| panic!("declaration bug"));
        }));

        assert!(outcome.is_err());
        assert_eq!(registrar.depth(), 0);
    }

    #[test]
    fn test_children_group_closes_target_on_error() {
        let mut registrar = RouteRegistrar::new();
        let result = registrar.children_group("/parent", page(), |children| {
            children.add("", RouteAction::default())?;
            Ok(())
        });
        assert!(result.is_err());

        registrar.add("/sibling", page()).unwrap();
        assert_eq!(registrar.routes().len(), 2);
        assert!(registrar.routes()[0].children().is_empty());
    }

    #[test]
    fn test_children_group_applies_parent_options() {
        let mut registrar = RouteRegistrar::new();
        registrar
            .children_group(
                "/parent",
                ChildrenGroup::new(page())
                    .middleware(noop("auth"))
                    .name("parent")
                    .meta([("layout", serde_json::json!("wide"))]),
                |_| Ok(()),
            )
            .unwrap();

        let compiled = registrar.build_routes();
        assert_eq!(compiled[0].name.as_deref(), Some("parent"));
        assert_eq!(compiled[0].meta.middleware.len(), 1);
        assert_eq!(compiled[0].meta.get("layout"), Some(&serde_json::json!("wide")));
    }

    #[test]
    fn test_empty_children_group_name_is_ignored() {
        let mut registrar = RouteRegistrar::new();
        registrar
            .group(Modifier::new().name("admin"), |routes| {
                routes.children_group("/p", ChildrenGroup::new(page()).name(""), |_| Ok(()))?;
                Ok(())
            })
            .unwrap();

        assert_eq!(registrar.build_routes()[0].name.as_deref(), Some("admin"));
    }

    #[test]
    fn test_clear_inside_children_group_keeps_parent() {
        let mut registrar = RouteRegistrar::new();
        registrar.add("/before", page()).unwrap();
        registrar
            .children_group("/parent", page(), |children| {
                children.clear();
                children.add("/child", page())?;
                Ok(())
            })
            .unwrap();

        let compiled = registrar.build_routes();
        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[1].children[0].path, "/child");

        registrar.clear();
        assert!(registrar.routes().is_empty());
    }

    #[test]
    fn test_children_group_returns_parent_builder() {
        let mut registrar = RouteRegistrar::new();
        registrar
            .children_group("/parent", page(), |children| {
                children.add("/a", page())?;
                Ok(())
            })
            .unwrap()
            .name("renamed");

        let compiled = registrar.build_routes();
        assert_eq!(compiled[0].name.as_deref(), Some("renamed"));
        assert_eq!(compiled[0].children.len(), 1);
    }
}
