//! # Route records
//!
//! A [`PreparedRouteRecord`] is the mutable builder for one route. It is
//! created by the registrar with a snapshot of the enclosing groups'
//! accumulated modifier, refined through fluent calls, and finally compiled
//! into an immutable [`CompiledRouteRecord`].
//!
//! # Recomputation
//!
//! `path`, `name` and `middleware` always derive their result from the
//! construction-time snapshot plus the value given to the *latest* call.
//! Calling `middleware(b)` after `middleware(a)` yields
//! `snapshot ++ [b]`, not `snapshot ++ [a, b]`.

pub mod action;
pub mod compiled;
pub mod props;
pub mod view;

use crate::registrar::modifier::{NormalizedModifier, normalize_leading_slash};
use action::RouteAction;
use compiled::CompiledRouteRecord;
use props::RouteProps;
use serde_json::Value;
use waypost_core::{ConfigError, IntoMiddlewareList, MetaData, MiddlewareRef, RouteMeta};

/// Mutable builder for one route.
#[derive(Debug, Clone)]
pub struct PreparedRouteRecord {
    path: String,
    action: RouteAction,
    middleware: Vec<MiddlewareRef>,
    name: Option<String>,
    meta: Option<MetaData>,
    children: Vec<PreparedRouteRecord>,
    attached_modifier: Option<NormalizedModifier>,
    props: Option<RouteProps>,
}

impl PreparedRouteRecord {
    /// Declare a route.
    ///
    /// `attached_modifier` is the accumulated state of the enclosing groups,
    /// or `None` outside any group. Fails when `action` sets nothing.
    pub fn new(
        path: impl Into<String>,
        action: RouteAction,
        attached_modifier: Option<NormalizedModifier>,
    ) -> Result<Self, ConfigError> {
        let path = path.into();
        if action.is_empty() {
            return Err(ConfigError::MissingAction { path });
        }

        let (middleware, name) = match &attached_modifier {
            Some(modifier) => (
                modifier.middleware.clone(),
                (!modifier.name.is_empty()).then(|| modifier.name.clone()),
            ),
            None => (Vec::new(), None),
        };

        let mut record = Self {
            path: String::new(),
            action,
            middleware,
            name,
            meta: None,
            children: Vec::new(),
            attached_modifier,
            props: None,
        };
        record.path(path);
        Ok(record)
    }

    /// Set the path, relative to the enclosing groups' prefix.
    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        let mut path = path.into();
        normalize_leading_slash(&mut path);
        self.path = match &self.attached_modifier {
            Some(modifier) => format!("{}{}", modifier.prefix, path),
            None => path,
        };
        self
    }

    /// Set the route's own middleware, appended after the groups' chain.
    pub fn middleware(&mut self, middleware: impl IntoMiddlewareList) -> &mut Self {
        let middleware = middleware.into_middleware_list();
        self.middleware = match &self.attached_modifier {
            Some(modifier) => {
                let mut chain = modifier.middleware.clone();
                chain.extend(middleware);
                chain
            }
            None => middleware,
        };
        self
    }

    /// Set the name, appended to the groups' name prefix without separator.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.name = Some(match &self.attached_modifier {
            Some(modifier) => format!("{}{}", modifier.name, name),
            None => name,
        });
        self
    }

    /// Replace the application metadata.
    pub fn meta<I, K>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.meta = Some(entries.into_iter().map(|(k, v)| (k.into(), v)).collect());
        self
    }

    /// Append a nested route.
    pub fn add_child(&mut self, child: PreparedRouteRecord) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Set the props passed to the view(s).
    pub fn props(&mut self, props: impl Into<RouteProps>) -> &mut Self {
        self.props = Some(props.into());
        self
    }

    /// Current full path.
    pub fn full_path(&self) -> &str {
        &self.path
    }

    /// Current full name.
    pub fn full_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Current middleware chain.
    pub fn chain(&self) -> &[MiddlewareRef] {
        &self.middleware
    }

    /// The route action.
    pub fn action(&self) -> &RouteAction {
        &self.action
    }

    /// Nested routes, in declaration order.
    pub fn children(&self) -> &[PreparedRouteRecord] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<PreparedRouteRecord> {
        &mut self.children
    }

    /// Snapshot of the enclosing groups taken at construction.
    pub fn attached_modifier(&self) -> Option<&NormalizedModifier> {
        self.attached_modifier.as_ref()
    }

    /// Compile into the immutable form. Does not modify the builder.
    ///
    /// A route with named views never carries a redirect: when both are
    /// declared, the redirect is dropped.
    pub fn compile(&self) -> CompiledRouteRecord {
        let mut compiled = CompiledRouteRecord {
            path: self.path.clone(),
            name: self.name.clone(),
            meta: RouteMeta {
                middleware: self.middleware.clone(),
                data: self.meta.clone().unwrap_or_default(),
            },
            children: self.children.iter().map(Self::compile).collect(),
            props: self.props.clone(),
            component: None,
            components: None,
            redirect: None,
        };

        if let Some(view) = self.action.view() {
            compiled.component = Some(view.clone());
        } else if let Some(views) = self.action.views() {
            compiled.components = Some(views.clone());
            return compiled;
        }
        compiled.redirect = self.action.redirect_target().cloned();
        compiled
    }
}
