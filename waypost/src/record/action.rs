//! What a route does when matched: render a view, several named views, or
//! redirect.

use super::view::View;
use std::{collections::BTreeMap, fmt, sync::Arc};
use waypost_core::{RouteLocation, RouteLocationRaw};

type RedirectFn = dyn Fn(&RouteLocation) -> RouteLocationRaw + Send + Sync;

/// Where a redirecting route sends the navigation.
#[derive(Clone)]
pub enum RouteRedirect {
    /// A fixed target.
    To(RouteLocationRaw),
    /// A target computed from the location being redirected.
    Resolve(Arc<RedirectFn>),
}

impl RouteRedirect {
    /// A redirect computed from the matched location.
    pub fn resolve<F>(resolver: F) -> Self
    where
        F: Fn(&RouteLocation) -> RouteLocationRaw + Send + Sync + 'static,
    {
        Self::Resolve(Arc::new(resolver))
    }

    /// The target for a navigation to `location`.
    pub fn target(&self, location: &RouteLocation) -> RouteLocationRaw {
        match self {
            Self::To(target) => target.clone(),
            Self::Resolve(resolver) => resolver(location),
        }
    }
}

impl From<RouteLocationRaw> for RouteRedirect {
    fn from(target: RouteLocationRaw) -> Self {
        Self::To(target)
    }
}

impl From<&str> for RouteRedirect {
    fn from(path: &str) -> Self {
        Self::To(path.into())
    }
}

impl From<String> for RouteRedirect {
    fn from(path: String) -> Self {
        Self::To(path.into())
    }
}

impl fmt::Debug for RouteRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::To(target) => f.debug_tuple("To").field(target).finish(),
            Self::Resolve(_) => f.write_str("Resolve(<fn>)"),
        }
    }
}

/// The action of a route.
///
/// Leaf routes use exactly one of the three fields. Routes that own children
/// may pair a view with a redirect (typically to a default child). An action
/// with nothing set is rejected when the route is declared.
#[derive(Debug, Clone, Default)]
pub struct RouteAction {
    component: Option<View>,
    components: Option<BTreeMap<String, View>>,
    redirect: Option<RouteRedirect>,
}

impl RouteAction {
    /// Render a single view.
    pub fn component(view: View) -> Self {
        Self {
            component: Some(view),
            ..Self::default()
        }
    }

    /// Render several named views.
    pub fn components<I, K>(views: I) -> Self
    where
        I: IntoIterator<Item = (K, View)>,
        K: Into<String>,
    {
        Self {
            components: Some(views.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            ..Self::default()
        }
    }

    /// Redirect elsewhere.
    pub fn redirect(target: impl Into<RouteRedirect>) -> Self {
        Self {
            redirect: Some(target.into()),
            ..Self::default()
        }
    }

    /// Add a redirect to a view action.
    pub fn with_redirect(mut self, target: impl Into<RouteRedirect>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    /// Whether none of the three fields is set.
    pub fn is_empty(&self) -> bool {
        self.component.is_none() && self.components.is_none() && self.redirect.is_none()
    }

    /// The single view, if any.
    pub fn view(&self) -> Option<&View> {
        self.component.as_ref()
    }

    /// The named views, if any.
    pub fn views(&self) -> Option<&BTreeMap<String, View>> {
        self.components.as_ref()
    }

    /// The redirect, if any.
    pub fn redirect_target(&self) -> Option<&RouteRedirect> {
        self.redirect.as_ref()
    }
}
