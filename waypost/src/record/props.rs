//! Props passed from the route to its view(s).

use std::{collections::BTreeMap, fmt, sync::Arc};
use waypost_core::{MetaData, RouteLocation};

type PropsFn = dyn Fn(&RouteLocation) -> MetaData + Send + Sync;

/// How a route feeds props to its view.
#[derive(Clone)]
pub enum RouteProps {
    /// `true` passes the route params as props.
    Bool(bool),
    /// A fixed set of props.
    Static(MetaData),
    /// Props computed from the matched location.
    Resolve(Arc<PropsFn>),
    /// Props per named view.
    PerView(BTreeMap<String, RouteProps>),
}

impl RouteProps {
    /// Props computed from the matched location.
    pub fn resolve<F>(resolver: F) -> Self
    where
        F: Fn(&RouteLocation) -> MetaData + Send + Sync + 'static,
    {
        Self::Resolve(Arc::new(resolver))
    }

    /// Props per named view.
    pub fn per_view<I, K>(views: I) -> Self
    where
        I: IntoIterator<Item = (K, RouteProps)>,
        K: Into<String>,
    {
        Self::PerView(views.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<bool> for RouteProps {
    fn from(enabled: bool) -> Self {
        Self::Bool(enabled)
    }
}

impl From<MetaData> for RouteProps {
    fn from(props: MetaData) -> Self {
        Self::Static(props)
    }
}

impl fmt::Debug for RouteProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(enabled) => f.debug_tuple("Bool").field(enabled).finish(),
            Self::Static(props) => f.debug_tuple("Static").field(props).finish(),
            Self::Resolve(_) => f.write_str("Resolve(<fn>)"),
            Self::PerView(views) => f.debug_tuple("PerView").field(views).finish(),
        }
    }
}
