//! Route locations exchanged with the host navigation engine.
//!
//! [`RouteLocation`] is what the host hands to guards: a resolved, normalized
//! location. [`RouteLocationRaw`] is what middleware hands back when it wants
//! the navigation to go somewhere else.

use crate::meta::RouteMeta;
use std::collections::BTreeMap;

/// A resolved location, as produced by the host after matching.
#[derive(Debug, Clone, Default)]
pub struct RouteLocation {
    /// Normalized path, always starting with `/`.
    pub path: String,
    /// Name of the matched route, if it has one.
    pub name: Option<String>,
    /// Path including query and hash.
    pub full_path: String,
    /// Decoded path parameters.
    pub params: BTreeMap<String, String>,
    /// Decoded query parameters.
    pub query: BTreeMap<String, String>,
    /// Hash fragment, including the leading `#` when present.
    pub hash: String,
    /// Metadata of the matched record.
    pub meta: RouteMeta,
}

impl RouteLocation {
    /// Create a location for `path` with empty metadata.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            full_path: path.clone(),
            path,
            ..Self::default()
        }
    }

    /// Set the route name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the route metadata.
    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Add a path parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// A path-shaped redirect target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathLocation {
    /// Target path.
    pub path: String,
    /// Query parameters to attach.
    pub query: BTreeMap<String, String>,
    /// Hash fragment to attach.
    pub hash: Option<String>,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

/// A name-shaped redirect target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedLocation {
    /// Target route name.
    pub name: String,
    /// Path parameters for the named route.
    pub params: BTreeMap<String, String>,
    /// Query parameters to attach.
    pub query: BTreeMap<String, String>,
    /// Hash fragment to attach.
    pub hash: Option<String>,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

/// An unresolved location: where a redirect should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLocationRaw {
    /// A bare path string.
    Path(String),
    /// A location object addressed by path.
    PathLocation(PathLocation),
    /// A location object addressed by route name.
    Named(NamedLocation),
}

impl RouteLocationRaw {
    /// A path-shaped location object.
    pub fn path(path: impl Into<String>) -> Self {
        Self::PathLocation(PathLocation {
            path: path.into(),
            ..PathLocation::default()
        })
    }

    /// A name-shaped location object.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedLocation {
            name: name.into(),
            ..NamedLocation::default()
        })
    }

    /// Mark the location as replacing the current history entry.
    ///
    /// Bare paths are promoted to a [`PathLocation`].
    pub fn replace(self) -> Self {
        match self {
            Self::Path(path) => Self::PathLocation(PathLocation {
                path,
                replace: true,
                ..PathLocation::default()
            }),
            Self::PathLocation(location) => Self::PathLocation(PathLocation {
                replace: true,
                ..location
            }),
            Self::Named(location) => Self::Named(NamedLocation {
                replace: true,
                ..location
            }),
        }
    }

    /// Whether this target points at `location` itself.
    ///
    /// Paths compare against `location.path`, names against `location.name`.
    pub fn targets(&self, location: &RouteLocation) -> bool {
        match self {
            Self::Path(path) => *path == location.path,
            Self::PathLocation(target) => target.path == location.path,
            Self::Named(target) => location.name.as_deref() == Some(target.name.as_str()),
        }
    }
}

impl From<&str> for RouteLocationRaw {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for RouteLocationRaw {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<PathLocation> for RouteLocationRaw {
    fn from(location: PathLocation) -> Self {
        Self::PathLocation(location)
    }
}

impl From<NamedLocation> for RouteLocationRaw {
    fn from(location: NamedLocation) -> Self {
        Self::Named(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> RouteLocation {
        RouteLocation::new("/dashboard").with_name("dashboard")
    }

    #[test]
    fn test_bare_path_targets_same_path() {
        assert!(RouteLocationRaw::from("/dashboard").targets(&dashboard()));
        assert!(!RouteLocationRaw::from("/login").targets(&dashboard()));
    }

    #[test]
    fn test_path_location_targets_same_path() {
        assert!(RouteLocationRaw::path("/dashboard").targets(&dashboard()));
        assert!(!RouteLocationRaw::path("/login").targets(&dashboard()));
    }

    #[test]
    fn test_named_target_compares_names_only() {
        assert!(RouteLocationRaw::named("dashboard").targets(&dashboard()));
        assert!(!RouteLocationRaw::named("login").targets(&dashboard()));
        // Unnamed location never matches a named target.
        assert!(!RouteLocationRaw::named("dashboard").targets(&RouteLocation::new("/dashboard")));
    }

    #[test]
    fn test_replace_promotes_bare_path() {
        let raw = RouteLocationRaw::from("/login").replace();
        match raw {
            RouteLocationRaw::PathLocation(location) => {
                assert_eq!(location.path, "/login");
                assert!(location.replace);
            }
            other => panic!("unexpected location: {other:?}"),
        }
    }
}
