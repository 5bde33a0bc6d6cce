//! # waypost - Declarative Route Registration
//!
//! `waypost` builds route tables for a client-side navigation engine.
//! Routes are declared through a [`RouteRegistrar`], grouped under shared
//! path prefixes, name prefixes and middleware, and compiled into
//! [`CompiledRouteRecord`]s the host engine consumes. At navigation time a
//! [`MiddlewareProcessor`] runs the target route's middleware chain.
//!
//! ## Quick Start
//!
//! ```rust
//! use waypost::{Modifier, MiddlewareRef, Outcome, RouteAction, RouteRegistrar, View};
//!
//! let auth = MiddlewareRef::function(|context: waypost::MiddlewareContext| async move {
//!     if context.to.meta.get("public").is_some() {
//!         Outcome::Proceed
//!     } else {
//!         Outcome::redirect("/login")
//!     }
//! })
//! .named("auth");
//!
//! let mut registrar = RouteRegistrar::new();
//! registrar.add("/login", RouteAction::component(View::new("login")))?;
//! registrar.group(
//!     Modifier::new().prefix("/admin").name("admin.").middleware(auth),
//!     |routes| {
//!         routes.add("/users", RouteAction::component(View::new("users")))?.name("users");
//!         Ok(())
//!     },
//! )?;
//!
//! let routes = registrar.build_routes();
//! assert_eq!(routes[1].path, "/admin/users");
//! assert_eq!(routes[1].name.as_deref(), Some("admin.users"));
//! assert_eq!(routes[1].meta.middleware.len(), 1);
//! # Ok::<(), waypost::ConfigError>(())
//! ```
//!
//! ## Navigation
//!
//! Install the processor on the host engine once, at bootstrap:
//!
//! ```rust,ignore
//! waypost::register_middleware_processing(&router);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod navigation;
pub mod record;
pub mod registrar;

pub use waypost_core::{
    // Errors
    BoxError,
    ConfigError,
    // Middleware
    DynMiddleware,
    IntoMiddlewareList,
    IntoOutcome,
    // Metadata
    MetaData,
    Middleware,
    MiddlewareContext,
    MiddlewareRef,
    // Locations
    NamedLocation,
    // Host
    Navigation,
    NavigationError,
    NavigationGuard,
    NavigationHost,
    Next,
    Outcome,
    PathLocation,
    RouteLocation,
    RouteLocationRaw,
    RouteMeta,
    WaypostError,
    async_trait,
};

// Registration
pub use registrar::{
    ChildrenGroup, RouteRegistrar,
    modifier::{Modifier, ModifierStack, NormalizedModifier, Overwrite},
    scope::RegistrationScope,
};

// Records
pub use record::{
    PreparedRouteRecord,
    action::{RouteAction, RouteRedirect},
    compiled::CompiledRouteRecord,
    props::RouteProps,
    view::View,
};

// Navigation
pub use navigation::{
    MiddlewareProcessor, ProcessingSwitch, ProcessorOptions, register_middleware_processing,
    register_middleware_processing_with,
};

/// Standard middleware implementations.
pub mod middleware {
    #![allow(clippy::wildcard_imports)]
    pub use waypost_std::middleware::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use waypost_std::testing::*;
}

/// Prelude module - common imports for Waypost.
///
/// # Usage
///
/// ```rust
/// use waypost::prelude::*;
///
/// let mut registrar = RouteRegistrar::new();
/// registrar.add("/", RouteAction::component(View::new("home"))).unwrap();
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        ChildrenGroup,
        ConfigError,
        // Core traits
        Middleware,
        MiddlewareContext,
        MiddlewareRef,
        // Registration
        Modifier,
        NavigationError,
        Outcome,
        RouteAction,
        RouteLocation,
        RouteLocationRaw,
        RouteRegistrar,
        View,
        register_middleware_processing,
    };
}
