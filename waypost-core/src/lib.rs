//! # waypost-core
//!
//! Core contracts for the Waypost route registration framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! middleware crates and host integrations that don't need the registrar.
//!
//! # Navigation Model
//!
//! Waypost sits between route declarations and a host navigation engine:
//!
//! ## Middleware ([`Middleware`], [`MiddlewareRef`])
//!
//! Asynchronous guards attached to routes. Each receives a
//! [`MiddlewareContext`] and either defers to the rest of the chain through
//! [`Next`] or short-circuits with an [`Outcome`].
//!
//! ## Locations ([`RouteLocation`], [`RouteLocationRaw`])
//!
//! Resolved locations flow in from the host; raw locations flow back out as
//! redirect targets.
//!
//! ## Host ([`NavigationHost`], [`NavigationGuard`])
//!
//! The registration interface of the host engine. Waypost installs one guard
//! through it and never drives navigations itself.
//!
//! # Error Types
//!
//! - [`WaypostError`] - Top-level error type
//! - [`ConfigError`] - Registration errors
//! - [`NavigationError`] - Middleware chain errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod error;
mod host;
mod location;
mod meta;
mod middleware;
mod outcome;

// Re-exports
pub use context::{MiddlewareContext, Next};
pub use error::{BoxError, ConfigError, NavigationError, WaypostError};
pub use host::{Navigation, NavigationGuard, NavigationHost};
pub use location::{NamedLocation, PathLocation, RouteLocation, RouteLocationRaw};
pub use meta::{MetaData, RouteMeta};
pub use middleware::{DynMiddleware, IntoMiddlewareList, Middleware, MiddlewareRef};
pub use outcome::{IntoOutcome, Outcome};

pub use async_trait::async_trait;
