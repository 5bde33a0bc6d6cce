//! Error types for Waypost.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`WaypostError`] - Top-level error type for all Waypost operations
//! - [`ConfigError`] - Route registration errors, raised synchronously
//! - [`NavigationError`] - Errors surfaced while running a middleware chain

use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// Middleware authors return this from their handlers; the chain never
/// inspects it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Waypost operations.
#[derive(Error, Debug)]
pub enum WaypostError {
    /// A route could not be registered.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A navigation was aborted by a failing middleware.
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised while declaring routes.
///
/// These are fatal: registration stops at the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The route action has none of `component`, `components` or `redirect`.
    #[error("at least one action should be registered for route `{path}`")]
    MissingAction {
        /// Path the route was declared with.
        path: String,
    },
}

/// Errors that abort a navigation.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// A middleware in the chain returned an error.
    #[error("middleware failed: {0}")]
    Middleware(#[source] BoxError),
}

// Convenience conversions
impl From<BoxError> for WaypostError {
    fn from(err: BoxError) -> Self {
        WaypostError::Custom(err)
    }
}

impl From<BoxError> for NavigationError {
    fn from(err: BoxError) -> Self {
        NavigationError::Middleware(err)
    }
}
