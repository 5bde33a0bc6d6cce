//! # Navigation interception
//!
//! Installs a [`MiddlewareProcessor`] on a host engine. Before every
//! navigation the processor reads the middleware chain from the target
//! route's metadata and runs it.

mod options;
mod processor;

pub use options::{ProcessingSwitch, ProcessorOptions};
pub use processor::MiddlewareProcessor;

use std::sync::Arc;
use waypost_core::NavigationHost;

/// Install middleware processing on `router` with default options.
pub fn register_middleware_processing<H>(router: &H) -> &H
where
    H: NavigationHost + ?Sized,
{
    register_middleware_processing_with(router, ProcessorOptions::default())
}

/// Install middleware processing on `router`.
pub fn register_middleware_processing_with<H>(router: &H, options: ProcessorOptions) -> &H
where
    H: NavigationHost + ?Sized,
{
    router.before_each(Arc::new(MiddlewareProcessor::with_options(options)));
    router
}
