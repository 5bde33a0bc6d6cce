//! Logging middleware for navigation observation.

use waypost_core::{BoxError, Middleware, MiddlewareContext, Outcome};

/// A middleware that logs each navigation it sees, then defers to the rest
/// of the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    async fn handle(&self, context: MiddlewareContext) -> Result<Outcome, BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                to = %context.to.path,
                from = %context.from.path,
                name = ?context.to.name,
                remaining = context.next.remaining(),
                "Processing navigation"
            );
        }
        context.next.run().await
    }
}
