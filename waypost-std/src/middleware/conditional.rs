//! Conditional middleware - run a middleware only for some navigations.

use waypost_core::{BoxError, Middleware, MiddlewareContext, Outcome};

/// A middleware that runs `inner` only when `condition` holds.
///
/// When the condition is `false` the navigation is handed straight to the
/// rest of the chain, as if `inner` were not there.
///
/// # Example
///
/// ```rust,ignore
/// use waypost_std::middleware::When;
///
/// // Only check permissions when leaving the editor
/// let guard = When::new(
///     |context: &MiddlewareContext| context.from.path.starts_with("/editor"),
///     ConfirmUnsavedChanges,
/// );
/// ```
pub struct When<C, M> {
    condition: C,
    inner: M,
}

impl<C, M> When<C, M> {
    /// Create a new `When`.
    pub fn new(condition: C, inner: M) -> Self {
        Self { condition, inner }
    }

    /// Get a reference to the inner middleware.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<C, M> Middleware for When<C, M>
where
    C: Fn(&MiddlewareContext) -> bool + Send + Sync + 'static,
    M: Middleware,
{
    async fn handle(&self, context: MiddlewareContext) -> Result<Outcome, BoxError> {
        if (self.condition)(&context) {
            self.inner.handle(context).await
        } else {
            context.next.run().await
        }
    }
}
