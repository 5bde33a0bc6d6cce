//! # Middleware
//!
//! A middleware is an asynchronous guard that runs before a navigation
//! completes. It receives a [`MiddlewareContext`] describing the navigation
//! and a [`Next`] continuation, and decides one of:
//!
//! - hand control to the rest of the chain (`context.next.run().await`),
//! - block the navigation (`Outcome::Block`),
//! - redirect it elsewhere (`Outcome::Redirect`).
//!
//! Two shapes of middleware exist and are interchangeable at invocation
//! time: capability objects implementing [`Middleware`], and plain async
//! functions. [`MiddlewareRef`] holds either one.
//!
//! [`Next`]: crate::Next

use crate::{
    context::MiddlewareContext,
    error::BoxError,
    outcome::{IntoOutcome, Outcome},
};
use futures::future::BoxFuture;
use std::{fmt, future::Future, sync::Arc};

/// A capability object guarding navigations.
///
/// This trait uses native `async fn` for zero-cost static dispatch.
/// For dynamic dispatch (e.g. inside a route's chain), use [`DynMiddleware`].
///
/// # Example
///
/// ```rust
/// use waypost_core::{BoxError, Middleware, MiddlewareContext, Outcome};
///
/// struct RequireName;
///
/// impl Middleware for RequireName {
///     async fn handle(&self, context: MiddlewareContext) -> Result<Outcome, BoxError> {
///         if context.to.name.is_none() {
///             return Ok(Outcome::Block);
///         }
///         context.next.run().await
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Middleware`",
    label = "missing `Middleware` implementation",
    note = "Middleware must implement `handle`, or be wrapped with `MiddlewareRef::function`."
)]
pub trait Middleware: Send + Sync + 'static {
    /// Called before the navigation described by `context` completes.
    fn handle(
        &self,
        context: MiddlewareContext,
    ) -> impl Future<Output = Result<Outcome, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Middleware`].
pub trait DynMiddleware: Send + Sync + 'static {
    /// Called before the navigation completes (dynamic dispatch version).
    fn handle_dyn(&self, context: MiddlewareContext) -> BoxFuture<'_, Result<Outcome, BoxError>>;
}

// Blanket implementation: Any type implementing Middleware implements DynMiddleware automatically.
impl<T: Middleware> DynMiddleware for T {
    fn handle_dyn(&self, context: MiddlewareContext) -> BoxFuture<'_, Result<Outcome, BoxError>> {
        Box::pin(self.handle(context))
    }
}

type MiddlewareFn =
    dyn Fn(MiddlewareContext) -> BoxFuture<'static, Result<Outcome, BoxError>> + Send + Sync;

/// A reference to one entry of a middleware chain.
///
/// Cloning is cheap: both variants are reference counted.
#[derive(Clone)]
pub enum MiddlewareRef {
    /// A capability object.
    Handler {
        /// Diagnostic label, the type name unless overridden.
        label: &'static str,
        /// The middleware itself.
        middleware: Arc<dyn DynMiddleware>,
    },
    /// A plain async function.
    Function {
        /// Diagnostic label, the closure type name unless overridden.
        label: &'static str,
        /// The function itself.
        function: Arc<MiddlewareFn>,
    },
}

impl MiddlewareRef {
    /// Wrap a capability object.
    pub fn handler<M: Middleware>(middleware: M) -> Self {
        Self::Handler {
            label: std::any::type_name::<M>(),
            middleware: Arc::new(middleware),
        }
    }

    /// Wrap an async function.
    ///
    /// The function may return anything implementing [`IntoOutcome`].
    pub fn function<F, Fut, O>(function: F) -> Self
    where
        F: Fn(MiddlewareContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = O> + Send + 'static,
        O: IntoOutcome,
    {
        Self::Function {
            label: std::any::type_name::<F>(),
            function: Arc::new(
                move |context| -> BoxFuture<'static, Result<Outcome, BoxError>> {
                    let fut = function(context);
                    Box::pin(async move { fut.await.into_outcome() })
                },
            ),
        }
    }

    /// Replace the diagnostic label.
    pub fn named(self, name: &'static str) -> Self {
        match self {
            Self::Handler { middleware, .. } => Self::Handler {
                label: name,
                middleware,
            },
            Self::Function { function, .. } => Self::Function {
                label: name,
                function,
            },
        }
    }

    /// The diagnostic label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Handler { label, .. } | Self::Function { label, .. } => label,
        }
    }

    /// Whether two references point at the same middleware instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Handler { middleware: a, .. }, Self::Handler { middleware: b, .. }) => {
                Arc::ptr_eq(a, b)
            }
            (Self::Function { function: a, .. }, Self::Function { function: b, .. }) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    /// Run the middleware with `context`.
    pub fn invoke(&self, context: MiddlewareContext) -> BoxFuture<'static, Result<Outcome, BoxError>> {
        match self {
            Self::Handler { middleware, .. } => {
                let middleware = Arc::clone(middleware);
                Box::pin(async move { middleware.handle_dyn(context).await })
            }
            Self::Function { function, .. } => function(context),
        }
    }
}

impl fmt::Debug for MiddlewareRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handler { label, .. } => f.debug_tuple("Handler").field(label).finish(),
            Self::Function { label, .. } => f.debug_tuple("Function").field(label).finish(),
        }
    }
}

/// Anything accepted where a middleware chain is expected.
///
/// A single [`MiddlewareRef`] is normalized to a one-element list.
pub trait IntoMiddlewareList {
    /// Convert into an ordered chain.
    fn into_middleware_list(self) -> Vec<MiddlewareRef>;
}

impl IntoMiddlewareList for MiddlewareRef {
    fn into_middleware_list(self) -> Vec<MiddlewareRef> {
        vec![self]
    }
}

impl IntoMiddlewareList for Vec<MiddlewareRef> {
    fn into_middleware_list(self) -> Vec<MiddlewareRef> {
        self
    }
}

impl<const N: usize> IntoMiddlewareList for [MiddlewareRef; N] {
    fn into_middleware_list(self) -> Vec<MiddlewareRef> {
        self.into()
    }
}

impl IntoMiddlewareList for &[MiddlewareRef] {
    fn into_middleware_list(self) -> Vec<MiddlewareRef> {
        self.to_vec()
    }
}
