//! The middleware chain executor.

use super::options::ProcessorOptions;
use async_trait::async_trait;
use std::sync::Arc;
use waypost_core::{
    BoxError, MiddlewareContext, MiddlewareRef, Navigation, NavigationError, NavigationGuard,
    Next, Outcome, RouteLocation,
};

/// Runs the middleware chain of the target route before each navigation.
///
/// The chain is read from `navigation.to.meta.middleware`. An empty chain
/// yields [`Outcome::Pass`]; otherwise the first middleware is invoked with a
/// [`Next`] pointing at the second, and the chain's result is normalized:
/// a redirect back to the navigation's own target becomes
/// [`Outcome::Proceed`].
#[derive(Debug, Clone, Default)]
pub struct MiddlewareProcessor {
    options: ProcessorOptions,
}

impl MiddlewareProcessor {
    /// A processor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A processor with `options`.
    pub fn with_options(options: ProcessorOptions) -> Self {
        Self { options }
    }

    /// The processor's options.
    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Run the chain for `navigation`.
    pub async fn process(&self, navigation: Navigation) -> Result<Outcome, NavigationError> {
        if !self.options.is_enabled() {
            return Ok(Outcome::Pass);
        }

        let chain: Arc<[MiddlewareRef]> = Arc::from(navigation.to.meta.middleware.as_slice());
        let Some(first) = chain.first().cloned() else {
            return Ok(Outcome::Pass);
        };

        let next = Next::new(Arc::clone(&chain), 1, navigation.clone());
        let run = first.invoke(MiddlewareContext::new(&navigation, next));

        #[cfg(feature = "tracing")]
        let result = {
            use tracing::Instrument;
            let span = tracing::debug_span!(
                "middleware_chain",
                to = %navigation.to.path,
                from = %navigation.from.path,
                len = chain.len()
            );
            run.instrument(span).await
        };
        #[cfg(not(feature = "tracing"))]
        let result = run.await;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                #[cfg(feature = "tracing")]
                {
                    tracing::warn!(to = %navigation.to.path, error = %err, "middleware failed");
                }
                return Err(NavigationError::Middleware(err));
            }
        };

        let outcome = self.normalize(outcome, &navigation.to);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(to = %navigation.to.path, ?outcome, "middleware chain finished");
        }
        Ok(outcome)
    }

    fn normalize(&self, outcome: Outcome, to: &RouteLocation) -> Outcome {
        match outcome {
            Outcome::Redirect(target)
                if self.options.self_redirect_guard() && target.targets(to) =>
            {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(to = %to.path, ?target, "redirect to current target, proceeding");
                }
                Outcome::Proceed
            }
            outcome => outcome,
        }
    }
}

#[async_trait]
impl NavigationGuard for MiddlewareProcessor {
    async fn before_navigate(&self, navigation: Navigation) -> Result<Outcome, BoxError> {
        self.process(navigation)
            .await
            .map_err(|err| Box::new(err) as BoxError)
    }
}
