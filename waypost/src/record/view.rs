//! Opaque view payloads.

use futures::future::BoxFuture;
use std::{any::Any, fmt, sync::Arc};

type ViewLoader = dyn Fn() -> BoxFuture<'static, View> + Send + Sync;

/// A UI view attached to a route.
///
/// Waypost never looks inside a view; it only carries it from the route
/// declaration to the compiled record. A view is either a ready value or a
/// loader that produces one on demand.
#[derive(Clone)]
pub enum View {
    /// A ready value.
    Eager {
        /// Type name of the value, for diagnostics.
        type_name: &'static str,
        /// The value itself.
        value: Arc<dyn Any + Send + Sync>,
    },
    /// A view loaded asynchronously the first time it is needed.
    Lazy(Arc<ViewLoader>),
}

impl View {
    /// Wrap a ready value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::Eager {
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
        }
    }

    /// Wrap an asynchronous loader.
    pub fn lazy<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = View> + Send + 'static,
    {
        Self::Lazy(Arc::new(move || -> BoxFuture<'static, View> {
            Box::pin(loader())
        }))
    }

    /// Whether the view still has to be loaded.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Borrow the value as `T`, if this is a ready view of that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Eager { value, .. } => value.downcast_ref(),
            Self::Lazy(_) => None,
        }
    }

    /// Produce a ready view, running the loader if needed.
    ///
    /// Loaders returning another lazy view are followed until a ready one
    /// comes back.
    pub async fn resolve(&self) -> View {
        let mut view = self.clone();
        while let Self::Lazy(loader) = view {
            view = loader().await;
        }
        view
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eager { type_name, .. } => f.debug_tuple("View").field(type_name).finish(),
            Self::Lazy(_) => f.write_str("View(<lazy>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct UsersPage;

    #[test]
    fn test_eager_view_downcasts() {
        let view = View::new(UsersPage);
        assert_eq!(view.downcast_ref::<UsersPage>(), Some(&UsersPage));
        assert!(view.downcast_ref::<String>().is_none());
        assert!(format!("{view:?}").contains("UsersPage"));
    }

    #[tokio::test]
    async fn test_lazy_view_resolves() {
        let view = View::lazy(|| async { View::new(UsersPage) });
        assert!(view.is_lazy());
        assert!(view.downcast_ref::<UsersPage>().is_none());

        let ready = view.resolve().await;
        assert_eq!(ready.downcast_ref::<UsersPage>(), Some(&UsersPage));
    }
}
