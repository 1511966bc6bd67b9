//! Deferred view loading.
//!
//! # Responsibilities
//! - Wrap an async view factory behind a resolve-once cell
//! - Guarantee at most one successful factory invocation per process
//! - Surface load failures without caching them
//!
//! # Design Decisions
//! - Memoization is explicit (`tokio::sync::OnceCell`), not hidden in
//!   the runtime's lazy-import machinery
//! - Concurrent first resolutions serialize on the cell instead of
//!   double-invoking the factory
//! - An error leaves the cell empty; the next resolution retries

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::view::ViewHandle;

/// Error produced by a deferred view factory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying resource fetch failed (network, missing chunk).
    #[error("view fetch failed: {0}")]
    Fetch(String),

    /// The factory produced something that is not a renderable view.
    #[error("loaded resource is not a renderable view: {0}")]
    Invalid(String),
}

/// Zero-argument async factory producing a renderable view.
pub type ViewFactory =
    Arc<dyn Fn() -> BoxFuture<'static, Result<ViewHandle, LoadError>> + Send + Sync>;

/// A deferred view: the factory plus its memoization cell.
///
/// Clones share the cell, so every route handle observes the same
/// resolved instance.
#[derive(Clone)]
pub struct LazyView {
    factory: ViewFactory,
    cell: Arc<OnceCell<ViewHandle>>,
}

impl LazyView {
    /// Wrap a factory. Nothing is invoked until [`LazyView::resolve`].
    pub fn new(factory: ViewFactory) -> Self {
        Self {
            factory,
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Wrap a plain async closure as a deferred view.
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ViewHandle, LoadError>> + Send + 'static,
    {
        let f = Arc::new(f);
        Self::new(Arc::new(move || {
            let f = f.clone();
            Box::pin(async move { f().await })
        }))
    }

    /// Resolve the view, invoking the factory at most once.
    ///
    /// Re-resolving after success returns the cached instance; callers
    /// can rely on getting the same view for the process lifetime.
    pub async fn resolve(&self) -> Result<ViewHandle, LoadError> {
        let view = self.cell.get_or_try_init(|| (self.factory)()).await?;
        Ok(view.clone())
    }

    /// True once a successful resolution has been cached.
    pub fn is_resolved(&self) -> bool {
        self.cell.initialized()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("resolved", &self.cell.initialized())
            .finish()
    }
}

/// How a route obtains its view.
#[derive(Clone)]
pub enum ViewSource {
    /// View constructed at startup, always available.
    Eager(ViewHandle),

    /// View produced by a deferred factory on first activation.
    Deferred(LazyView),
}

impl ViewSource {
    /// Resolve to a concrete view.
    ///
    /// Eager sources return immediately; deferred sources go through
    /// the memoized factory.
    pub async fn resolve(&self) -> Result<ViewHandle, LoadError> {
        match self {
            ViewSource::Eager(view) => Ok(view.clone()),
            ViewSource::Deferred(lazy) => lazy.resolve().await,
        }
    }

    /// True if resolving right now would not suspend on a load.
    pub fn is_ready(&self) -> bool {
        match self {
            ViewSource::Eager(_) => true,
            ViewSource::Deferred(lazy) => lazy.is_resolved(),
        }
    }
}

impl fmt::Debug for ViewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewSource::Eager(_) => f.write_str("ViewSource::Eager"),
            ViewSource::Deferred(lazy) => write!(f, "ViewSource::Deferred({:?})", lazy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    struct Stub(&'static str);

    impl View for Stub {
        fn render(&self) -> String {
            format!("<{}/>", self.0)
        }
    }

    fn counting(calls: Arc<AtomicU32>) -> LazyView {
        LazyView::from_fn(move || {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(Stub("lazy")) as ViewHandle)
            }
        })
    }

    #[tokio::test]
    async fn test_resolve_invokes_factory_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let lazy = counting(calls.clone());
        assert!(!lazy.is_resolved());

        let first = lazy.resolve().await.unwrap();
        let second = lazy.resolve().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(lazy.is_resolved());
    }

    #[tokio::test]
    async fn test_clones_share_the_cache() {
        let calls = Arc::new(AtomicU32::new(0));
        let lazy = counting(calls.clone());
        let other = lazy.clone();

        lazy.resolve().await.unwrap();
        other.resolve().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_resolutions_load_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let slow_calls = calls.clone();
        let lazy = LazyView::from_fn(move || {
            let calls = slow_calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(Arc::new(Stub("slow")) as ViewHandle)
            }
        });

        let (a, b) = tokio::join!(lazy.resolve(), lazy.resolve());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let calls = Arc::new(AtomicU32::new(0));
        let factory_calls = calls.clone();
        let lazy = LazyView::from_fn(move || {
            let calls = factory_calls.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(LoadError::Fetch("chunk unreachable".into()))
                } else {
                    Ok(Arc::new(Stub("retried")) as ViewHandle)
                }
            }
        });

        assert!(lazy.resolve().await.is_err());
        assert!(!lazy.is_resolved());

        let view = lazy.resolve().await.unwrap();
        assert_eq!(view.render(), "<retried/>");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_eager_source_is_always_ready() {
        let source = ViewSource::Eager(Arc::new(Stub("home")) as ViewHandle);
        assert!(source.is_ready());
        assert_eq!(source.resolve().await.unwrap().render(), "<home/>");
    }
}
