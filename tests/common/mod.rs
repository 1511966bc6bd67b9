//! Shared view stubs for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hash_router::view::{LazyView, LoadError, View, ViewHandle};

/// A view that renders a fixed tag.
pub struct StubView(pub &'static str);

impl View for StubView {
    fn render(&self) -> String {
        format!("<{}/>", self.0)
    }
}

/// Eagerly constructed stub view.
pub fn eager(tag: &'static str) -> ViewHandle {
    Arc::new(StubView(tag))
}

/// Deferred view whose factory invocations are observable.
pub fn counting_lazy(tag: &'static str, calls: Arc<AtomicU32>) -> LazyView {
    LazyView::from_fn(move || {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubView(tag)) as ViewHandle)
        }
    })
}

/// Deferred view that fails `failures` times before succeeding.
#[allow(dead_code)]
pub fn flaky_lazy(tag: &'static str, calls: Arc<AtomicU32>, failures: u32) -> LazyView {
    LazyView::from_fn(move || {
        let calls = calls.clone();
        async move {
            if calls.fetch_add(1, Ordering::SeqCst) < failures {
                Err(LoadError::Fetch("chunk unreachable".into()))
            } else {
                Ok(Arc::new(StubView(tag)) as ViewHandle)
            }
        }
    })
}

/// Deferred view that sleeps before resolving, to keep a load in flight.
#[allow(dead_code)]
pub fn slow_lazy(tag: &'static str, calls: Arc<AtomicU32>, delay: Duration) -> LazyView {
    LazyView::from_fn(move || {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(delay).await;
            Ok(Arc::new(StubView(tag)) as ViewHandle)
        }
    })
}
