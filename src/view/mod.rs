//! Renderable view capability.
//!
//! # Responsibilities
//! - Define the opaque `View` capability routes resolve to
//! - Represent a route's component as eager or deferred (`ViewSource`)
//! - Memoize deferred resolution (resolve once, cache forever)
//!
//! # Design Decisions
//! - Views are opaque; the navigation core never inspects their output
//! - Deferred factories are explicit async values rather than an
//!   implicit module-import mechanism
//! - A successful load is cached for the process lifetime, a failed
//!   load is not, so a later navigation retries

pub mod loader;

pub use loader::{LazyView, LoadError, ViewFactory, ViewSource};

use std::sync::Arc;

/// An opaque renderable view.
///
/// Implementations are supplied by the application at bootstrap. The
/// navigation core stores them, hands them out on activation, and never
/// looks inside.
pub trait View: Send + Sync {
    /// Produce the rendered representation of this view.
    fn render(&self) -> String;
}

/// Shared handle to a renderable view.
pub type ViewHandle = Arc<dyn View>;
