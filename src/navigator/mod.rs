//! Navigation runtime.
//!
//! # Data Flow
//! ```text
//! navigate(path | name | url)
//!     → routing (ordered scan, first match wins | NoMatch)
//!     → ViewSource::resolve (deferred: load once, cached)
//!     → epoch check (stale loads discarded)
//!     → cursor swap + history push
//! ```
//!
//! # Design Decisions
//! - Explicitly constructed value, never a process-wide singleton, so
//!   tests build isolated instances
//! - Active route sits behind a lock-free swap cell
//! - History mutex is held only across pointer updates, never across
//!   an await
//! - A load that settles after a newer navigation began is discarded;
//!   the memoized view survives for the next visit

pub mod history;

pub use history::HashHistory;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arc_swap::ArcSwapOption;
use thiserror::Error;
use uuid::Uuid;

use crate::routing::{RouteEntry, RouteTable};
use crate::view::{LoadError, ViewHandle};

/// Name reported for activations of the registered fallback view.
pub const FALLBACK_ROUTE_NAME: &str = "not-found";

/// Errors surfaced by a navigation attempt.
///
/// These are user-facing outcomes; none of them should take the
/// application down.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Requested path matched no route entry.
    #[error("no route matches path `{path}`")]
    NoMatch { path: String },

    /// Requested name is not in the table.
    #[error("no route named `{name}`")]
    UnknownName { name: String },

    /// A deferred view failed to load.
    #[error("route `{name}` failed to load")]
    Load {
        name: String,
        #[source]
        source: LoadError,
    },

    /// The load settled after a newer navigation took over.
    #[error("navigation to `{path}` was superseded")]
    Superseded { path: String },
}

/// What the active-route cursor points at.
#[derive(Clone)]
pub struct ActiveRoute {
    /// Symbolic name of the activated entry.
    pub name: String,
    /// Path recorded in history for this activation.
    pub path: String,
    /// The resolved view.
    pub view: ViewHandle,
    /// Correlation id of the navigation that produced this route.
    pub navigation_id: Uuid,
}

impl fmt::Debug for ActiveRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveRoute")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("navigation_id", &self.navigation_id)
            .finish()
    }
}

/// Navigation runtime: consumes a `(history, table)` pair and owns the
/// active-route cursor.
pub struct Navigator {
    table: Arc<RouteTable>,
    history: Mutex<HashHistory>,
    current: ArcSwapOption<ActiveRoute>,
    epoch: AtomicU64,
    fallback: Option<ViewHandle>,
}

impl Navigator {
    /// Create a navigator over a frozen route table.
    pub fn new(history: HashHistory, table: Arc<RouteTable>) -> Self {
        Self {
            table,
            history: Mutex::new(history),
            current: ArcSwapOption::empty(),
            epoch: AtomicU64::new(0),
            fallback: None,
        }
    }

    /// Register a view rendered when no route matches.
    ///
    /// Without one, unmatched paths surface as
    /// [`NavigationError::NoMatch`].
    pub fn with_fallback(mut self, view: ViewHandle) -> Self {
        self.fallback = Some(view);
        self
    }

    /// The table this navigator resolves against.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Currently active route, if any navigation has completed.
    pub fn active(&self) -> Option<Arc<ActiveRoute>> {
        self.current.load_full()
    }

    /// Href of the current location per the history strategy.
    pub fn current_href(&self) -> Option<String> {
        let history = self.lock_history();
        history.current().map(|path| history.href_for(path))
    }

    /// Navigate to a route by path.
    pub async fn navigate_to_path(
        &self,
        requested: &str,
    ) -> Result<Arc<ActiveRoute>, NavigationError> {
        self.resolve_location(requested, true).await
    }

    /// Navigate to a route by symbolic name.
    pub async fn navigate_to_name(
        &self,
        name: &str,
    ) -> Result<Arc<ActiveRoute>, NavigationError> {
        let entry = self
            .table
            .by_name(name)
            .ok_or_else(|| NavigationError::UnknownName {
                name: name.to_string(),
            })?;
        self.activate(entry, entry.path(), true).await
    }

    /// Navigate from a full URL or bare fragment, e.g. what a hashchange
    /// event reports.
    pub async fn navigate_to_url(
        &self,
        location: &str,
    ) -> Result<Arc<ActiveRoute>, NavigationError> {
        let path = self.lock_history().path_of(location);
        self.resolve_location(&path, true).await
    }

    /// Step back in history and re-activate that entry.
    ///
    /// Returns `Ok(None)` when there is nothing to go back to. Views
    /// resolved earlier come from the cache; no loader is re-invoked.
    pub async fn back(&self) -> Result<Option<Arc<ActiveRoute>>, NavigationError> {
        let target = self.lock_history().back();
        match target {
            Some(path) => self.resolve_location(&path, false).await.map(Some),
            None => Ok(None),
        }
    }

    /// Step forward in history and re-activate that entry.
    pub async fn forward(&self) -> Result<Option<Arc<ActiveRoute>>, NavigationError> {
        let target = self.lock_history().forward();
        match target {
            Some(path) => self.resolve_location(&path, false).await.map(Some),
            None => Ok(None),
        }
    }

    async fn resolve_location(
        &self,
        requested: &str,
        push: bool,
    ) -> Result<Arc<ActiveRoute>, NavigationError> {
        match self.table.match_path(requested) {
            Some(entry) => self.activate(entry, requested, push).await,
            None => match self.fallback.clone() {
                Some(view) => Ok(self.activate_fallback(view, requested, push)),
                None => {
                    tracing::warn!(path = %requested, "No route matched");
                    Err(NavigationError::NoMatch {
                        path: requested.to_string(),
                    })
                }
            },
        }
    }

    async fn activate(
        &self,
        entry: &RouteEntry,
        requested: &str,
        push: bool,
    ) -> Result<Arc<ActiveRoute>, NavigationError> {
        let navigation_id = Uuid::new_v4();
        let epoch = self.begin_navigation();

        tracing::debug!(
            navigation_id = %navigation_id,
            path = %requested,
            name = entry.name(),
            "Navigation started"
        );

        let pending = !entry.component().is_ready();
        let view = match entry.component().resolve().await {
            Ok(view) => view,
            Err(source) => {
                tracing::warn!(
                    navigation_id = %navigation_id,
                    name = entry.name(),
                    error = %source,
                    "View load failed"
                );
                return Err(NavigationError::Load {
                    name: entry.name().to_string(),
                    source,
                });
            }
        };

        // A newer navigation may have started while the load was in
        // flight; its outcome owns the cursor now.
        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!(
                navigation_id = %navigation_id,
                path = entry.path(),
                "Stale load discarded"
            );
            return Err(NavigationError::Superseded {
                path: entry.path().to_string(),
            });
        }

        let active = Arc::new(ActiveRoute {
            name: entry.name().to_string(),
            path: entry.path().to_string(),
            view,
            navigation_id,
        });
        self.commit(active.clone(), push);

        tracing::info!(
            navigation_id = %navigation_id,
            path = %active.path,
            name = %active.name,
            loaded = pending,
            "Navigation completed"
        );
        Ok(active)
    }

    fn activate_fallback(
        &self,
        view: ViewHandle,
        requested: &str,
        push: bool,
    ) -> Arc<ActiveRoute> {
        let navigation_id = Uuid::new_v4();
        // Bumping the epoch here also supersedes any in-flight load.
        self.begin_navigation();

        let active = Arc::new(ActiveRoute {
            name: FALLBACK_ROUTE_NAME.to_string(),
            path: requested.to_string(),
            view,
            navigation_id,
        });
        self.commit(active.clone(), push);

        tracing::info!(
            navigation_id = %navigation_id,
            path = %requested,
            "No route matched, fallback view activated"
        );
        active
    }

    fn begin_navigation(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn commit(&self, active: Arc<ActiveRoute>, push: bool) {
        if push {
            self.lock_history().push(&active.path);
        }
        self.current.store(Some(active));
    }

    fn lock_history(&self) -> MutexGuard<'_, HashHistory> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
