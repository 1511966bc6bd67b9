//! Application route table and bootstrap wiring.
//!
//! # Responsibilities
//! - Assemble the concrete table: `/` (home), `/todo`, `/wether`
//! - Select the history strategy from configuration
//! - Hand the (history, table) pair to a fresh [`Navigator`]

use std::sync::Arc;

use crate::config::{AppConfig, HistoryMode};
use crate::navigator::{HashHistory, Navigator};
use crate::routing::{RouteEntry, RouteTable, RouteTableBuilder, TableDefect};
use crate::view::{LazyView, ViewHandle};

/// View capabilities the application supplies at bootstrap.
///
/// `home` is constructed eagerly and shown without a pending load; the
/// other two are factories invoked on first visit. `wether` keeps the
/// spelling the application shipped with.
pub struct AppViews {
    pub home: ViewHandle,
    pub todo: LazyView,
    pub wether: LazyView,
}

/// Build the application's route table.
///
/// Order is significant only for first-match-wins resolution; the
/// entries are otherwise independent.
pub fn app_table(views: AppViews) -> Result<RouteTable, Vec<TableDefect>> {
    RouteTableBuilder::new()
        .route(RouteEntry::eager("/", "home", views.home))
        .route(RouteEntry::deferred("/todo", "todo", views.todo))
        .route(RouteEntry::deferred("/wether", "wether", views.wether))
        .build()
}

/// Wire a navigator from configuration and view capabilities.
pub fn bootstrap(config: &AppConfig, views: AppViews) -> Result<Navigator, Vec<TableDefect>> {
    let table = app_table(views)?;

    let history = match config.history.mode {
        HistoryMode::Hash => HashHistory::new(config.history.base_path.as_str()),
    };

    tracing::info!(
        base_path = %history.base_path(),
        routes = table.len(),
        "Navigation configured"
    );

    Ok(Navigator::new(history, Arc::new(table)))
}
