//! Client-side navigation core for a small single-page application.
//!
//! Maps URL paths to renderable views over hash-fragment history. The
//! route table is declared once at bootstrap, validated, frozen, and
//! handed to a [`navigator::Navigator`] that owns the active-route
//! cursor and loads deferred views on first visit.
//!
//! ```text
//! AppConfig (TOML + env)
//!     → config::validation
//!     → app::app_table (+ view capabilities) → RouteTable (immutable)
//!     → Navigator::new(HashHistory, RouteTable)
//!     → navigate(path | name | url)
//! ```

// Core subsystems
pub mod config;
pub mod navigator;
pub mod routing;
pub mod view;

// Application wiring
pub mod app;

// Cross-cutting concerns
pub mod observability;

pub use app::{app_table, bootstrap, AppViews};
pub use config::AppConfig;
pub use navigator::{ActiveRoute, HashHistory, NavigationError, Navigator};
pub use routing::{RouteEntry, RouteTable, RouteTableBuilder, TableDefect};
pub use view::{LazyView, LoadError, View, ViewHandle, ViewSource};
