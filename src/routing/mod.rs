//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route definitions (bootstrap)
//!     → table.rs (RouteTableBuilder: uniqueness + path checks)
//!     → Freeze as immutable RouteTable
//!
//! Requested path
//!     → table.rs (ordered scan, first match wins)
//!     → matcher.rs (evaluate one entry's condition)
//!     → Return: matched RouteEntry or explicit no-match
//! ```
//!
//! # Design Decisions
//! - Table built once at bootstrap, immutable afterwards
//! - Duplicate names or paths refuse construction (fail fast)
//! - Deterministic: same input always matches same entry
//! - First match wins (declaration order)

pub mod matcher;
pub mod table;

pub use table::{RouteEntry, RouteTable, RouteTableBuilder, TableDefect};
