//! Observability subsystem.
//!
//! # Responsibilities
//! - Initialize structured logging for the application
//! - Correlate navigation events via per-navigation ids
//!
//! # Design Decisions
//! - `tracing` events with structured fields, no bespoke log format
//! - `RUST_LOG` always wins over the configured level

pub mod logging;

pub use logging::init_logging;
