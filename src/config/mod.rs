//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (APP_BASE_PATH)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → consumed once by the bootstrap phase
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so the file is optional
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_env, load_config, ConfigError, BASE_PATH_ENV};
pub use schema::{AppConfig, HistoryConfig, HistoryMode, ObservabilityConfig};
