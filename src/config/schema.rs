//! Configuration schema definitions.
//!
//! This module defines the settings consumed at application bootstrap.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the navigation core.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// History strategy settings (mode, base path).
    pub history: HistoryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// URL-tracking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HistoryMode {
    /// Route state is carried after a `#` marker in the visible URL.
    /// Back/forward navigation is intercepted locally, so the app can
    /// be served from any sub-path without server rewrite rules.
    #[default]
    Hash,
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// URL-tracking strategy.
    pub mode: HistoryMode,

    /// Prefix under which hash history is rooted, supplied by the
    /// deploy environment.
    pub base_path: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::Hash,
            base_path: "/".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
