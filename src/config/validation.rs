//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate base path shape and log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function over the parsed config
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Base path must be non-empty and begin with `/`.
    InvalidBasePath(String),

    /// Log level must be one of trace, debug, info, warn, error.
    InvalidLogLevel(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBasePath(path) => {
                write!(f, "base path `{}` must be non-empty and begin with `/`", path)
            }
            ValidationError::InvalidLogLevel(level) => {
                write!(f, "unknown log level `{}`", level)
            }
        }
    }
}

/// Validate semantic constraints on a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = &config.history.base_path;
    if base.is_empty() || !base.starts_with('/') {
        errors.push(ValidationError::InvalidBasePath(base.clone()));
    }

    let level = &config.observability.log_level;
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_reported() {
        let mut config = AppConfig::default();
        config.history.base_path = "app".to_string();
        config.observability.log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBasePath("app".into()),
                ValidationError::InvalidLogLevel("verbose".into()),
            ]
        );
    }

    #[test]
    fn test_empty_base_path_is_rejected() {
        let mut config = AppConfig::default();
        config.history.base_path = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidBasePath(String::new())]);
    }
}
