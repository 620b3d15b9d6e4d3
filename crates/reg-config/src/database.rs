//! libSQL database location.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Marker path for an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    ".registrar/registrar.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path of the local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    /// Reject an empty path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `path` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_into_project_dir() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".registrar/registrar.db");
        assert!(!config.is_in_memory());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn memory_marker_detected() {
        let config = DatabaseConfig {
            path: IN_MEMORY.into(),
        };
        assert!(config.is_in_memory());
    }

    #[test]
    fn blank_path_rejected() {
        let config = DatabaseConfig { path: "  ".into() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
