//! Application configuration structures.

use roster_core::telemetry::TelemetryConfig;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Account service behaviour.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: TelemetryConfig,
}

impl AppConfig {
    /// Returns true when running with the production profile.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "roster".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Account service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Re-read every write and compare it with what was written.
    #[serde(default = "default_verify_writes")]
    pub verify_writes: bool,
}

fn default_verify_writes() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            verify_writes: default_verify_writes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::telemetry::LogFormat;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "roster");
        assert_eq!(config.app.environment, "development");
        assert!(config.service.verify_writes);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"service": {}, "observability": {"log_format": "json"}}"#,
        )
        .unwrap();
        assert!(config.service.verify_writes);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.app.name, "roster");
    }
}
