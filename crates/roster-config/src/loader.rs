//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Environment variable prefix for overrides (`ROSTER_SERVICE__VERIFY_WRITES`).
pub const ENV_PREFIX: &str = "ROSTER";

/// Environment variable selecting the configuration profile.
pub const ENVIRONMENT_VAR: &str = "ROSTER_ENVIRONMENT";

const DEFAULT_ENVIRONMENT: &str = "development";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `ROSTER_` prefix
    ///
    /// The environment comes from `ROSTER_ENVIRONMENT` (after `.env` is read)
    /// and defaults to `development`.
    pub fn new(config_dir: impl AsRef<Path>) -> Result<Self, RosterError> {
        load_dotenv();
        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        Self::for_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment profile.
    pub fn for_environment(
        config_dir: impl AsRef<Path>,
        environment: impl Into<String>,
    ) -> Result<Self, RosterError> {
        let config_dir = config_dir.as_ref().to_path_buf();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Returns the active environment profile.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Reloads the configuration from disk.
    ///
    /// On failure the previous configuration stays in place.
    pub async fn reload(&self) -> Result<(), RosterError> {
        let new_config = Self::load_config(&self.config_dir, &self.environment)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Gets a specific configuration value by dotted key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }

    fn load_config(config_dir: &Path, environment: &str) -> Result<AppConfig, RosterError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = config_dir.join(format!("{}.toml", name));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder
            .set_override("app.environment", environment)
            .map_err(config_error_to_roster_error)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let app_config: AppConfig = builder
            .build()
            .map_err(config_error_to_roster_error)?
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            warn!(count = errors.len(), "Configuration rejected");
            RosterError::Configuration(format_validation_errors(&errors))
        })?;

        if !app_config.service.verify_writes {
            warn!("Write verification is disabled");
        }

        Ok(app_config)
    }
}

fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file found or error loading it: {}", e);
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}
