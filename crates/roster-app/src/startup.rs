//! Application bootstrap.

use crate::di::{build_module, RosterModule};
use roster_config::{AppConfig, ConfigLoader};
use roster_core::telemetry::init_tracing;
use roster_core::{HasComponent, RosterResult};
use roster_repository::UserRepository;
use roster_service::UserService;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A wired application: loaded configuration plus the resolved module.
pub struct Application {
    loader: ConfigLoader,
    config: AppConfig,
    module: Arc<RosterModule>,
}

impl Application {
    /// Builds an application from an already loaded configuration.
    pub fn from_config(loader: ConfigLoader, config: AppConfig) -> Self {
        let module = build_module(&config);
        Self {
            loader,
            config,
            module,
        }
    }

    /// Configuration the module was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The loader, for runtime refresh.
    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }

    /// The dependency injection module.
    pub fn module(&self) -> Arc<RosterModule> {
        Arc::clone(&self.module)
    }

    /// Resolves the user service.
    pub fn user_service(&self) -> Arc<dyn UserService> {
        self.module.resolve()
    }

    /// Resolves the user repository.
    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.module.resolve()
    }
}

/// Loads configuration from `config_dir`, initialises tracing and wires the
/// module.
pub async fn bootstrap(config_dir: impl AsRef<Path>) -> RosterResult<Application> {
    let loader = ConfigLoader::new(config_dir)?;
    let config = loader.get().await;

    init_tracing(&config.observability)?;
    print_startup_info(&config);

    Ok(Application::from_config(loader, config))
}

/// Logs a summary of the active configuration.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Service:       {} {}", config.app.name, config.app.version);
    info!("Environment:   {}", config.app.environment);
    info!("Write checks:  {}", if config.service.verify_writes { "on" } else { "off" });
    info!("Log format:    {:?}", config.observability.log_format);
    info!("{}", separator);
}
