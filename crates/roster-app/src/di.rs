//! Dependency injection module using Shaku.
//!
//! `RosterModule` wires the in-memory user store into the user service.
//! Service settings are passed as component parameters at build time.

use roster_config::AppConfig;
use roster_core::module;
use roster_repository::InMemoryUserRepository;
use roster_service::{UserServiceImpl, UserServiceImplParameters};
use std::sync::Arc;
use tracing::debug;

// Single-process module: one user table, one service on top of it.
module! {
    pub RosterModule {
        components = [
            InMemoryUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the module for the given configuration.
pub fn build_module(config: &AppConfig) -> Arc<RosterModule> {
    debug!(
        verify_writes = config.service.verify_writes,
        "Building Roster module"
    );

    let module = RosterModule::builder()
        .with_component_parameters::<UserServiceImpl>(UserServiceImplParameters {
            verify_writes: config.service.verify_writes,
        })
        .build();

    Arc::new(module)
}
