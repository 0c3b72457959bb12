//! # Roster
//!
//! Loads configuration from `./config` (or the directory given as the first
//! argument), wires the module and reports the result. Exits non-zero when
//! configuration or wiring fails.

use roster_app::bootstrap;
use roster_core::RosterResult;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Tracing may not be up if configuration failed to load.
        eprintln!("Roster failed to start: {}", e);
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RosterResult<()> {
    let config_dir = std::env::args().nth(1).unwrap_or_else(|| "./config".to_string());

    let app = bootstrap(&config_dir).await?;
    let users = app.user_service().find_all_users().await?;

    info!(
        config_dir = %config_dir,
        users = users.len(),
        "Roster is ready"
    );
    Ok(())
}
