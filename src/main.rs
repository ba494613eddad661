//! # Presence Server
//!
//! Tracks how many visitors of the client download website are online.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - In-memory presence tracker
//! - HTTP server

use anyhow::Result;
use tracing::info;

use presence_server::config::Settings;
use presence_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    presence_server::telemetry::init_tracing(settings.logging.format);

    info!("Starting Presence Server...");
    info!(
        addr = %settings.server_addr(),
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
