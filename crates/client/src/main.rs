//! Rock Paper Scissors Minus One client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. GameSession (rules, sprites, random source) via SessionBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Replay a match with a fixed seed
//! MINUS_ONE_SEED=42 cargo run -p minus-one-client
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_bootstrap::{BootstrapConfig, SessionBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use minus_one_client::Client;

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (the guard flushes the file writer on exit)
    let _log_guard = logging::setup_logging(&bootstrap_config.session_id)?;

    tracing::info!("Starting Minus One client");
    tracing::info!("Session ID: {:?}", bootstrap_config.session_id);
    tracing::info!("Asset dir: {}", bootstrap_config.asset_dir.display());

    // 3. Build the session (fails before the terminal is touched)
    let session = SessionBuilder::new(bootstrap_config)
        .build()
        .context("failed to start game session")?;

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .session(session)
        .frontend(frontend)
        .build()?;

    let session = client.run().await?;
    println!("{}", session.summary());

    tracing::info!("Client shutdown complete");
    Ok(())
}
