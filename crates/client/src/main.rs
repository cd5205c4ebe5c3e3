//! Epic Game client binary.
//!
//! Main entry point for the Epic Game client.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Backend (wallet provider + contract gateway) from `EvmConfig`
//! 2. Session runtime over the backend's wallet and gateway
//! 3. Frontend (UI) - CLI, GUI, etc.
//!
//! All components are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Against a local dev node with unlocked accounts
//! EVM_NETWORK=local cargo run -p epic-game-client
//!
//! # Against a wallet endpoint on Goerli
//! EVM_RPC_URL=http://127.0.0.1:1248 cargo run -p epic-game-client
//! ```

use anyhow::Result;

#[tokio::main]
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
    use std::sync::Arc;

    use client_blockchain_evm::EvmConfig;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_session::{SessionConfig, SessionRuntime};
    use epic_game_client::{Backend, Client};

    // 1. Load configuration from environment
    let evm_config = EvmConfig::from_env().map_err(anyhow::Error::msg)?;
    let session_config = SessionConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(std::env::var("EPIC_GAME_SESSION_ID").ok())?;

    tracing::info!("Starting Epic Game client");
    tracing::info!(
        "Network: {} (expects net_version {})",
        evm_config.network.name(),
        evm_config.expected_network()
    );

    // 3. Build Backend (independent layer)
    tracing::debug!("Detecting wallet provider...");
    let backend = Backend::connect(&evm_config).await?;

    // 4. Build Session (independent layer)
    let session_config = backend.session_config(session_config);
    let gateway = Arc::clone(&backend.gateway);
    let session = SessionRuntime::new(backend.wallet, backend.gateway, session_config);

    // 5. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config, gateway);

    // 6. Build and run
    let client = Client::builder().session(session).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
