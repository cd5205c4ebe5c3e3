//! Glue code tying the session handle, contract gateway, and terminal UI
//! together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use client_blockchain_core::CharacterGateway;
use client_frontend_core::{Frontend, FrontendConfig};
use client_session::SessionHandle;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use crate::state::AppState;

/// Terminal frontend.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    gateway: Arc<dyn CharacterGateway>,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        gateway: Arc<dyn CharacterGateway>,
    ) -> Self {
        Self {
            frontend_config,
            cli_config,
            gateway,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: SessionHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let state = AppState::new(self.frontend_config.messages.build_log());

        let event_loop = EventLoop::new(
            handle,
            Arc::clone(&self.gateway),
            state,
            self.cli_config.ui.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        result.map(|_| ())
    }
}
