//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_session::SessionRuntime;

/// Builder for constructing a Client with proper validation.
///
/// # Design Principles
///
/// - **Required fields**: Session and Frontend must be provided
/// - **Fail-fast validation**: Missing required fields cause build() to fail
/// - **Fluent API**: Chainable methods for ergonomic construction
#[derive(Default)]
pub struct ClientBuilder {
    session: Option<SessionRuntime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session runtime (required).
    ///
    /// Built from a wallet adapter and a contract gateway, usually via
    /// [`crate::Backend`].
    pub fn session(mut self, session: SessionRuntime) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend handles UI rendering and user input. It receives a
    /// SessionHandle for communication with the session.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Session is not set (required)
    /// - Frontend is not set (required)
    pub fn build(self) -> Result<Client> {
        let session = self
            .session
            .context("Session is required. Use .session() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { session, frontend })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use client_blockchain_core::{MockCharacterGateway, WalletAdapter};
    use client_session::{SessionConfig, SessionHandle};
    use std::sync::Arc;

    struct NoopFrontend;

    #[async_trait]
    impl Frontend for NoopFrontend {
        async fn run(&mut self, _handle: SessionHandle) -> Result<()> {
            Ok(())
        }
    }

    fn session() -> SessionRuntime {
        SessionRuntime::new(
            WalletAdapter::without_provider(),
            Arc::new(MockCharacterGateway::new()),
            SessionConfig::default(),
        )
    }

    #[test]
    fn build_requires_session() {
        let err = ClientBuilder::new()
            .frontend(NoopFrontend)
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Session is required"));
    }

    #[test]
    fn build_requires_frontend() {
        let err = ClientBuilder::new().session(session()).build().err().unwrap();
        assert!(err.to_string().contains("Frontend is required"));
    }

    #[tokio::test]
    async fn built_client_runs_until_frontend_returns() {
        let client = ClientBuilder::new()
            .session(session())
            .frontend(NoopFrontend)
            .build()
            .unwrap();
        client.run().await.unwrap();
    }
}
