//! Top-level client orchestrating the Session, Frontend, and Blockchain layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ SessionRuntime (wallet authorization and character state)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//!
//! Backend (wallet provider + contract gateway) is injected into both.
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: Composition root, lifecycle management, layer coordination
//! - **Session**: Connection state machine, effect execution, snapshot publication
//! - **Frontend**: User interaction and rendering (via SessionHandle only)
//! - **Backend**: Wallet provider detection and contract access

mod backend;
mod builder;

pub use backend::Backend;
pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_session::SessionRuntime;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives an assembled session runtime and frontend
/// 2. Client::run() starts the session in the background
/// 3. Client::run() transfers control to the frontend (blocking)
/// 4. On frontend exit, the session task is aborted together with any
///    in-flight wallet or contract calls
pub struct Client {
    session: SessionRuntime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any.
    pub async fn run(self) -> Result<()> {
        let handle = self.session.handle();

        // Start session in background
        let session = self.session;
        let session_task = tokio::spawn(session.run());

        // Run frontend (blocks until user quits)
        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        // Cleanup
        session_task.abort();
        let _ = session_task.await;

        frontend_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use async_trait::async_trait;
    use client_blockchain_core::{MockCharacterGateway, MockWalletProvider, WalletAdapter};
    use client_frontend_core::{Screen, route};
    use client_session::{SessionConfig, SessionHandle};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    /// Frontend that connects and then exits once the selection screen shows.
    struct ScriptedFrontend {
        reached_selection: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, handle: SessionHandle) -> Result<()> {
            let mut snapshots = handle.subscribe();
            snapshots.wait_for(|s| route(s) == Screen::ConnectWallet).await?;

            handle.connect().await?;
            tokio::time::timeout(
                Duration::from_secs(5),
                snapshots.wait_for(|s| route(s) == Screen::SelectCharacter),
            )
            .await
            .context("selection screen never shown")??;

            self.reached_selection.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn frontend_drives_the_session() {
        let reached_selection = Arc::new(AtomicBool::new(false));
        let provider = MockWalletProvider::default().with_handler(|method, _| match method {
            "eth_accounts" => Ok(serde_json::json!([])),
            "eth_requestAccounts" => Ok(serde_json::json!(["0xABC"])),
            _ => Ok(serde_json::Value::Null),
        });

        let session = SessionRuntime::new(
            WalletAdapter::with_provider(provider),
            Arc::new(MockCharacterGateway::new()),
            SessionConfig::default(),
        );

        let client = Client::builder()
            .session(session)
            .frontend(ScriptedFrontend {
                reached_selection: Arc::clone(&reached_selection),
            })
            .build()
            .unwrap();

        client.run().await.unwrap();
        assert!(reached_selection.load(Ordering::SeqCst));
    }
}
