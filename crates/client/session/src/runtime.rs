//! Session runtime orchestrator.
//!
//! The runtime owns the session worker and wires up the command, snapshot
//! and alert channels. [`SessionHandle`] is the cloneable façade views use.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use client_blockchain_core::{CharacterGateway, WalletAdapter};

use crate::config::SessionConfig;
use crate::handle::SessionHandle;
use crate::state::Session;
use crate::worker::SessionWorker;

/// Main runtime that drives one user session.
pub struct SessionRuntime {
    handle: SessionHandle,
    worker: SessionWorker,
}

impl SessionRuntime {
    pub fn new(
        wallet: WalletAdapter,
        gateway: Arc<dyn CharacterGateway>,
        config: SessionConfig,
    ) -> Self {
        let session = Session::new(config.network_to_check().cloned());

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());
        let (alert_tx, alert_rx) = broadcast::channel(config.alert_capacity.max(1));

        let provider = if wallet.is_available() { "detected" } else { "none" };
        tracing::info!("Session runtime ready (wallet provider: {})", provider);

        let handle = SessionHandle::new(command_tx, snapshot_rx, alert_tx.clone(), alert_rx);
        let worker =
            SessionWorker::new(session, wallet, gateway, command_rx, snapshot_tx, alert_tx);

        Self { handle, worker }
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Mount the session and process commands until shutdown or until every
    /// handle is dropped.
    pub async fn run(self) {
        drop(self.handle);
        self.worker.run().await;
    }
}
