use std::sync::{Arc, Mutex};

use tokio::sync::{broadcast, mpsc, watch};

use client_blockchain_core::CharacterNft;

use crate::error::{Result, SessionError};
use crate::event::{Alert, SessionEvent};
use crate::state::SessionSnapshot;
use crate::worker::Command;

/// Client-facing handle to interact with the session runtime.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
    alert_tx: broadcast::Sender<Alert>,
    /// Receiver created with the channel; handed to the first subscriber so
    /// alerts raised while mounting are not lost.
    first_alert_rx: Arc<Mutex<Option<broadcast::Receiver<Alert>>>>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        snapshot_rx: watch::Receiver<SessionSnapshot>,
        alert_tx: broadcast::Sender<Alert>,
        first_alert_rx: broadcast::Receiver<Alert>,
    ) -> Self {
        Self {
            command_tx,
            snapshot_rx,
            alert_tx,
            first_alert_rx: Arc::new(Mutex::new(Some(first_alert_rx))),
        }
    }

    /// Ask the wallet for account access
    pub async fn connect(&self) -> Result<()> {
        self.dispatch(SessionEvent::ConnectRequested).await
    }

    /// Report a character chosen (or minted) on the selection screen
    pub async fn select_character(&self, character: CharacterNft) -> Result<()> {
        self.dispatch(SessionEvent::CharacterSelected { character }).await
    }

    /// Report refreshed character stats from the arena
    pub async fn update_character(&self, character: CharacterNft) -> Result<()> {
        self.dispatch(SessionEvent::CharacterUpdated { character }).await
    }

    /// Subscribe to session snapshots
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Subscribe to alerts.
    ///
    /// The first subscriber across all clones sees every alert since the
    /// runtime was created; later subscribers see alerts raised after the call.
    pub fn subscribe_alerts(&self) -> broadcast::Receiver<Alert> {
        let first = match self.first_alert_rx.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        first.unwrap_or_else(|| self.alert_tx.subscribe())
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Stop the runtime; in-flight effect tasks are aborted
    pub async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| SessionError::Closed)
    }

    async fn dispatch(&self, event: SessionEvent) -> Result<()> {
        self.command_tx
            .send(Command::Dispatch(event))
            .await
            .map_err(|_| SessionError::Closed)
    }
}
