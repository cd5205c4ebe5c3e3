//! Session worker that owns the authoritative [`Session`].
//!
//! Receives commands from [`crate::SessionHandle`], advances the session
//! through [`reduce`], and runs the resulting effects as tasks whose
//! results come back as events.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinSet;
use tracing::{debug, error, trace, warn};

use client_blockchain_core::{CharacterGateway, WalletAdapter};

use crate::event::{Alert, SessionEffect, SessionEvent};
use crate::reducer::reduce;
use crate::state::{Session, SessionSnapshot};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Feed an event into the reducer.
    Dispatch(SessionEvent),
    /// Stop the worker and abort in-flight effects.
    Shutdown,
}

/// Background task that processes session commands.
///
/// Every effect runs inside `tasks`; dropping the worker aborts them, so no
/// late result can land after the session is gone.
pub struct SessionWorker {
    session: Session,
    wallet: WalletAdapter,
    gateway: Arc<dyn CharacterGateway>,
    command_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    alert_tx: broadcast::Sender<Alert>,
    tasks: JoinSet<SessionEvent>,
}

impl SessionWorker {
    pub(crate) fn new(
        session: Session,
        wallet: WalletAdapter,
        gateway: Arc<dyn CharacterGateway>,
        command_rx: mpsc::Receiver<Command>,
        snapshot_tx: watch::Sender<SessionSnapshot>,
        alert_tx: broadcast::Sender<Alert>,
    ) -> Self {
        Self {
            session,
            wallet,
            gateway,
            command_rx,
            snapshot_tx,
            alert_tx,
            tasks: JoinSet::new(),
        }
    }

    /// Main worker loop. Mounts the session first.
    pub async fn run(mut self) {
        self.apply(SessionEvent::Mounted);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(Command::Dispatch(event)) => self.apply(event),
                    Some(Command::Shutdown) => {
                        debug!("Session shutdown requested");
                        break;
                    }
                    None => {
                        debug!("All session handles dropped");
                        break;
                    }
                },
                Some(joined) = self.tasks.join_next() => match joined {
                    Ok(event) => self.apply(event),
                    Err(e) if e.is_cancelled() => {}
                    Err(e) => error!("Session effect task failed: {}", e),
                },
            }
        }

        if !self.tasks.is_empty() {
            debug!("Aborting {} in-flight session tasks", self.tasks.len());
        }
        self.tasks.shutdown().await;
    }

    fn apply(&mut self, event: SessionEvent) {
        trace!("Session event: {:?}", event);

        let effects = reduce(&mut self.session, event);
        self.publish();

        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn publish(&self) {
        let snapshot = self.session.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }

    fn run_effect(&mut self, effect: SessionEffect) {
        match effect {
            SessionEffect::CheckAuthorization => {
                let wallet = self.wallet.clone();
                self.tasks.spawn(async move {
                    let account = wallet.check_existing_authorization().await;
                    SessionEvent::AuthorizationChecked { account }
                });
            }
            SessionEffect::CheckNetwork => {
                let wallet = self.wallet.clone();
                self.tasks.spawn(async move {
                    let network = wallet.network_version().await;
                    SessionEvent::NetworkChecked { network }
                });
            }
            SessionEffect::RequestAuthorization => {
                let wallet = self.wallet.clone();
                self.tasks.spawn(async move {
                    match wallet.request_authorization().await {
                        Ok(account) => SessionEvent::AuthorizationGranted { account },
                        Err(error) => SessionEvent::AuthorizationFailed { error },
                    }
                });
            }
            SessionEffect::FetchCharacter { account, ticket } => {
                let gateway = self.gateway.clone();
                self.tasks.spawn(async move {
                    debug!("Looking up character for {}", account);
                    let outcome = gateway.fetch_character_for(&account).await;
                    SessionEvent::LookupResolved { ticket, outcome }
                });
                self.apply(SessionEvent::LookupStarted { ticket });
            }
            SessionEffect::ShowAlert(alert) => {
                if let Err(broadcast::error::SendError(alert)) = self.alert_tx.send(alert) {
                    warn!("Alert dropped, no subscribers: {}", alert.text);
                }
            }
        }
    }
}
