//! Pumps session snapshots, alerts, user input, contract jobs, and rendering
//! for the CLI client.
use std::sync::Arc;

use anyhow::Result;
use client_blockchain_core::CharacterGateway;
use client_session::{Alert, SessionHandle, SessionSnapshot};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinSet};
use tokio::time::{self, Duration};

use crate::config::UiConfig;
use crate::event::{Job, JobOutcome};
use crate::input::InputHandler;
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use crate::state::{AppState, Reaction, SessionIntent};

pub struct EventLoop {
    handle: SessionHandle,
    gateway: Arc<dyn CharacterGateway>,
    snapshots: watch::Receiver<SessionSnapshot>,
    alerts: broadcast::Receiver<Alert>,
    alerts_open: bool,
    jobs: JoinSet<JobOutcome>,
    input: InputHandler,
    state: AppState,
    ui: UiConfig,
}

impl EventLoop {
    pub fn new(
        handle: SessionHandle,
        gateway: Arc<dyn CharacterGateway>,
        state: AppState,
        ui: UiConfig,
    ) -> Self {
        let snapshots = handle.subscribe();
        let alerts = handle.subscribe_alerts();

        Self {
            handle,
            gateway,
            snapshots,
            alerts,
            alerts_open: true,
            jobs: JoinSet::new(),
            input: InputHandler::new(),
            state,
            ui,
        }
    }

    /// Run until the player quits or the session goes away.
    ///
    /// In-flight contract jobs are aborted before returning.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<AppState> {
        let initial = self.snapshots.borrow_and_update().clone();
        self.on_snapshot(initial);
        self.render(terminal)?;

        let result = self.pump(terminal).await;

        self.jobs.shutdown().await;
        result.map(|()| self.state)
    }

    async fn pump(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            tokio::select! {
                changed = self.snapshots.changed() => {
                    if changed.is_err() {
                        tracing::warn!("Session closed");
                        return Ok(());
                    }
                    let snapshot = self.snapshots.borrow_and_update().clone();
                    self.on_snapshot(snapshot);
                    self.render(terminal)?;
                }
                result = self.alerts.recv(), if self.alerts_open => {
                    self.handle_alert_channel(result);
                    self.render(terminal)?;
                }
                Some(joined) = self.jobs.join_next() => {
                    self.handle_job(joined).await?;
                    self.render(terminal)?;
                }
                _ = time::sleep(self.ui.frame_interval) => {
                    if self.handle_input_tick(terminal).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn on_snapshot(&mut self, snapshot: SessionSnapshot) {
        for job in self.state.apply_snapshot(snapshot) {
            self.spawn(job);
        }
    }

    fn spawn(&mut self, job: Job) {
        tracing::debug!("Spawning {:?}", job);
        let gateway = Arc::clone(&self.gateway);
        self.jobs.spawn(job.execute(gateway));
    }

    fn handle_alert_channel(&mut self, result: Result<Alert, RecvError>) {
        match result {
            Ok(alert) => self.state.push_alert(alert),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale alerts", skipped);
            }
            Err(RecvError::Closed) => {
                tracing::debug!("Alert stream closed");
                self.alerts_open = false;
            }
        }
    }

    async fn handle_job(&mut self, joined: Result<JobOutcome, JoinError>) -> Result<()> {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!("Contract job failed: {}", err);
                return Ok(());
            }
        };

        match self.state.on_outcome(outcome) {
            Some(SessionIntent::Select(character)) => {
                self.handle.select_character(character).await?
            }
            Some(SessionIntent::Update(character)) => {
                self.handle.update_character(character).await?
            }
            None => {}
        }
        Ok(())
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        let modal_open = self.state.current_alert().is_some();
        let action = self.input.handle_key(key, self.state.screen, modal_open);

        match self.state.on_key(action) {
            Reaction::Quit => {
                self.state.messages.push_text("Quitting...");
                self.render(terminal)?;
                return Ok(true);
            }
            Reaction::Connect => self.handle.connect().await?,
            Reaction::Spawn(job) => self.spawn(job),
            Reaction::Nothing => {}
        }

        self.render(terminal)?;
        Ok(false)
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            state: &self.state,
            ui: &self.ui,
        };
        ui::render(terminal, &ctx)
    }
}
