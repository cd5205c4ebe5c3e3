//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use client_session::SessionHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the session via [`SessionHandle`]:
/// - Observe session snapshots and alerts
/// - Submit user intents (connect, character selected)
///
/// Frontends do NOT own the session runtime - they receive a handle only.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, Screen, route};
/// use client_session::SessionHandle;
/// use anyhow::Result;
///
/// struct PrintFrontend;
///
/// #[async_trait]
/// impl Frontend for PrintFrontend {
///     async fn run(&mut self, handle: SessionHandle) -> Result<()> {
///         let mut snapshots = handle.subscribe();
///         while snapshots.changed().await.is_ok() {
///             let screen = route(&snapshots.borrow());
///             println!("{}", screen.title());
///             if screen == Screen::ConnectWallet {
///                 handle.connect().await?;
///             }
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// It should block until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: SessionHandle) -> Result<()>;
}
