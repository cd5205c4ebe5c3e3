use thiserror::Error;

/// Session handle errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The runtime stopped and no longer accepts commands.
    #[error("Session runtime is not running")]
    Closed,
}

pub type Result<T> = std::result::Result<T, SessionError>;
