//! Core error types for EVM integration.

pub mod error;

// Re-export commonly used items
pub use error::{EvmError, Result};
