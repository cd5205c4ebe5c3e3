//! Utility modules for EVM integration.
//!
//! ## Modules
//!
//! - [`conversion`]: Contract record normalization, hex and address helpers

pub mod conversion;

// Re-export commonly used items
pub use conversion::{lookup_from_record, to_boss, to_character, u256_to_u64};
