//! Terminal UI frontend for the Epic Game client.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a SessionHandle for communication
//! - Does NOT own the session runtime
//! - Routes screens from session snapshots and issues contract calls for
//!   character selection and combat through a `CharacterGateway`

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
