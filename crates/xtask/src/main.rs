//! Development tasks for the Epic Game project
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo run -p xtask -- <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, InspectCharacter, TailLogs};

/// Development tasks for the Epic Game project
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for Epic Game", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Monitor client logs in real-time
    TailLogs(TailLogs),

    /// Clean client logs
    Clean(Clean),

    /// Look up an account's character, the boss, and the mintable characters
    InspectCharacter(InspectCharacter),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for EVM_RPC_URL and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::TailLogs(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
        Command::InspectCharacter(cmd) => cmd.execute(),
    }
}
