//! Clean logs command
//!
//! Removes client session logs from the cache directory, either all of them
//! or a single session.
//!
//! Safety: Always prompts for confirmation before deletion.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::dirs;

/// Clean client logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Specific session to clean (defaults to all sessions)
    #[arg(long)]
    pub session: Option<String>,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let log_dir = dirs::log_dir();
        let targets = self.targets(&log_dir)?;

        if targets.is_empty() {
            println!("{}", style("Nothing to clean - no logs yet").dim());
            return Ok(());
        }

        // Display what will be cleaned
        println!("{}", style("🧹 Clean Epic Game Logs").yellow().bold());
        println!();
        println!("The following will be deleted:");
        for (label, path) in &targets {
            println!("  {} {}", style("→").cyan(), style(label).bold());
            println!("    {}", style(path.display()).dim());
        }
        println!();

        // Confirm deletion
        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        for (label, path) in targets {
            print!("Deleting {}... ", label);
            io::stdout().flush()?;

            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to delete: {}", path.display()))?;

            println!("{}", style("✓").green());
        }

        println!();
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }

    /// Directories to delete, labelled for display.
    fn targets(&self, log_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        if let Some(ref session_id) = self.session {
            let session_dir = log_dir.join(session_id);
            if !session_dir.exists() {
                eprintln!(
                    "{} Session not found: {}",
                    style("✗").red().bold(),
                    style(session_id).cyan()
                );
                anyhow::bail!("Session directory does not exist");
            }
            return Ok(vec![(format!("Session logs ({})", session_id), session_dir)]);
        }

        if !log_dir.exists() {
            return Ok(Vec::new());
        }

        let sessions = dirs::list_sessions(log_dir)?;
        Ok(vec![(
            format!("All logs ({} sessions)", sessions.len()),
            log_dir.to_path_buf(),
        )])
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
