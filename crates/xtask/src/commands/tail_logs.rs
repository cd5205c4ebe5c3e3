//! Follow a client session log, like `tail -f`, optionally filtered by level.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;
use std::time::Duration;

use crate::dirs;

/// Monitor client logs in real-time
#[derive(Parser, Debug)]
pub struct TailLogs {
    /// Session to follow (defaults to the most recent one)
    pub session: Option<String>,

    /// History lines printed before following
    #[arg(short = 'n', long, default_value = "10")]
    pub lines: usize,

    /// Hide records below this level; unlevelled lines are always shown
    #[arg(short, long, value_enum)]
    pub level: Option<LogLevel>,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "100")]
    pub poll_interval: u64,
}

/// Tracing levels as they appear in the client's log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "TRACE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl TailLogs {
    pub fn execute(self) -> Result<()> {
        let log_dir = dirs::log_dir();

        if !log_dir.exists() {
            eprintln!("{}", style("✗ No client logs yet").red().bold());
            eprintln!("  Expected under: {}", style(log_dir.display()).dim());
            eprintln!();
            eprintln!("  Start the client once to create a session log:");
            eprintln!("    {}", style("cargo run -p epic-game-client").cyan());
            anyhow::bail!("Log directory does not exist");
        }

        let (session_id, log_path) = match &self.session {
            Some(session) => (session.clone(), dirs::find_session_log(&log_dir, session)?),
            None => dirs::find_latest_log(&log_dir).context("Failed to find latest log file")?,
        };

        println!("{}", style("📝 Following Epic Game client log").green().bold());
        println!("  Session:  {}", style(&session_id).cyan());
        println!("  Log file: {}", style(log_path.display()).dim());
        if let Some(level) = self.level {
            println!("  Level:    {}", style(format!("{:?} and above", level)).yellow());
        }
        println!();

        self.follow(&log_path)
    }

    fn follow(&self, path: &Path) -> Result<()> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        for line in read_last_n_lines(&mut file, self.lines)? {
            if self.shows(&line) {
                println!("{}", line);
            }
        }

        let mut reader = BufReader::new(file);
        let poll_interval = Duration::from_millis(self.poll_interval);
        let mut line = String::new();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            if read == 0 {
                std::thread::sleep(poll_interval);
            } else if self.shows(&line) {
                print!("{}", line);
            }
        }
    }

    fn shows(&self, line: &str) -> bool {
        match (self.level, line_level(line)) {
            (Some(min), Some(level)) => level >= min,
            _ => true,
        }
    }
}

/// Level of a formatted tracing line; ANSI colouring is ignored.
fn line_level(line: &str) -> Option<LogLevel> {
    strip_ansi(line)
        .split_whitespace()
        .take(3)
        .find_map(LogLevel::from_token)
}

fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequences end with an ASCII letter, e.g. `\x1b[33m`
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Read the last N lines from a file, leaving the cursor at the end.
fn read_last_n_lines(file: &mut File, n: usize) -> Result<Vec<String>> {
    file.seek(SeekFrom::Start(0))?;

    let mut lines: Vec<String> = BufReader::new(&mut *file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("Failed to read lines from log file")?;

    file.seek(SeekFrom::End(0))?;

    let start = lines.len().saturating_sub(n);
    Ok(lines.split_off(start))
}
