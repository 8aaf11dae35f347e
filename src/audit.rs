//! Challenge audit trail
//!
//! Append-only log of every challenge the assistant creates, kept under
//! the user's config directory.

use crate::challenge::Challenge;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

fn log_path() -> PathBuf {
    // Respect XDG config location
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
    config_dir.join("chai").join("audit.log")
}

/// Append a created challenge to the audit log
pub fn log_challenge(challenge: &Challenge) -> Result<()> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(
        file,
        "[{}] CHALLENGE: {} | {} | reward {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        challenge.athlete,
        challenge.requirement,
        challenge.reward
    )?;
    Ok(())
}
