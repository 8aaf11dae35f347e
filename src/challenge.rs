//! Challenge records
//!
//! The record handed to the surrounding app once an instruction parses.
//! Persistence itself lives behind the app's backend and is not handled
//! here.

use crate::core::parser::ParsedCommand;
use crate::reply::format_currency;
use serde::{Deserialize, Serialize};

/// A challenge ready to be stored by the surrounding app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Short display title, e.g. "3 RBI(s) Challenge"
    pub title: String,
    /// Full requirement string, e.g. "Get 3 RBI(s)"
    pub requirement: String,
    /// Resolved athlete display name
    pub athlete: String,
    /// Reward in dollars
    pub reward: f64,
    /// Who issued the instruction
    pub creator: String,
    /// Local creation time, "YYYY-MM-DD HH:MM:SS"
    pub created_at: String,
}

impl Challenge {
    /// Build a challenge record from a parsed instruction
    pub fn from_command(cmd: &ParsedCommand, creator: &str) -> Self {
        Self {
            title: format!("{} {} Challenge", cmd.count, cmd.stat_canonical),
            requirement: format!("Get {} {}", cmd.count, cmd.stat_canonical),
            athlete: cmd.athlete_resolved.clone(),
            reward: cmd.reward,
            creator: creator.to_string(),
            created_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// One-line summary used in logs and the CLI
    pub fn summary(&self) -> String {
        format!(
            "{} — {} ({})",
            self.athlete,
            self.requirement,
            format_currency(self.reward)
        )
    }
}
