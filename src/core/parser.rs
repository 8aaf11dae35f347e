//! Challenge Command Parsing
//!
//! Extracts a structured challenge (athlete, count, stat, reward) from a
//! free-text instruction like "Create a challenge for Mike Trout to get
//! 3 RBIs for $20."

use crate::core::{numbers, stats};
use crate::error::ParseError;
use crate::utils::fuzzy;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// The composite challenge grammar. First structural match wins; slot
    /// normalization happens afterwards and never re-enters the regex.
    ///
    /// The name capture is non-greedy and stops at the first token run
    /// that satisfies the indirection/verb sequence, so names containing
    /// a bare "to", "get", "make", or "do" get truncated. Known grammar
    /// limitation, kept as-is and pinned by tests.
    static ref COMMAND: Regex = Regex::new(
        r"(?ix)
        (?:create|add|make|set\s?up) \s+ a \s+ (?:new\s+)? challenge \s+ for \s+
        ([^.\-–]+?) \s+                       # athlete name
        (?:to\s+have\s+them\s+ | to\s+)?      # optional indirection
        (?:get|make|do) \s+
        (\S+) \s+                             # count token
        (.+?) \s+                             # stat phrase
        (?:to\s+earn | for) \s+
        \$ (\d+(?:\.\d{1,2})?)                # reward
        ",
    )
    .expect("invalid challenge grammar");
}

/// A fully resolved challenge instruction.
///
/// Either every field resolves or the parse fails as a whole; partial
/// results are never surfaced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// Name substring exactly as captured from the input
    pub athlete_raw: String,
    /// Best roster match, or the raw name when no roster is loaded
    pub athlete_resolved: String,
    /// How many of the stat the athlete must get
    pub count: u32,
    /// Canonical stat label from the fixed vocabulary
    pub stat_canonical: &'static str,
    /// Reward in dollars, at most two fractional digits
    pub reward: f64,
}

/// Parse a challenge instruction against a roster snapshot.
///
/// Pure function: no side effects beyond tracing, and no panics. The
/// roster is read-only for the duration of the call; pass a snapshot,
/// not a live handle.
pub fn parse(text: &str, roster: &[String]) -> Result<ParsedCommand, ParseError> {
    let caps = COMMAND.captures(text).ok_or(ParseError::Grammar)?;

    let athlete_raw = caps[1].trim().to_string();
    let count_token = caps[2].to_lowercase();
    let stat_phrase = caps[3].to_lowercase();
    let reward_raw = &caps[4];

    let count = numbers::resolve_count(&count_token)?;
    let stat_canonical = stats::canonicalize(&stat_phrase)?;
    let reward: f64 = reward_raw
        .parse()
        .map_err(|_| ParseError::Reward(reward_raw.to_string()))?;

    let athlete_resolved = fuzzy::resolve_name(&athlete_raw, roster);

    debug!(
        "🎯 Parsed challenge: {} ({} {}) for ${}",
        athlete_resolved, count, stat_canonical, reward
    );

    Ok(ParsedCommand {
        athlete_raw,
        athlete_resolved,
        count,
        stat_canonical,
        reward,
    })
}
