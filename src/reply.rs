//! Reply Formatting
//!
//! Renders parsed challenges into the assistant's confirmation messages,
//! and the fixed help reply shown whenever parsing fails.

use crate::core::parser::ParsedCommand;
use crate::core::stats;

/// Format a dollar amount the way the app displays rewards.
///
/// Whole amounts drop the decimals ("$20"); anything else gets exactly
/// two ("$7.50").
pub fn format_currency(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount as u64)
    } else {
        format!("${:.2}", amount)
    }
}

/// Build the confirmation message for a resolved challenge.
pub fn confirmation(cmd: &ParsedCommand) -> String {
    format!(
        "You got it! {} now has a challenge: {} {} for {}.",
        cmd.athlete_resolved,
        cmd.count,
        cmd.stat_canonical,
        format_currency(cmd.reward)
    )
}

/// The fixed help reply for any parse failure.
///
/// Which slot failed doesn't change the remedy, so there is one message:
/// example phrasings plus the full stat vocabulary.
pub fn help_message() -> String {
    let mut msg = String::from(
        "Sorry, I couldn't set that up. Try something like:\n\
         - \"Create a challenge for Mike Trout to get 3 RBIs for $20\"\n\
         - \"Create a challenge for Bryce Harper to get two hits for $10\"\n\
         - \"Add a challenge for Jo Park to make 4 saves to earn $8\"\n\
         Stats I understand: ",
    );
    msg.push_str(&stats::vocabulary().join(", "));
    msg
}
