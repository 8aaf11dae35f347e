//! Chai - Conversational Challenge Creation
//!
//! Reads free-text challenge instructions and turns them into structured
//! challenge records for the SponUp app.

use anyhow::Result;
use chai::audit;
use chai::challenge::Challenge;
use chai::config::Config;
use chai::core::parser;
use chai::core::text_normalizer::TextNormalizer;
use chai::reply;
use chai::roster::Roster;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Roster file (JSON array of athlete display names)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Parse a single instruction and exit
    #[arg(short, long)]
    command: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("⚾ Chai v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let normalizer = TextNormalizer::new(config.corrections.clone());

    let roster_path = args
        .roster
        .unwrap_or_else(|| PathBuf::from(&config.roster_path));
    let roster = match Roster::load(&roster_path) {
        Ok(roster) => roster,
        Err(e) => {
            warn!("⚠️ No roster loaded ({}), names pass through unmatched", e);
            Roster::default()
        }
    };

    // One-shot mode
    if let Some(text) = args.command {
        println!("{}", handle_line(&text, &normalizer, &roster, &config));
        return Ok(());
    }

    // Main loop
    info!("✅ Chai ready - describe a challenge");
    info!("   Try: 'Create a challenge for Mike Trout to get 3 RBIs for $20'");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if matches!(text.to_lowercase().as_str(), "quit" | "exit" | "goodbye") {
            break;
        }
        println!("{}", handle_line(text, &normalizer, &roster, &config));
    }

    Ok(())
}

/// Normalize, parse, and reply to a single instruction
fn handle_line(
    text: &str,
    normalizer: &TextNormalizer,
    roster: &Roster,
    config: &Config,
) -> String {
    let normalized = normalizer.normalize(text);
    debug!("📝 Heard: '{}'", normalized);

    match parser::parse(&normalized, roster.names()) {
        Ok(cmd) => {
            let challenge = Challenge::from_command(&cmd, &config.creator_name);
            if config.audit_enabled {
                if let Err(e) = audit::log_challenge(&challenge) {
                    warn!("❌ Failed to write audit log: {}", e);
                }
            }
            info!("🏆 {}", challenge.summary());
            reply::confirmation(&cmd)
        }
        Err(e) => {
            debug!("No challenge parsed: {}", e);
            reply::help_message()
        }
    }
}
