//! Stat Normalization
//!
//! Maps the many ways sponsors phrase a baseball/softball stat ("homers",
//! "hr", "runs batted in") onto one canonical label.

use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;

/// Ordered (pattern, canonical label) table.
///
/// Patterns are anchored to the entire phrase when compiled, so one-letter
/// abbreviations ("a", "c", "e", "w", "l", "r") can never match inside a
/// longer phrase. Table order decides priority where abbreviations overlap.
const STAT_RULES: &[(&str, &str)] = &[
    (r"hits?", "hit(s)"),
    (r"singles?|1b", "single(s)"),
    (r"doubles?|2b", "double(s)"),
    (r"triples?|3b", "triple(s)"),
    (r"home ?runs?|hrs?|homers?|dingers?", "home run(s)"),
    (r"at[ -]?bats?|abs?", "at-bat(s)"),
    (r"batting average|avg|ba", "batting average"),
    (r"on[ -]?base percentage|obp", "on-base percentage"),
    (r"slugging(?: percentage)?|slg", "slugging percentage"),
    (r"ops|on[ -]?base plus slugging", "OPS"),
    (r"runs?(?: scored)?|r", "run(s) scored"),
    (r"rbis?|runs? batted in|ribbies?", "RBI(s)"),
    (r"walks?|bbs?|bases? on balls", "walk(s)"),
    (r"strike ?outs?|ks?|punch ?outs?", "strikeout(s)"),
    (r"stolen bases?|sbs?|steals?", "stolen base(s)"),
    (r"caught stealing|cs", "caught stealing"),
    (r"put ?outs?|pos?", "putout(s)"),
    (r"assists?|a", "assist(s)"),
    (r"errors?|e", "error(s)"),
    (r"catch(?:es)?|c", "catch(es)"),
    (r"passed balls?|pbs?", "passed ball(s)"),
    (r"wild pitch(?:es)?|wps?", "wild pitch(s)"),
    (r"wins?|w", "win(s)"),
    (r"loss(?:es)?|l", "loss(es)"),
    (r"saves?|svs?", "save(s)"),
    (r"quality starts?|qs", "quality start(s)"),
    (r"era|earned run average", "ERA"),
    (r"whip", "WHIP"),
    (r"holds?|hlds?", "hold(s)"),
];

lazy_static! {
    static ref STAT_TABLE: Vec<(Regex, &'static str)> = STAT_RULES
        .iter()
        .map(|(pattern, label)| {
            let anchored = format!("^(?:{})$", pattern);
            (
                Regex::new(&anchored).expect("invalid stat pattern"),
                *label,
            )
        })
        .collect();
}

/// Resolve a raw stat phrase (lowercase, trimmed) to its canonical label.
///
/// The first rule in table order whose pattern matches the whole phrase
/// wins; substring matches never count.
pub fn canonicalize(phrase: &str) -> Result<&'static str, ParseError> {
    let phrase = phrase.trim();

    for (pattern, label) in STAT_TABLE.iter() {
        if pattern.is_match(phrase) {
            return Ok(*label);
        }
    }

    Err(ParseError::Stat(phrase.to_string()))
}

/// All canonical labels, in table order, without duplicates.
pub fn vocabulary() -> Vec<&'static str> {
    let mut labels = Vec::new();
    for (_, label) in STAT_RULES {
        if !labels.contains(label) {
            labels.push(*label);
        }
    }
    labels
}
