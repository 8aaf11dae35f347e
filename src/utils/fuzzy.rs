//! Fuzzy matching utilities for athlete names
//!
//! Resolves noisy, possibly mis-transcribed names against the roster of
//! connected athletes.

use strsim::levenshtein;

/// Result of a roster match with the matched name and its edit distance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub value: String,
    pub distance: usize,
}

/// Find the roster entry with the minimum edit distance to `raw`.
///
/// Comparison is case-insensitive; the returned value keeps the roster's
/// casing. Ties go to the candidate that appears first in roster order
/// (strict less-than keeps the earlier winner). Returns None for an empty
/// roster.
pub fn closest_match(raw: &str, roster: &[String]) -> Option<NameMatch> {
    let raw_lower = raw.to_lowercase();

    let mut best: Option<NameMatch> = None;
    for candidate in roster {
        let distance = levenshtein(&raw_lower, &candidate.to_lowercase());
        match best {
            Some(ref current) if distance >= current.distance => {}
            _ => {
                best = Some(NameMatch {
                    value: candidate.clone(),
                    distance,
                });
            }
        }
    }

    best
}

/// Resolve a raw name against the roster.
///
/// With an empty roster there is nothing to match against, so the raw
/// name passes through unchanged.
pub fn resolve_name(raw: &str, roster: &[String]) -> String {
    match closest_match(raw, roster) {
        Some(m) => m.value,
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_roster_passthrough() {
        assert_eq!(resolve_name("Bryce Harperr", &[]), "Bryce Harperr");
        assert_eq!(closest_match("anyone", &[]), None);
    }

    #[test]
    fn test_nearest_neighbor() {
        let roster = roster(&["Bryce Harper", "Mike Trout"]);

        // One extra letter: distance 1 to Harper, far from Trout
        let m = closest_match("Bryce Harperr", &roster).unwrap();
        assert_eq!(m.value, "Bryce Harper");
        assert_eq!(m.distance, 1);

        assert_eq!(resolve_name("Mik Trout", &roster), "Mike Trout");
    }

    #[test]
    fn test_case_insensitive() {
        let roster = roster(&["Bryce Harper"]);
        let m = closest_match("bryce harper", &roster).unwrap();
        assert_eq!(m.value, "Bryce Harper");
        assert_eq!(m.distance, 0);
    }

    #[test]
    fn test_tie_break_first_in_roster_order() {
        // "Jon" is distance 1 from both candidates; the earlier roster
        // entry wins
        let roster = roster(&["Jona", "Joni"]);
        assert_eq!(resolve_name("Jon", &roster), "Jona");

        let reversed = vec!["Joni".to_string(), "Jona".to_string()];
        assert_eq!(resolve_name("Jon", &reversed), "Joni");
    }

    #[test]
    fn test_exact_match_wins() {
        let roster = roster(&["Ana Silva", "Anna Silva"]);
        assert_eq!(resolve_name("Anna Silva", &roster), "Anna Silva");
    }
}
