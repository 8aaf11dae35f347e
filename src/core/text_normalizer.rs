//! Text Normalization
//!
//! Handles common transcription errors and text preprocessing before the
//! challenge grammar runs.

use std::collections::HashMap;

/// Normalizes dictated text to fix common recognition errors
pub struct TextNormalizer {
    /// Manual corrections from config
    corrections: HashMap<String, String>,
}

impl TextNormalizer {
    /// Create a new text normalizer
    pub fn new(corrections: HashMap<String, String>) -> Self {
        Self { corrections }
    }

    /// Normalize text before parsing.
    ///
    /// Strips apostrophes ("RBI's" becomes "RBIs"), applies manual
    /// corrections, collapses doubled spaces, and trims. Casing is left
    /// alone so the athlete-name capture keeps what the sponsor typed.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = text.replace(['\'', '\u{2019}'], "");

        for (from, to) in &self.corrections {
            result = result.replace(from.as_str(), to);
        }

        while result.contains("  ") {
            result = result.replace("  ", " ");
        }

        result.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apostrophes_stripped() {
        let normalizer = TextNormalizer::new(HashMap::new());
        assert_eq!(normalizer.normalize("3 RBI's"), "3 RBIs");
        assert_eq!(normalizer.normalize("3 RBI\u{2019}s"), "3 RBIs");
    }

    #[test]
    fn test_corrections() {
        let mut corrections = HashMap::new();
        corrections.insert("My Trout".to_string(), "Mike Trout".to_string());
        let normalizer = TextNormalizer::new(corrections);
        assert_eq!(
            normalizer.normalize("a challenge for My Trout"),
            "a challenge for Mike Trout"
        );
    }

    #[test]
    fn test_whitespace_cleanup() {
        let normalizer = TextNormalizer::new(HashMap::new());
        assert_eq!(
            normalizer.normalize("  get  3   hits  "),
            "get 3 hits"
        );
    }

    #[test]
    fn test_casing_preserved() {
        let normalizer = TextNormalizer::new(HashMap::new());
        assert_eq!(normalizer.normalize("Bryce Harper"), "Bryce Harper");
    }
}
