//! Count-token resolution
//!
//! Maps the count slot of a challenge instruction to an integer, including
//! the speech-to-text homophones sponsors dictate ("to" for two, "for" for
//! four).

use crate::error::ParseError;
use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Spelled-out number words, plus the articles "a"/"an" as one.
    static ref NUMBER_WORDS: HashMap<&'static str, u32> = {
        let mut words = HashMap::new();
        for (word, num) in [
            ("a", 1),
            ("an", 1),
            ("zero", 0),
            ("one", 1),
            ("two", 2),
            ("three", 3),
            ("four", 4),
            ("five", 5),
            ("six", 6),
            ("seven", 7),
            ("eight", 8),
            ("nine", 9),
            ("ten", 10),
            ("eleven", 11),
            ("twelve", 12),
            ("thirteen", 13),
            ("fourteen", 14),
            ("fifteen", 15),
            ("sixteen", 16),
            ("seventeen", 17),
            ("eighteen", 18),
            ("nineteen", 19),
            ("twenty", 20),
        ] {
            words.insert(word, num);
        }
        words
    };
}

/// Resolve a single count token to a non-negative integer.
///
/// Resolution order: homophones first ("to"/"too" → 2, "for" → 4, common
/// transcription of spoken "two"/"four"), then digit literals, then the
/// word table. The homophone rules must win over every other reading of
/// those exact tokens.
pub fn resolve_count(token: &str) -> Result<u32, ParseError> {
    let token = token.to_lowercase();

    match token.as_str() {
        "to" | "too" => return Ok(2),
        "for" => return Ok(4),
        _ => {}
    }

    if let Ok(num) = token.parse::<u32>() {
        return Ok(num);
    }

    NUMBER_WORDS
        .get(token.as_str())
        .copied()
        .ok_or_else(|| ParseError::Number(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(resolve_count("3"), Ok(3));
        assert_eq!(resolve_count("12"), Ok(12));
        assert_eq!(resolve_count("0"), Ok(0));
    }

    #[test]
    fn test_words() {
        assert_eq!(resolve_count("five"), Ok(5));
        assert_eq!(resolve_count("twenty"), Ok(20));
        assert_eq!(resolve_count("zero"), Ok(0));
        assert_eq!(resolve_count("a"), Ok(1));
        assert_eq!(resolve_count("an"), Ok(1));
    }

    #[test]
    fn test_homophones_take_priority() {
        // "to" and "for" are mis-transcriptions of spoken "two" and "four"
        assert_eq!(resolve_count("to"), Ok(2));
        assert_eq!(resolve_count("too"), Ok(2));
        assert_eq!(resolve_count("for"), Ok(4));
        assert_eq!(resolve_count("TO"), Ok(2));
        assert_eq!(resolve_count("For"), Ok(4));
    }

    #[test]
    fn test_unresolvable() {
        assert_eq!(
            resolve_count("banana"),
            Err(ParseError::Number("banana".to_string()))
        );
        assert_eq!(
            resolve_count("-3"),
            Err(ParseError::Number("-3".to_string()))
        );
    }
}
