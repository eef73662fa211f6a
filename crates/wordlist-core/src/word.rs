// Word normalization and the canonical-word validator

use crate::character::{has_repeated_run, is_vowel, is_word_char, longest_consonant_run};

/// Minimum length of a canonical word.
pub const MIN_WORD_LEN: usize = 2;

/// A run of this many identical characters rejects a word ("aaa", "gymmm").
pub const MAX_REPEAT_RUN: usize = 3;

/// A run of this many consonants rejects a word. English clusters top out
/// around six ("catchphrase" -> "tchphr").
pub const MAX_CONSONANT_RUN: usize = 7;

/// The validity rule a candidate string failed.
///
/// Variants are listed in the order [`validate`] checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum Rejection {
    /// Contains something other than `a`-`z` (digits, punctuation, spaces,
    /// uppercase or non-ASCII letters), or is empty.
    #[error("contains characters outside a-z")]
    NotLowercaseAscii,
    /// Shorter than [`MIN_WORD_LEN`].
    #[error("shorter than {} characters", MIN_WORD_LEN)]
    TooShort,
    /// Has no vowel (y included).
    #[error("contains no vowel")]
    NoVowel,
    /// Has [`MAX_REPEAT_RUN`] or more identical characters in a row.
    #[error("contains {} or more identical characters in a row", MAX_REPEAT_RUN)]
    RepeatedCharacter,
    /// Has [`MAX_CONSONANT_RUN`] or more consonants in a row.
    #[error("contains {} or more consonants in a row", MAX_CONSONANT_RUN)]
    ConsonantCluster,
}


/// Canonicalize a raw input line: strip surrounding whitespace and lowercase.
///
/// The result is not validated; pass it through [`is_valid`] or use
/// [`canonicalize`] to do both.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check a candidate against the five validity rules, reporting the first
/// rule that fails.
pub fn validate(word: &str) -> Result<(), Rejection> {
    if word.is_empty() || !word.chars().all(is_word_char) {
        return Err(Rejection::NotLowercaseAscii);
    }
    // All characters are ASCII past this point, so byte length is char count.
    if word.len() < MIN_WORD_LEN {
        return Err(Rejection::TooShort);
    }
    if !word.chars().any(is_vowel) {
        return Err(Rejection::NoVowel);
    }
    if has_repeated_run(word, MAX_REPEAT_RUN) {
        return Err(Rejection::RepeatedCharacter);
    }
    if longest_consonant_run(word) >= MAX_CONSONANT_RUN {
        return Err(Rejection::ConsonantCluster);
    }
    Ok(())
}

/// Check whether `word` is already a canonical word.
pub fn is_valid(word: &str) -> bool {
    validate(word).is_ok()
}

/// Normalize a raw line and return it only if the result is a valid word.
pub fn canonicalize(raw: &str) -> Option<String> {
    let word = normalize(raw);
    is_valid(&word).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Gym\t\n"), "gym");
        assert_eq!(normalize("HELLO"), "hello");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn accepts_plain_words() {
        for w in ["gym", "gymnastics", "catchphrase", "coffee", "at", "sky"] {
            assert!(is_valid(w), "{w} should be valid");
        }
    }

    #[test]
    fn y_satisfies_vowel_rule() {
        assert!(is_valid("xy"));
        assert!(is_valid("xyz"));
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(validate("don't"), Err(Rejection::NotLowercaseAscii));
        assert_eq!(validate("abc1"), Err(Rejection::NotLowercaseAscii));
        assert_eq!(validate("ice cream"), Err(Rejection::NotLowercaseAscii));
        assert_eq!(validate("Gym"), Err(Rejection::NotLowercaseAscii));
        assert_eq!(validate("caf\u{00E9}"), Err(Rejection::NotLowercaseAscii));
        assert_eq!(validate(""), Err(Rejection::NotLowercaseAscii));
    }

    #[test]
    fn rejects_single_letters() {
        assert_eq!(validate("a"), Err(Rejection::TooShort));
    }

    #[test]
    fn rejects_words_without_vowels() {
        assert_eq!(validate("hmm"), Err(Rejection::NoVowel));
        assert_eq!(validate("tsk"), Err(Rejection::NoVowel));
    }

    #[test]
    fn rejects_triple_repeats() {
        assert_eq!(validate("aaa"), Err(Rejection::RepeatedCharacter));
        assert_eq!(validate("gymmm"), Err(Rejection::RepeatedCharacter));
        assert!(is_valid("aa"));
    }

    #[test]
    fn rejects_long_consonant_runs() {
        assert_eq!(validate("bcdfghja"), Err(Rejection::ConsonantCluster));
        // Seven consonants and no vowel: the vowel rule fires first.
        assert_eq!(validate("bcdfghj"), Err(Rejection::NoVowel));
        assert!(!is_valid("bcdfghj"));
    }

    #[test]
    fn validation_is_stable_under_normalization() {
        for w in ["gym", "aaa", "xy", "bcdfghj", "energy", "a"] {
            assert_eq!(is_valid(&normalize(w)), is_valid(w));
        }
    }

    #[test]
    fn canonicalize_filters_and_normalizes() {
        assert_eq!(canonicalize("  Energy "), Some("energy".to_string()));
        assert_eq!(canonicalize("e-mail"), None);
        assert_eq!(canonicalize("   "), None);
    }

    #[test]
    fn rejection_messages_mention_limits() {
        assert_eq!(
            Rejection::ConsonantCluster.to_string(),
            "contains 7 or more consonants in a row"
        );
    }
}
