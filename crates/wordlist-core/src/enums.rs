// Shared enums: PartOfSpeech, WordClass

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag returned by a tagger and used as the
/// lemmatizer hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Conjunction,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 6] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Conjunction,
    ];

    /// Lowercase tag name, as used in lexicon and lemma tables.
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Conjunction => "conjunction",
        }
    }

    /// Guess the part of speech of a wordlist from its file name.
    ///
    /// `adverb` is checked before `verb` because every adverb file name also
    /// contains "verb".
    pub fn from_file_name(name: &str) -> Option<PartOfSpeech> {
        let name = name.to_lowercase();
        if name.contains("adverb") {
            Some(PartOfSpeech::Adverb)
        } else if name.contains("verb") {
            Some(PartOfSpeech::Verb)
        } else if name.contains("noun") {
            Some(PartOfSpeech::Noun)
        } else if name.contains("adjective") {
            Some(PartOfSpeech::Adjective)
        } else {
            None
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag string is not a known part of speech.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown part of speech: {0:?}")]
pub struct UnknownPartOfSpeech(pub String);

impl FromStr for PartOfSpeech {
    type Err = UnknownPartOfSpeech;

    /// Accepts full names and the usual short forms (`n`, `v`, `adj`, `a`,
    /// `s`, `adv`, `r`, ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" | "nouns" | "n" => Ok(PartOfSpeech::Noun),
            "verb" | "verbs" | "v" => Ok(PartOfSpeech::Verb),
            "adjective" | "adjectives" | "adj" | "a" | "s" => Ok(PartOfSpeech::Adjective),
            "adverb" | "adverbs" | "adv" | "r" => Ok(PartOfSpeech::Adverb),
            "pronoun" | "pronouns" | "pron" => Ok(PartOfSpeech::Pronoun),
            "conjunction" | "conjunctions" | "conj" => Ok(PartOfSpeech::Conjunction),
            _ => Err(UnknownPartOfSpeech(s.to_string())),
        }
    }
}

/// Output bucket of the classification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordClass {
    Nouns,
    Verbs,
    Adjectives,
    Adverbs,
    Pronouns,
    Conjunctions,
    /// Words the tagger knows nothing about.
    Uncategorized,
}

impl WordClass {
    pub const ALL: [WordClass; 7] = [
        WordClass::Nouns,
        WordClass::Verbs,
        WordClass::Adjectives,
        WordClass::Adverbs,
        WordClass::Pronouns,
        WordClass::Conjunctions,
        WordClass::Uncategorized,
    ];

    /// File name the bucket is written to.
    pub fn file_name(self) -> &'static str {
        match self {
            WordClass::Nouns => "nouns.txt",
            WordClass::Verbs => "verbs.txt",
            WordClass::Adjectives => "adjectives.txt",
            WordClass::Adverbs => "adverbs.txt",
            WordClass::Pronouns => "pronouns.txt",
            WordClass::Conjunctions => "conjunctions.txt",
            WordClass::Uncategorized => "others.txt",
        }
    }
}

impl From<PartOfSpeech> for WordClass {
    fn from(pos: PartOfSpeech) -> Self {
        match pos {
            PartOfSpeech::Noun => WordClass::Nouns,
            PartOfSpeech::Verb => WordClass::Verbs,
            PartOfSpeech::Adjective => WordClass::Adjectives,
            PartOfSpeech::Adverb => WordClass::Adverbs,
            PartOfSpeech::Pronoun => WordClass::Pronouns,
            PartOfSpeech::Conjunction => WordClass::Conjunctions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_hint_prefers_adverb_over_verb() {
        assert_eq!(
            PartOfSpeech::from_file_name("adverbs.txt"),
            Some(PartOfSpeech::Adverb)
        );
        assert_eq!(PartOfSpeech::from_file_name("verb.txt"), Some(PartOfSpeech::Verb));
        assert_eq!(PartOfSpeech::from_file_name("Nouns.txt"), Some(PartOfSpeech::Noun));
        assert_eq!(
            PartOfSpeech::from_file_name("adjectives.txt"),
            Some(PartOfSpeech::Adjective)
        );
        assert_eq!(PartOfSpeech::from_file_name("others.txt"), None);
    }

    #[test]
    fn parses_short_and_long_tags() {
        assert_eq!("n".parse(), Ok(PartOfSpeech::Noun));
        assert_eq!("Verb".parse(), Ok(PartOfSpeech::Verb));
        assert_eq!("s".parse(), Ok(PartOfSpeech::Adjective));
        assert_eq!(" adv ".parse(), Ok(PartOfSpeech::Adverb));
        assert!("interjection".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.to_string().parse(), Ok(pos));
        }
    }

    #[test]
    fn every_class_has_a_distinct_file() {
        let mut names: Vec<_> = WordClass::ALL.iter().map(|c| c.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), WordClass::ALL.len());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&PartOfSpeech::Adjective).unwrap();
        assert_eq!(json, "\"adjective\"");
    }
}
