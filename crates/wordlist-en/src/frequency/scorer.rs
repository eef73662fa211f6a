// Frequency score with root boosting for rare inflected forms

use serde::{Deserialize, Serialize};
use tracing::debug;
use wordlist_core::enums::PartOfSpeech;
use wordlist_core::score::{MAX_SCORE, round2};

use super::{FrequencyOracle, zipf_or_zero};
use crate::lemma::Lemmatizer;

// ---------------------------------------------------------------------------
// Suffix stripping table
// ---------------------------------------------------------------------------

/// One suffix-stripping rule: `suffix` is removed and `replacement` appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
    }
}

/// Root-finding rules, tried in order.
pub const SUFFIX_RULES: &[SuffixRule] = &[
    rule("ing", ""),  // running -> runn, playing -> play
    rule("ing", "e"), // making -> make
    rule("ed", ""),   // played -> play
    rule("ed", "e"),  // liked -> like
    rule("s", ""),    // cats -> cat
    rule("es", ""),   // boxes -> box
    rule("er", ""),   // player -> play
    rule("er", "e"),  // nicer -> nice
    rule("est", ""),  // fastest -> fast
    rule("est", "e"), // latest -> late
    rule("ly", ""),   // quickly -> quick
    rule("ment", ""), // amazement -> amaze
    rule("ness", ""), // darkness -> dark
    rule("able", ""), // readable -> read
    rule("able", "e"), // lovable -> love
];

impl SuffixRule {
    /// Apply the rule to `word`, if it carries the suffix.
    pub fn apply(&self, word: &str) -> Option<String> {
        let stem = word.strip_suffix(self.suffix)?;
        Some(format!("{stem}{}", self.replacement))
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Tunable constants of the frequency score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyOptions {
    /// Zipf value that maps to a score of 100.
    pub scale: f64,
    /// Scores above this are common enough and are never boosted.
    pub boost_ceiling: f64,
    /// Share of the root's score a boosted word receives.
    pub boost_factor: f64,
    /// Roots shorter than this are discarded ("doing" -> "do").
    pub min_root_len: usize,
    /// Score given to valid words the oracle has never seen.
    pub unattested_floor: f64,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            scale: 8.0,
            boost_ceiling: 5.0,
            boost_factor: 0.70,
            min_root_len: 3,
            unattested_floor: 0.01,
        }
    }
}

// ---------------------------------------------------------------------------
// FrequencyScorer
// ---------------------------------------------------------------------------

/// Maps words to a 0-100 popularity score.
///
/// Rare words whose root is common (for example an inflection the corpus
/// under-reports) inherit a share of the root's score. Boosting only ever
/// raises a score.
pub struct FrequencyScorer<'a> {
    oracle: &'a dyn FrequencyOracle,
    lemmatizer: &'a dyn Lemmatizer,
    language: String,
    options: FrequencyOptions,
}

impl<'a> FrequencyScorer<'a> {
    pub fn new(
        oracle: &'a dyn FrequencyOracle,
        lemmatizer: &'a dyn Lemmatizer,
        language: impl Into<String>,
        options: FrequencyOptions,
    ) -> Self {
        Self {
            oracle,
            lemmatizer,
            language: language.into(),
            options,
        }
    }

    /// Unboosted score: the Zipf value rescaled to 0-100 and rounded to two
    /// decimals. Oracle failures score 0.
    pub fn base_score(&self, word: &str) -> f64 {
        let zipf = zipf_or_zero(self.oracle, word, &self.language);
        if self.options.scale <= 0.0 {
            return 0.0;
        }
        round2((zipf / self.options.scale * 100.0).clamp(0.0, MAX_SCORE))
    }

    /// Candidate roots of `word`, deduplicated, in discovery order: the
    /// lemmatizer's answer first (when a part of speech is given), then every
    /// suffix rule that applies.
    pub fn root_candidates(&self, word: &str, pos_hint: Option<PartOfSpeech>) -> Vec<String> {
        let mut roots: Vec<String> = Vec::new();

        if let Some(pos) = pos_hint {
            match self.lemmatizer.lemmatize(word, pos) {
                Ok(lemma) if lemma != word && !lemma.is_empty() => roots.push(lemma),
                Ok(_) => {}
                Err(e) => debug!("{e}"),
            }
        }

        for rule in SUFFIX_RULES {
            if let Some(root) = rule.apply(word) {
                if root.len() >= self.options.min_root_len && !roots.contains(&root) {
                    roots.push(root);
                }
            }
        }
        roots
    }

    /// Final frequency score of `word`.
    pub fn score(&self, word: &str, pos_hint: Option<PartOfSpeech>) -> f64 {
        let base = self.base_score(word);
        if base > self.options.boost_ceiling {
            return base;
        }

        let mut best: Option<(String, f64)> = None;
        for root in self.root_candidates(word, pos_hint) {
            let root_score = self.base_score(&root);
            if best.as_ref().is_none_or(|(_, s)| root_score > *s) {
                best = Some((root, root_score));
            }
        }

        let mut score = base;
        if let Some((root, root_score)) = best {
            if root_score > base {
                let boosted = root_score * self.options.boost_factor;
                if boosted > base {
                    debug!("boosting {word:?} via root {root:?} ({root_score}) to {boosted:.2}");
                    score = round2(boosted);
                }
            }
        }

        if score == 0.0 {
            score = self.options.unattested_floor;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::{OracleError, ZipfTable};
    use crate::lemma::{LemmaError, LemmaTable, NoLemmatizer};

    fn oracle() -> ZipfTable {
        ZipfTable::from_entries(
            "en",
            [
                ("the", 7.73),
                ("play", 5.6),
                ("run", 5.8),
                ("dark", 5.0),
                ("darkness", 0.2),
                ("playing", 0.3),
                ("superword", 9.5),
            ],
        )
    }

    fn scorer<'a>(oracle: &'a ZipfTable, lemmatizer: &'a dyn Lemmatizer) -> FrequencyScorer<'a> {
        FrequencyScorer::new(oracle, lemmatizer, "en", FrequencyOptions::default())
    }

    #[test]
    fn base_score_rescales_zipf() {
        let o = oracle();
        let s = scorer(&o, &NoLemmatizer);
        assert_eq!(s.base_score("the"), 96.63);
        assert_eq!(s.base_score("superword"), 100.0);
        assert_eq!(s.base_score("missing"), 0.0);
    }

    #[test]
    fn common_words_are_not_boosted() {
        let o = oracle();
        let s = scorer(&o, &NoLemmatizer);
        assert_eq!(s.score("the", None), s.base_score("the"));
    }

    #[test]
    fn rare_inflections_inherit_root_score() {
        let o = oracle();
        let s = scorer(&o, &NoLemmatizer);
        // base 3.75, root "play" scores 70.0, boosted to 70% of that
        assert_eq!(s.base_score("playing"), 3.75);
        assert_eq!(s.score("playing", None), 49.0);
        // "darkness" -> "dark" (62.5) -> 43.75
        assert_eq!(s.score("darkness", None), 43.75);
    }

    #[test]
    fn lemmatizer_supplies_irregular_roots() {
        let o = oracle();
        let mut lemmas = LemmaTable::new();
        lemmas.insert(PartOfSpeech::Verb, "ran", "run");
        let s = scorer(&o, &lemmas);
        assert_eq!(s.score("ran", Some(PartOfSpeech::Verb)), 50.75);
        // Without the hint the lemmatizer is not consulted.
        assert_eq!(s.score("ran", None), 0.01);
    }

    #[test]
    fn short_roots_are_discarded() {
        let o = oracle();
        let s = scorer(&o, &NoLemmatizer);
        // "doing" -> "do" / "doe": only "doe" is long enough
        assert_eq!(s.root_candidates("doing", None), ["doe"]);
        assert!(s.root_candidates("is", None).is_empty());
    }

    #[test]
    fn root_candidates_follow_table_order() {
        let o = oracle();
        let s = scorer(&o, &NoLemmatizer);
        assert_eq!(
            s.root_candidates("boxes", None),
            ["boxe", "box"] // "es" -> "" comes after "s" -> ""
        );
    }

    #[test]
    fn unattested_words_get_floor() {
        let o = oracle();
        let s = scorer(&o, &NoLemmatizer);
        assert_eq!(s.score("zzyzx", None), 0.01);
    }

    #[test]
    fn boosting_never_lowers_a_score() {
        let o = oracle();
        let s = scorer(&o, &NoLemmatizer);
        for word in ["the", "playing", "darkness", "plays", "zzyzx", "runner", "dark"] {
            assert!(s.score(word, None) >= s.base_score(word), "{word}");
        }
    }

    #[test]
    fn failing_collaborators_do_not_abort() {
        struct Broken;
        impl FrequencyOracle for Broken {
            fn zipf(&self, word: &str, _language: &str) -> Result<f64, OracleError> {
                Err(OracleError::Lookup {
                    word: word.into(),
                    message: "down".into(),
                })
            }
        }
        impl Lemmatizer for Broken {
            fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> Result<String, LemmaError> {
                Err(LemmaError {
                    word: word.into(),
                    pos,
                    message: "down".into(),
                })
            }
        }

        let s = FrequencyScorer::new(&Broken, &Broken, "en", FrequencyOptions::default());
        assert_eq!(s.base_score("playing"), 0.0);
        assert_eq!(s.score("playing", Some(PartOfSpeech::Verb)), 0.01);
    }

    #[test]
    fn wrong_language_scores_as_unattested() {
        let o = oracle();
        let s = FrequencyScorer::new(&o, &NoLemmatizer, "fi", FrequencyOptions::default());
        assert_eq!(s.base_score("the"), 0.0);
    }
}
