// Character-bigram model for the word-likeness score
//
// Trained on common words only, so that the conditional bigram estimates
// capture ordinary English spelling. Scores are an average log-probability per
// transition, mapped from an empirical range onto 0-100.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::info;
use wordlist_core::score::{MAX_SCORE, round2};

use crate::frequency::{FrequencyOracle, zipf_or_zero};

/// Sentinel prepended to every word before counting.
pub const START: char = '^';

/// Sentinel appended to every word before counting.
pub const END: char = '$';

/// Tunable constants of the likeness model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikenessOptions {
    /// Minimum Zipf value for a word to be used in training.
    pub common_threshold: f64,
    /// Log-probability used for bigrams never seen in training.
    pub floor_log_prob: f64,
    /// Average log-probability that maps to a score of 0.
    pub lower_bound: f64,
    /// Average log-probability that maps to a score of 100.
    pub upper_bound: f64,
}

impl Default for LikenessOptions {
    fn default() -> Self {
        Self {
            common_threshold: 4.0,
            floor_log_prob: -15.0,
            lower_bound: -7.0,
            upper_bound: -1.5,
        }
    }
}

/// Pad a word with the start and end sentinels.
fn padded(word: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(word.len() + 2);
    chars.push(START);
    chars.extend(word.chars());
    chars.push(END);
    chars
}

/// Conditional character-bigram model: `ln P(b | a)` for every observed
/// pair, and a fixed floor for everything else.
///
/// Immutable once trained; share it by reference.
#[derive(Debug, Clone)]
pub struct BigramModel {
    log_probs: HashMap<(char, char), f64>,
    options: LikenessOptions,
    trained_words: usize,
}

impl BigramModel {
    /// An untrained model. Every word scores 0.
    pub fn untrained(options: LikenessOptions) -> Self {
        Self {
            log_probs: HashMap::new(),
            options,
            trained_words: 0,
        }
    }

    /// Train on every word whose Zipf value in `language` reaches
    /// `options.common_threshold`.
    ///
    /// Oracle failures count as unattested, so the word is left out.
    pub fn train<I, S>(
        words: I,
        oracle: &dyn FrequencyOracle,
        language: &str,
        options: LikenessOptions,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let threshold = options.common_threshold;
        let common = words
            .into_iter()
            .filter(move |word| zipf_or_zero(oracle, word.as_ref(), language) >= threshold);
        Self::train_on(common, options)
    }

    /// Train on every given word, without frequency filtering.
    pub fn train_on<I, S>(words: I, options: LikenessOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pair_counts: HashMap<(char, char), u64> = HashMap::new();
        let mut first_counts: HashMap<char, u64> = HashMap::new();
        let mut trained_words = 0;

        for word in words {
            let chars = padded(word.as_ref());
            for pair in chars.windows(2) {
                *pair_counts.entry((pair[0], pair[1])).or_insert(0) += 1;
                *first_counts.entry(pair[0]).or_insert(0) += 1;
            }
            trained_words += 1;
        }

        let log_probs = pair_counts
            .into_iter()
            .map(|(pair, count)| {
                // Every counted pair also counted its first character.
                let total = first_counts[&pair.0];
                (pair, (count as f64 / total as f64).ln())
            })
            .collect::<HashMap<_, _>>();

        info!(
            "bigram model trained on {trained_words} words, {} bigrams learned",
            log_probs.len()
        );

        Self {
            log_probs,
            options,
            trained_words,
        }
    }

    pub fn is_trained(&self) -> bool {
        !self.log_probs.is_empty()
    }

    /// Number of words the model was trained on.
    pub fn trained_words(&self) -> usize {
        self.trained_words
    }

    /// Learned `ln P(second | first)`, or `None` for an unseen pair.
    pub fn log_prob(&self, first: char, second: char) -> Option<f64> {
        self.log_probs.get(&(first, second)).copied()
    }

    /// Average log-probability per transition of the padded word, with the
    /// floor used for unseen pairs. `None` for an untrained model.
    pub fn average_log_prob(&self, word: &str) -> Option<f64> {
        if !self.is_trained() {
            return None;
        }
        let chars = padded(word);
        let windows = chars.len().saturating_sub(1);
        if windows == 0 {
            return None;
        }
        let sum: f64 = chars
            .windows(2)
            .map(|pair| {
                self.log_prob(pair[0], pair[1])
                    .unwrap_or(self.options.floor_log_prob)
            })
            .sum();
        Some(sum / windows as f64)
    }

    /// Word-likeness score in `[0, 100]`, rounded to two decimals.
    pub fn score(&self, word: &str) -> f64 {
        let Some(avg) = self.average_log_prob(word) else {
            return 0.0;
        };
        let span = self.options.upper_bound - self.options.lower_bound;
        if span <= 0.0 {
            return 0.0;
        }
        let scaled = (avg - self.options.lower_bound) / span * MAX_SCORE;
        round2(scaled.clamp(0.0, MAX_SCORE))
    }
}
