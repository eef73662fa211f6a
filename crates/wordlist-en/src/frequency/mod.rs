// Corpus frequency: oracle trait, Zipf table and boosted frequency score

pub mod scorer;
pub mod zipf;

pub use scorer::{FrequencyOptions, FrequencyScorer, SUFFIX_RULES, SuffixRule};
pub use zipf::ZipfTable;

use hashbrown::HashSet;
use tracing::debug;
use wordlist_core::score::round2;
use wordlist_core::word::canonicalize;

/// Error type for frequency lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    /// The oracle has no data for the requested language.
    #[error("no frequency data for language {requested:?} (loaded: {available:?})")]
    UnsupportedLanguage { requested: String, available: String },

    /// The lookup itself failed.
    #[error("frequency lookup failed for {word:?}: {message}")]
    Lookup { word: String, message: String },
}

/// Corpus frequency lookup on the Zipf scale: roughly 0 for unattested words
/// up to about 8 for the most common ones.
///
/// Implementations must be deterministic for a fixed data set.
pub trait FrequencyOracle {
    fn zipf(&self, word: &str, language: &str) -> Result<f64, OracleError>;
}

impl<T: FrequencyOracle + ?Sized> FrequencyOracle for &T {
    fn zipf(&self, word: &str, language: &str) -> Result<f64, OracleError> {
        (**self).zipf(word, language)
    }
}

/// Zipf value of `word`, with lookup failures counted as unattested.
pub fn zipf_or_zero(oracle: &dyn FrequencyOracle, word: &str, language: &str) -> f64 {
    match oracle.zipf(word, language) {
        Ok(z) => z,
        Err(e) => {
            debug!("{e}; treating {word:?} as unattested");
            0.0
        }
    }
}

/// Build a word -> Zipf listing for a wordlist.
///
/// Lines are normalized and validated, duplicates keep their first
/// occurrence, values are rounded to two decimals and only values above
/// `min_freq` are kept. The result is ordered by descending value; ties keep
/// input order.
pub fn frequency_listing<I, S>(
    lines: I,
    oracle: &dyn FrequencyOracle,
    language: &str,
    min_freq: f64,
) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for line in lines {
        let Some(word) = canonicalize(line.as_ref()) else {
            continue;
        };
        if !seen.insert(word.clone()) {
            continue;
        }
        let zipf = round2(zipf_or_zero(oracle, &word, language));
        if zipf > min_freq {
            entries.push((word, zipf));
        }
    }
    // Stable sort keeps input order among equal values.
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}
