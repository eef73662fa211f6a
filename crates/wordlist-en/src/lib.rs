//! English wordlist expansion and scoring engine.
//!
//! Grows seed wordlists with related forms from a large reference corpus and
//! attaches a frequency score and a word-likeness score to every entry.
//!
//! # Architecture
//!
//! - [`reference`] -- Sorted, deduplicated reference corpus with prefix search
//! - [`expand`] -- Prefix expansion of seeds against the reference
//! - [`likeness`] -- Character-bigram model for the word-likeness score
//! - [`frequency`] -- Frequency oracle trait, Zipf table and boosted scorer
//! - [`lemma`] -- Lemmatizer trait and table-backed implementation
//! - [`classify`] -- Part-of-speech bucketing of a reference (feature `classify`)
//! - [`config`] -- Run configuration and tunable scoring constants
//! - [`io`] -- Wordlist, score table and TSV file handling
//! - [`pipeline`] -- Per-file expansion and re-scoring

use std::path::PathBuf;

#[cfg(feature = "classify")]
pub mod classify;
pub mod config;
pub mod expand;
pub mod frequency;
pub mod io;
pub mod lemma;
pub mod likeness;
pub mod pipeline;
pub mod reference;

pub use wordlist_core::word::Rejection;

/// Error type for file-level curation failures.
///
/// Every variant names the file involved; per-word problems (malformed lines,
/// collaborator failures) never surface as a `CurationError`.
#[derive(Debug, thiserror::Error)]
pub enum CurationError {
    /// A source file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file could not be written or moved into place.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A score or frequency table could not be serialized.
    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A frequency, lemma or lexicon table is malformed.
    #[error("invalid table {}: {source}", .path.display())]
    Table {
        path: PathBuf,
        source: io::TableError,
    },

    /// The seed given for a single-seed expansion is not a valid word.
    #[error("{seed:?} is not a valid seed word: {reason}")]
    InvalidSeed { seed: String, reason: Rejection },
}
