// Sorted, deduplicated reference corpus
//
// The reference is a plain sorted vector searched with binary search. All
// entries sharing a prefix are contiguous, so a prefix query is one
// `partition_point` plus a forward scan.

use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::ops::Range;
use std::path::Path;

use tracing::info;
use wordlist_core::word::{Rejection, canonicalize, normalize, validate};

use crate::CurationError;
use crate::io::{for_each_line, open};

/// Lines between progress messages while reading a reference.
const PROGRESS_INTERVAL: usize = 100_000;

/// Counters collected while cleaning a raw reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Lines read, including blank ones.
    pub total_lines: usize,
    /// Blank or whitespace-only lines.
    pub blank_lines: usize,
    /// Lines that normalized to a valid word (duplicates included).
    pub accepted_lines: usize,
    /// Distinct valid words.
    pub unique_words: usize,
    /// Non-blank lines rejected, by the first rule they failed.
    pub rejections: BTreeMap<Rejection, usize>,
}

impl CleanStats {
    pub fn rejected_lines(&self) -> usize {
        self.rejections.values().sum()
    }
}

/// The reference corpus: unique valid words in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    words: Vec<String>,
}

impl ReferenceIndex {
    /// Build an index from raw lines. Every item is normalized and validated;
    /// invalid items are dropped and duplicates collapse.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| canonicalize(w.as_ref()))
            .collect();
        Self::from_unsorted(words)
    }

    fn from_unsorted(mut words: Vec<String>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Build an index from a line reader, collecting cleaning statistics.
    /// Lines that are not UTF-8 count as [`Rejection::NotLowercaseAscii`].
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<(Self, CleanStats)> {
        let mut stats = CleanStats::default();
        let mut words = Vec::new();

        for_each_line(reader, |line| {
            stats.total_lines += 1;
            if stats.total_lines % PROGRESS_INTERVAL == 0 {
                info!("processed {} lines", stats.total_lines);
            }

            let Some(line) = line else {
                *stats.rejections.entry(Rejection::NotLowercaseAscii).or_insert(0) += 1;
                return;
            };
            let word = normalize(line);
            if word.is_empty() {
                stats.blank_lines += 1;
                return;
            }
            match validate(&word) {
                Ok(()) => {
                    stats.accepted_lines += 1;
                    words.push(word);
                }
                Err(reason) => *stats.rejections.entry(reason).or_insert(0) += 1,
            }
        })?;

        let index = Self::from_unsorted(words);
        stats.unique_words = index.len();
        Ok((index, stats))
    }

    /// Read and clean a reference file.
    pub fn from_path(path: &Path) -> Result<(Self, CleanStats), CurationError> {
        info!("loading reference from {}", path.display());
        let (index, stats) = Self::from_reader(open(path)?).map_err(|source| CurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "loaded {} unique valid reference words from {} lines",
            stats.unique_words, stats.total_lines
        );
        Ok((index, stats))
    }

    /// Position of the first entry that is `>= prefix`.
    pub fn lower_bound(&self, prefix: &str) -> usize {
        self.words.partition_point(|w| w.as_str() < prefix)
    }

    /// Positions of all entries starting with `prefix`.
    pub fn prefix_range(&self, prefix: &str) -> Range<usize> {
        let start = self.lower_bound(prefix);
        let len = self.words[start..]
            .iter()
            .take_while(|w| w.starts_with(prefix))
            .count();
        start..start + len
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

}
