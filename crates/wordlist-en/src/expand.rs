// Prefix expansion of seed words against the reference corpus

use std::collections::BTreeSet;

use wordlist_core::character::has_repeated_run;
use wordlist_core::word::{MAX_REPEAT_RUN, is_valid};

use crate::reference::ReferenceIndex;

/// Seeds shorter than this are not expanded; two-letter prefixes match far
/// too much of the reference.
pub const MIN_SEED_LEN: usize = 3;

/// All reference words that start with `seed`, the seed itself included when
/// the reference has it.
///
/// Returns an empty set for invalid seeds and seeds shorter than
/// [`MIN_SEED_LEN`].
pub fn expand(seed: &str, index: &ReferenceIndex) -> BTreeSet<String> {
    expand_with_min_len(seed, index, MIN_SEED_LEN)
}

/// [`expand`] with a configurable seed length floor.
pub fn expand_with_min_len(seed: &str, index: &ReferenceIndex, min_len: usize) -> BTreeSet<String> {
    if seed.len() < min_len || !is_valid(seed) {
        return BTreeSet::new();
    }

    index.as_slice()[index.prefix_range(seed)]
        .iter()
        .filter(|candidate| !has_repeated_run(candidate, MAX_REPEAT_RUN) && is_valid(candidate))
        .cloned()
        .collect()
}

/// Union of the expansions of every seed.
pub fn expand_all<'s, I>(seeds: I, index: &ReferenceIndex, min_len: usize) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut found = BTreeSet::new();
    for seed in seeds {
        found.extend(expand_with_min_len(seed, index, min_len));
    }
    found
}

/// Result of merging expansion candidates into a seed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Size of the seed set before merging.
    pub original: usize,
    /// Seeds plus candidates.
    pub merged: BTreeSet<String>,
}

impl Expansion {
    /// Number of words the merge added.
    pub fn added(&self) -> usize {
        self.merged.len() - self.original
    }

    /// Whether the merged set is a strict superset of the seeds.
    pub fn grew(&self) -> bool {
        self.added() > 0
    }
}

/// Merge candidates into a seed set. Idempotent and order-independent.
pub fn merge(seeds: BTreeSet<String>, candidates: BTreeSet<String>) -> Expansion {
    let original = seeds.len();
    let mut merged = seeds;
    merged.extend(candidates);
    Expansion { original, merged }
}

/// Expand every seed of a set and merge the results back in.
pub fn expand_set(seeds: BTreeSet<String>, index: &ReferenceIndex, min_len: usize) -> Expansion {
    let candidates = expand_all(seeds.iter().map(String::as_str), index, min_len);
    merge(seeds, candidates)
}
