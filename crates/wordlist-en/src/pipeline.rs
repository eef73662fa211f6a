// Per-file expansion and re-scoring
//
// An `Expander` and a `Curator` borrow the shared, read-only state of a run
// (reference index, bigram model and collaborators) and apply it to one
// target file at a time. Failures are scoped to the file that caused them.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use wordlist_core::enums::PartOfSpeech;
use wordlist_core::score::ScoreRecord;
use wordlist_core::word::{normalize, validate};

use crate::CurationError;
use crate::config::CurationConfig;
use crate::expand::{expand_set, expand_with_min_len, merge};
use crate::frequency::{FrequencyOracle, FrequencyScorer};
use crate::io::{ScoreTable, read_wordlist, score_table_path, write_score_table, write_wordlist};
use crate::lemma::Lemmatizer;
use crate::likeness::BigramModel;
use crate::reference::ReferenceIndex;

/// What expansion did to one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file gained words and was rewritten.
    Expanded { original: usize, merged: usize },
    /// Nothing new was found; the file was left as is.
    Unchanged { words: usize },
    /// The file holds no valid words.
    Empty,
}

impl FileOutcome {
    pub fn grew(&self) -> bool {
        matches!(self, FileOutcome::Expanded { .. })
    }
}

/// Totals of a [`Curator::run`].
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Files that gained words.
    pub expanded: Vec<PathBuf>,
    /// Files left untouched by expansion.
    pub unchanged: Vec<PathBuf>,
    /// Score tables written.
    pub scored: Vec<PathBuf>,
    /// Per-file failures; the run continued past each of them.
    pub failures: Vec<(PathBuf, CurationError)>,
}

/// Result of spreading one seed's expansion across target directories.
#[derive(Debug, Default)]
pub struct SeedExpansion {
    /// Reference words starting with the seed.
    pub matches: BTreeSet<String>,
    /// Files that contained the seed and gained words.
    pub updated: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, CurationError)>,
}

/// Prefix expansion of wordlist files against a shared reference.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    index: &'a ReferenceIndex,
    min_seed_len: usize,
}

impl<'a> Expander<'a> {
    pub fn new(index: &'a ReferenceIndex, min_seed_len: usize) -> Self {
        Self {
            index,
            min_seed_len,
        }
    }

    /// Expand every seed of a wordlist file and rewrite it when it grew.
    pub fn expand_file(&self, path: &Path) -> Result<FileOutcome, CurationError> {
        let seeds = read_wordlist(path)?;
        if seeds.is_empty() {
            info!("{}: no valid seed words", path.display());
            return Ok(FileOutcome::Empty);
        }
        info!("{}: {} seed words", path.display(), seeds.len());

        let expansion = expand_set(seeds, self.index, self.min_seed_len);
        if !expansion.grew() {
            info!("{}: no new words", path.display());
            return Ok(FileOutcome::Unchanged {
                words: expansion.original,
            });
        }

        write_wordlist(path, &expansion.merged)?;
        info!(
            "{}: added {} words ({} -> {})",
            path.display(),
            expansion.added(),
            expansion.original,
            expansion.merged.len()
        );
        Ok(FileOutcome::Expanded {
            original: expansion.original,
            merged: expansion.merged.len(),
        })
    }

    /// Expand a single seed and add the matches to every `.txt` file under
    /// `dirs` that already contains the seed.
    ///
    /// Files named like `skip` (usually the reference itself) are left out.
    pub fn expand_seed_across(
        &self,
        seed: &str,
        dirs: &[PathBuf],
        skip: Option<&Path>,
    ) -> Result<SeedExpansion, CurationError> {
        let seed = normalize(seed);
        validate(&seed).map_err(|reason| CurationError::InvalidSeed {
            seed: seed.clone(),
            reason,
        })?;

        let matches = expand_with_min_len(&seed, self.index, self.min_seed_len);
        let mut result = SeedExpansion {
            matches,
            ..SeedExpansion::default()
        };
        if result.matches.is_empty() {
            info!("no reference words start with {seed:?}");
            return Ok(result);
        }
        info!("{} reference words start with {seed:?}", result.matches.len());

        let skip_name = skip.and_then(Path::file_name);
        for dir in dirs {
            let files = match wordlist_files(dir) {
                Ok(files) => files,
                Err(e) => {
                    warn!("{e}");
                    result.failures.push((dir.clone(), e));
                    continue;
                }
            };
            for path in files {
                if skip_name.is_some() && path.file_name() == skip_name {
                    continue;
                }
                match self.add_matches(&path, &seed, &result.matches) {
                    Ok(true) => result.updated.push(path),
                    Ok(false) => {}
                    Err(e) => {
                        warn!("{e}");
                        result.failures.push((path, e));
                    }
                }
            }
        }
        Ok(result)
    }

    /// Merge `matches` into `path` if it lists `seed`. Returns whether the
    /// file was rewritten.
    fn add_matches(
        &self,
        path: &Path,
        seed: &str,
        matches: &BTreeSet<String>,
    ) -> Result<bool, CurationError> {
        let words = read_wordlist(path)?;
        if !words.contains(seed) {
            return Ok(false);
        }
        let expansion = merge(words, matches.clone());
        if !expansion.grew() {
            info!("{}: all matches already present", path.display());
            return Ok(false);
        }
        write_wordlist(path, &expansion.merged)?;
        info!("{}: added {} words", path.display(), expansion.added());
        Ok(true)
    }
}

/// Expansion and scoring over shared, immutable run state.
pub struct Curator<'a> {
    expander: Expander<'a>,
    model: &'a BigramModel,
    frequency: FrequencyScorer<'a>,
    rescore_all: bool,
}

impl<'a> Curator<'a> {
    pub fn new(
        index: &'a ReferenceIndex,
        model: &'a BigramModel,
        oracle: &'a dyn FrequencyOracle,
        lemmatizer: &'a dyn Lemmatizer,
        config: &CurationConfig,
    ) -> Self {
        Self {
            expander: Expander::new(index, config.min_seed_len),
            model,
            frequency: FrequencyScorer::new(
                oracle,
                lemmatizer,
                config.language.clone(),
                config.frequency.clone(),
            ),
            rescore_all: config.rescore_all,
        }
    }

    pub fn score_word(&self, word: &str, pos_hint: Option<PartOfSpeech>) -> ScoreRecord {
        ScoreRecord::new(
            self.frequency.score(word, pos_hint),
            self.model.score(word),
        )
    }

    pub fn score_words<I, S>(&self, words: I, pos_hint: Option<PartOfSpeech>) -> ScoreTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| {
                let w = w.as_ref();
                (w.to_string(), self.score_word(w, pos_hint))
            })
            .collect()
    }

    /// Score every word of `input` and write the table to `output`.
    ///
    /// The part-of-speech hint for root boosting comes from the file name.
    pub fn score_file(&self, input: &Path, output: &Path) -> Result<usize, CurationError> {
        let words = read_wordlist(input)?;
        let pos_hint = input
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(PartOfSpeech::from_file_name);
        debug!("{}: part-of-speech hint {pos_hint:?}", input.display());

        let table = self.score_words(&words, pos_hint);
        write_score_table(output, &table)?;
        info!("{}: scored {} words", output.display(), table.len());
        Ok(table.len())
    }

    // -----------------------------------------------------------------------
    // Full run
    // -----------------------------------------------------------------------

    /// Expand every target, then re-score the ones that grew (or all of them
    /// with `rescore_all`) into `output_dir`.
    pub fn run(&self, targets: &[PathBuf], output_dir: &Path) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut to_score = Vec::new();

        for path in targets {
            match self.expander.expand_file(path) {
                Ok(outcome) => {
                    if outcome.grew() {
                        summary.expanded.push(path.clone());
                        to_score.push(path.clone());
                    } else {
                        summary.unchanged.push(path.clone());
                        if self.rescore_all && outcome != FileOutcome::Empty {
                            to_score.push(path.clone());
                        }
                    }
                }
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    summary.failures.push((path.clone(), e));
                }
            }
        }

        for path in to_score {
            let output = score_table_path(&path, output_dir);
            match self.score_file(&path, &output) {
                Ok(_) => summary.scored.push(output),
                Err(e) => {
                    warn!("scoring {} failed: {e}", path.display());
                    summary.failures.push((path, e));
                }
            }
        }

        info!(
            "run finished: {} expanded, {} unchanged, {} scored, {} failed",
            summary.expanded.len(),
            summary.unchanged.len(),
            summary.scored.len(),
            summary.failures.len()
        );
        summary
    }
}

/// Every `.txt` file below `dir`, recursively, in sorted order.
pub fn wordlist_files(dir: &Path) -> Result<Vec<PathBuf>, CurationError> {
    let mut files = Vec::new();
    collect_wordlist_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_wordlist_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), CurationError> {
    let wrap = |source| CurationError::Read {
        path: dir.to_path_buf(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(wrap)? {
        let path = entry.map_err(wrap)?.path();
        if path.is_dir() {
            collect_wordlist_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    Ok(())
}
