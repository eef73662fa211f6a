// Part-of-speech bucketing of a reference corpus
//
// The tagger itself is an external collaborator behind `PosTagger`. Closed
// word classes (pronouns, conjunctions and prepositions) are decided here
// first because taggers handle single out-of-context words poorly for them.

use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use tracing::{debug, info};
use wordlist_core::enums::{PartOfSpeech, WordClass};

use crate::CurationError;
use crate::io::{TableError, load_table, parse_tsv, write_wordlist};

/// Words classified per progress message.
const PROGRESS_INTERVAL: usize = 10_000;

/// Closed list of English pronouns and determiners.
const PRONOUNS: &[&str] = &[
    "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "this",
    "that", "these", "those", "who", "whom", "whose", "which", "what", "anybody", "anyone",
    "anything", "each", "either", "everybody", "everyone", "everything", "neither", "nobody",
    "noone", "nothing", "one", "somebody", "someone", "something", "both", "few", "many",
    "several", "all", "any", "most", "none", "some",
];

/// Closed list of conjunctions, prepositions and articles.
const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "for", "yet", "so", "after", "although", "as", "because",
    "before", "even", "if", "lest", "once", "only", "since", "than", "though", "till",
    "unless", "until", "when", "whenever", "where", "whereas", "wherever", "whether", "while",
    "aboard", "about", "above", "across", "against", "along", "amid", "among", "anti",
    "around", "at", "behind", "below", "beneath", "beside", "besides", "between", "beyond",
    "by", "concerning", "considering", "despite", "down", "during", "except", "excepting",
    "excluding", "following", "from", "in", "inside", "into", "like", "minus", "near", "of",
    "off", "on", "onto", "opposite", "outside", "over", "past", "per", "plus", "regarding",
    "round", "save", "through", "to", "toward", "towards", "under", "underneath", "unlike",
    "up", "upon", "versus", "via", "with", "within", "without", "the", "an",
];

/// Error type for tagger backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tagger failed for {word:?}: {message}")]
pub struct TagError {
    pub word: String,
    pub message: String,
}

/// Coarse part-of-speech lookup for a single word.
///
/// An empty set means the tagger knows nothing about the word.
pub trait PosTagger {
    fn tags(&self, word: &str) -> Result<BTreeSet<PartOfSpeech>, TagError>;
}

/// Tagger backed by a lexicon of `word<TAB>tag,tag,...` lines.
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    entries: HashMap<String, BTreeSet<PartOfSpeech>>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add tags for a word, merging with any it already has.
    pub fn insert<I>(&mut self, word: impl Into<String>, tags: I)
    where
        I: IntoIterator<Item = PartOfSpeech>,
    {
        self.entries.entry(word.into()).or_default().extend(tags);
    }

    pub fn from_tsv<R: BufRead>(reader: R) -> Result<Self, TableError> {
        let mut tagger = Self::new();
        parse_tsv(reader, |line, fields| {
            let [word, tags] = fields else {
                return Err(TableError::malformed(line, "expected word<TAB>tags"));
            };
            let tags = tags
                .split(',')
                .filter(|t| !t.trim().is_empty())
                .map(|t| t.parse::<PartOfSpeech>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| TableError::malformed(line, e.to_string()))?;
            tagger.insert(word.to_lowercase(), tags);
            Ok(())
        })?;
        Ok(tagger)
    }

    pub fn from_path(path: &Path) -> Result<Self, CurationError> {
        load_table(path, Self::from_tsv)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PosTagger for LexiconTagger {
    fn tags(&self, word: &str) -> Result<BTreeSet<PartOfSpeech>, TagError> {
        Ok(self.entries.get(word).cloned().unwrap_or_default())
    }
}

/// Words grouped by class. A word may sit in several buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: BTreeMap<WordClass, BTreeSet<String>>,
}

impl Classification {
    fn add(&mut self, class: WordClass, word: &str) {
        self.buckets
            .entry(class)
            .or_default()
            .insert(word.to_string());
    }

    /// Words in `class`, sorted.
    pub fn words(&self, class: WordClass) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&class)
            .into_iter()
            .flat_map(|words| words.iter().map(String::as_str))
    }

    pub fn count(&self, class: WordClass) -> usize {
        self.buckets.get(&class).map_or(0, BTreeSet::len)
    }

    /// Write every bucket, empty ones included, to its file in `dir`.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, CurationError> {
        let mut written = Vec::with_capacity(WordClass::ALL.len());
        for class in WordClass::ALL {
            let path = dir.join(class.file_name());
            info!("writing {} words to {}", self.count(class), path.display());
            write_wordlist(&path, self.words(class))?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Sort words into class buckets.
///
/// Closed-class lists win first (pronouns before conjunctions); otherwise the
/// tagger's tags decide, and words without tags (or whose lookup failed) go
/// to [`WordClass::Uncategorized`].
pub fn classify<I, S>(words: I, tagger: &dyn PosTagger) -> Classification
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Classification::default();

    for (i, word) in words.into_iter().enumerate() {
        let word = word.as_ref();
        if (i + 1) % PROGRESS_INTERVAL == 0 {
            info!("classified {} words", i + 1);
        }

        if PRONOUNS.contains(&word) {
            result.add(WordClass::Pronouns, word);
            continue;
        }
        if CONJUNCTIONS.contains(&word) {
            result.add(WordClass::Conjunctions, word);
            continue;
        }

        let tags = tagger.tags(word).unwrap_or_else(|e| {
            debug!("{e}");
            BTreeSet::new()
        });
        if tags.is_empty() {
            result.add(WordClass::Uncategorized, word);
        }
        for pos in tags {
            result.add(WordClass::from(pos), word);
        }
    }
    result
}
