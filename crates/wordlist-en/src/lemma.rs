// Lemmatizer trait and a table-backed implementation

use std::io::BufRead;
use std::path::Path;

use hashbrown::HashMap;
use wordlist_core::enums::PartOfSpeech;

use crate::CurationError;
use crate::io::{TableError, load_table, parse_tsv};

/// Error type for lemmatizer backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lemmatizer failed for {word:?} ({pos}): {message}")]
pub struct LemmaError {
    pub word: String,
    pub pos: PartOfSpeech,
    pub message: String,
}

/// Maps an inflected form to its dictionary form for a part of speech.
///
/// Returns the word unchanged when no root is known.
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> Result<String, LemmaError>;
}

/// Lemmatizer that knows no roots.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLemmatizer;

impl Lemmatizer for NoLemmatizer {
    fn lemmatize(&self, word: &str, _pos: PartOfSpeech) -> Result<String, LemmaError> {
        Ok(word.to_string())
    }
}

/// Lemma lookup table keyed by part of speech and inflected form.
///
/// Loaded from `pos<TAB>form<TAB>lemma` lines, e.g. `verb\tran\trun`.
#[derive(Debug, Clone, Default)]
pub struct LemmaTable {
    entries: HashMap<(PartOfSpeech, String), String>,
}

impl LemmaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pos: PartOfSpeech, form: impl Into<String>, lemma: impl Into<String>) {
        self.entries.insert((pos, form.into()), lemma.into());
    }

    pub fn from_tsv<R: BufRead>(reader: R) -> Result<Self, TableError> {
        let mut table = Self::new();
        parse_tsv(reader, |line, fields| {
            let [pos, form, lemma] = fields else {
                return Err(TableError::malformed(line, "expected pos<TAB>form<TAB>lemma"));
            };
            let pos: PartOfSpeech = pos
                .parse()
                .map_err(|e| TableError::malformed(line, format!("{e}")))?;
            table.insert(pos, form.to_lowercase(), lemma.to_lowercase());
            Ok(())
        })?;
        Ok(table)
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

impl Lemmatizer for LemmaTable {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> Result<String, LemmaError> {
        Ok(self
            .entries
            .get(&(pos, word.to_string()))
            .cloned()
            .unwrap_or_else(|| word.to_string()))
    }
}
