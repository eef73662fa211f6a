// In-memory Zipf frequency table

use std::io::{BufRead, Read};
use std::path::Path;

use hashbrown::HashMap;

use super::{FrequencyOracle, OracleError};
use crate::CurationError;
use crate::io::{TableError, load_table, parse_tsv};

/// A frequency oracle backed by a word -> Zipf map for one language.
///
/// Words missing from the table are unattested (0.0). Queries for any other
/// language fail with [`OracleError::UnsupportedLanguage`].
#[derive(Debug, Clone, Default)]
pub struct ZipfTable {
    language: String,
    entries: HashMap<String, f64>,
}

impl ZipfTable {
    /// Create an empty table for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a table from `(word, zipf)` pairs. Later duplicates win.
    pub fn from_entries<I, S>(language: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::new(language);
        for (word, zipf) in entries {
            table.insert(word, zipf);
        }
        table
    }

    /// Parse `word<TAB>zipf` lines. Words are lowercased.
    pub fn from_tsv<R: BufRead>(
        language: impl Into<String>,
        reader: R,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(language);
        parse_tsv(reader, |line, fields| {
            let [word, value] = fields else {
                return Err(TableError::malformed(line, "expected word<TAB>zipf"));
            };
            let zipf: f64 = value
                .parse()
                .map_err(|_| TableError::malformed(line, format!("invalid zipf value {value:?}")))?;
            table.insert(word.to_lowercase(), zipf);
            Ok(())
        })?;
        Ok(table)
    }

    /// Parse a JSON object mapping words to Zipf values.
    pub fn from_json<R: Read>(language: impl Into<String>, reader: R) -> Result<Self, TableError> {
        let entries: std::collections::HashMap<String, f64> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(
            language,
            entries.into_iter().map(|(w, z)| (w.to_lowercase(), z)),
        ))
    }

    /// Load a table from disk. Files ending in `.json` are read as a JSON
    /// object, anything else as TSV.
    pub fn from_path(language: &str, path: &Path) -> Result<Self, CurationError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        load_table(path, |reader| {
            if is_json {
                Self::from_json(language, reader)
            } else {
                Self::from_tsv(language, reader)
            }
        })
    }

    pub fn insert(&mut self, word: impl Into<String>, zipf: f64) {
        self.entries.insert(word.into(), zipf);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FrequencyOracle for ZipfTable {
    fn zipf(&self, word: &str, language: &str) -> Result<f64, OracleError> {
        if language != self.language {
            return Err(OracleError::UnsupportedLanguage {
                requested: language.to_string(),
                available: self.language.clone(),
            });
        }
        Ok(self.entries.get(word).copied().unwrap_or(0.0))
    }
}
