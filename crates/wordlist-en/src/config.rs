// Run configuration
//
// Every field has a default, so a config file only needs to name the values
// it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::expand::MIN_SEED_LEN;
use crate::frequency::FrequencyOptions;
use crate::likeness::LikenessOptions;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Settings shared by every stage of a curation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationConfig {
    /// Language tag passed to the frequency oracle.
    pub language: String,
    /// Seeds shorter than this are not expanded.
    pub min_seed_len: usize,
    /// Re-score every target after expansion, not only the ones that grew.
    pub rescore_all: bool,
    pub likeness: LikenessOptions,
    pub frequency: FrequencyOptions,
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            min_seed_len: MIN_SEED_LEN,
            rescore_all: false,
            likeness: LikenessOptions::default(),
            frequency: FrequencyOptions::default(),
        }
    }
}

impl CurationConfig {
    /// Parse a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
