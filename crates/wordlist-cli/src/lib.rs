// wordlist-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wordlist_en::config::CurationConfig;
use wordlist_en::frequency::ZipfTable;
use wordlist_en::lemma::{LemmaTable, Lemmatizer, NoLemmatizer};
use wordlist_en::likeness::BigramModel;
use wordlist_en::reference::ReferenceIndex;

/// Environment variable consulted when `--config` is not given.
const CONFIG_ENV: &str = "WORDLIST_CONFIG";

/// Options every tool accepts.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// JSON run configuration (falls back to $WORDLIST_CONFIG, then defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// Install the fmt subscriber on stderr. `RUST_LOG` wins over `--log-level`.
pub fn init_logging(common: &CommonArgs) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&common.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Load the run configuration.
///
/// Search order:
/// 1. `--config` argument (if provided)
/// 2. `WORDLIST_CONFIG` environment variable
/// 3. Built-in defaults
pub fn load_config(common: &CommonArgs) -> Result<CurationConfig, String> {
    let path = common
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => {
            info!("loading config from {}", path.display());
            CurationConfig::from_path(&path).map_err(|e| e.to_string())
        }
        None => Ok(CurationConfig::default()),
    }
}

/// Read and clean the reference corpus.
pub fn load_reference(path: &Path) -> Result<ReferenceIndex, String> {
    let (index, stats) = ReferenceIndex::from_path(path).map_err(|e| e.to_string())?;
    if index.is_empty() {
        return Err(format!("{} holds no valid words", path.display()));
    }
    info!(
        "reference: {} lines, {} rejected",
        stats.total_lines,
        stats.rejected_lines()
    );
    Ok(index)
}

/// Load a Zipf frequency table for the configured language.
pub fn load_frequencies(path: &Path, config: &CurationConfig) -> Result<ZipfTable, String> {
    let table = ZipfTable::from_path(&config.language, path).map_err(|e| e.to_string())?;
    info!("loaded {} frequencies from {}", table.len(), path.display());
    Ok(table)
}

/// Load a lemma table, or fall back to the identity lemmatizer.
pub fn load_lemmatizer(path: Option<&Path>) -> Result<Box<dyn Lemmatizer>, String> {
    match path {
        Some(path) => {
            let table = LemmaTable::from_path(path).map_err(|e| e.to_string())?;
            info!("loaded {} lemmas from {}", table.len(), path.display());
            Ok(Box::new(table))
        }
        None => Ok(Box::new(NoLemmatizer)),
    }
}

/// Train the likeness model on the common words of the reference.
pub fn train_model(
    index: &ReferenceIndex,
    frequencies: &ZipfTable,
    config: &CurationConfig,
) -> BigramModel {
    let model = BigramModel::train(
        index.iter(),
        frequencies,
        &config.language,
        config.likeness.clone(),
    );
    if !model.is_trained() {
        warn!(
            "no reference word reaches zipf {}; likeness scores will be 0",
            config.likeness.common_threshold
        );
    }
    model
}
