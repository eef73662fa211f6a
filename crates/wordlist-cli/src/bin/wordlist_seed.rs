// wordlist-seed: Expand one seed word across every wordlist that has it.
//
// Finds all reference words starting with SEED, then walks the target
// directories for `.txt` wordlists. Each list that already contains SEED
// gets the matches merged in. With --output-dir the updated lists are
// re-scored as well.
//
// Usage:
//   wordlist-seed SEED --reference REF --target-dir DIR... [--frequencies FREQ]

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use wordlist_cli::{
    CommonArgs, fatal, init_logging, load_config, load_frequencies, load_lemmatizer,
    load_reference, train_model,
};
use wordlist_en::io::score_table_path;
use wordlist_en::pipeline::{Curator, Expander};

#[derive(Parser)]
#[command(name = "wordlist-seed", about = "Spread one seed word's expansion across wordlists")]
struct Cli {
    /// Word to expand
    seed: String,

    /// Reference corpus, one word per line
    #[arg(long)]
    reference: PathBuf,

    /// Directories searched recursively for `.txt` wordlists
    #[arg(long = "target-dir", required = true)]
    target_dirs: Vec<PathBuf>,

    /// Re-score updated lists into this directory (requires --frequencies)
    #[arg(long, requires = "frequencies")]
    output_dir: Option<PathBuf>,

    /// Word<TAB>zipf table, or a JSON object of word -> zipf
    #[arg(long)]
    frequencies: Option<PathBuf>,

    /// Pos<TAB>form<TAB>lemma table for root boosting
    #[arg(long)]
    lemmas: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);
    let config = load_config(&cli.common).unwrap_or_else(|e| fatal(&e));
    let index = load_reference(&cli.reference).unwrap_or_else(|e| fatal(&e));

    let result = Expander::new(&index, config.min_seed_len)
        .expand_seed_across(&cli.seed, &cli.target_dirs, Some(cli.reference.as_path()))
        .unwrap_or_else(|e| fatal(&e.to_string()));

    if result.updated.is_empty() {
        info!("no wordlist was updated");
    }
    for path in &result.updated {
        println!("{}", path.display());
    }

    if let (Some(output_dir), Some(freq_path)) = (&cli.output_dir, &cli.frequencies) {
        if !result.updated.is_empty() {
            let frequencies =
                load_frequencies(freq_path, &config).unwrap_or_else(|e| fatal(&e));
            let lemmatizer =
                load_lemmatizer(cli.lemmas.as_deref()).unwrap_or_else(|e| fatal(&e));
            let model = train_model(&index, &frequencies, &config);
            let curator = Curator::new(&index, &model, &frequencies, &*lemmatizer, &config);
            for path in &result.updated {
                let output = score_table_path(path, output_dir);
                if let Err(e) = curator.score_file(path, &output) {
                    warn!("{e}");
                }
            }
        }
    }

    if !result.failures.is_empty() {
        fatal(&format!("{} files could not be processed", result.failures.len()));
    }
}
