// wordlist-curate: Expand wordlists and re-score the ones that grew.
//
// Runs prefix expansion over every target, then writes score tables for the
// targets that gained words (or for all of them with `rescore_all` set in
// the config). A failing target is reported and the run moves on.
//
// Usage:
//   wordlist-curate --reference REF --frequencies FREQ [--lemmas LEMMAS]
//                   --output-dir DIR TARGET...

use std::path::PathBuf;

use clap::Parser;
use wordlist_cli::{
    CommonArgs, fatal, init_logging, load_config, load_frequencies, load_lemmatizer,
    load_reference, train_model,
};
use wordlist_en::pipeline::Curator;

#[derive(Parser)]
#[command(name = "wordlist-curate", about = "Expand wordlists and refresh their score tables")]
struct Cli {
    /// Reference corpus, one word per line
    #[arg(long)]
    reference: PathBuf,

    /// Word<TAB>zipf table, or a JSON object of word -> zipf
    #[arg(long)]
    frequencies: PathBuf,

    /// Pos<TAB>form<TAB>lemma table for root boosting
    #[arg(long)]
    lemmas: Option<PathBuf>,

    /// Directory for the score tables
    #[arg(long)]
    output_dir: PathBuf,

    /// Re-score every target, not only the ones that grew
    #[arg(long)]
    rescore_all: bool,

    /// Wordlists to curate in place
    #[arg(required = true)]
    targets: Vec<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);
    let mut config = load_config(&cli.common).unwrap_or_else(|e| fatal(&e));
    config.rescore_all |= cli.rescore_all;

    let index = load_reference(&cli.reference).unwrap_or_else(|e| fatal(&e));
    let frequencies = load_frequencies(&cli.frequencies, &config).unwrap_or_else(|e| fatal(&e));
    let lemmatizer = load_lemmatizer(cli.lemmas.as_deref()).unwrap_or_else(|e| fatal(&e));
    let model = train_model(&index, &frequencies, &config);

    let curator = Curator::new(&index, &model, &frequencies, &*lemmatizer, &config);
    let summary = curator.run(&cli.targets, &cli.output_dir);

    for (path, e) in &summary.failures {
        eprintln!("failed: {}: {e}", path.display());
    }
    if !summary.failures.is_empty() {
        std::process::exit(1);
    }
}
