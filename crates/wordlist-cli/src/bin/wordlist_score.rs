// wordlist-score: Write frequency and likeness scores for wordlists.
//
// Trains the bigram likeness model on the common words of the reference,
// then writes one `{word: {"freq": f, "like": l}}` table per input into the
// output directory, named after the input's stem.
//
// Usage:
//   wordlist-score --reference REF --frequencies FREQ [--lemmas LEMMAS]
//                  --output-dir DIR INPUT...

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use wordlist_cli::{
    CommonArgs, fatal, init_logging, load_config, load_frequencies, load_lemmatizer,
    load_reference, train_model,
};
use wordlist_en::io::score_table_path;
use wordlist_en::pipeline::Curator;

#[derive(Parser)]
#[command(name = "wordlist-score", about = "Score wordlists by frequency and word-likeness")]
struct Cli {
    /// Reference corpus the likeness model is trained on
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

    /// Wordlists to score
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);
    let config = load_config(&cli.common).unwrap_or_else(|e| fatal(&e));
    let index = load_reference(&cli.reference).unwrap_or_else(|e| fatal(&e));
    let frequencies = load_frequencies(&cli.frequencies, &config).unwrap_or_else(|e| fatal(&e));
    let lemmatizer = load_lemmatizer(cli.lemmas.as_deref()).unwrap_or_else(|e| fatal(&e));
    let model = train_model(&index, &frequencies, &config);
    let curator = Curator::new(&index, &model, &frequencies, &*lemmatizer, &config);

    let mut failed = 0;
    for input in &cli.inputs {
        let output = score_table_path(input, &cli.output_dir);
        if let Err(e) = curator.score_file(input, &output) {
            warn!("{e}");
            failed += 1;
        }
    }

    if failed > 0 {
        fatal(&format!("{failed} of {} inputs failed", cli.inputs.len()));
    }
}
