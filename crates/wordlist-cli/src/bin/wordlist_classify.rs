// wordlist-classify: Split a reference corpus into part-of-speech lists.
//
// Writes nouns.txt, verbs.txt, adjectives.txt, adverbs.txt, pronouns.txt,
// conjunctions.txt and others.txt into the output directory. Tags come from
// a lexicon of `word<TAB>tag,tag` lines.
//
// Usage:
//   wordlist-classify --reference REF --lexicon LEX --output-dir DIR

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use wordlist_cli::{CommonArgs, fatal, init_logging, load_reference};
use wordlist_core::enums::WordClass;
use wordlist_en::classify::{LexiconTagger, classify};

#[derive(Parser)]
#[command(name = "wordlist-classify", about = "Bucket reference words by part of speech")]
struct Cli {
    /// Reference corpus, one word per line
    #[arg(long)]
    reference: PathBuf,

    /// Word<TAB>noun,verb,... lexicon
    #[arg(long)]
    lexicon: PathBuf,

    /// Directory for the per-class wordlists
    #[arg(long)]
    output_dir: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);
    let index = load_reference(&cli.reference).unwrap_or_else(|e| fatal(&e));
    let tagger = LexiconTagger::from_path(&cli.lexicon).unwrap_or_else(|e| fatal(&e.to_string()));
    info!("lexicon holds {} words", tagger.len());

    let classification = classify(index.iter(), &tagger);
    for class in WordClass::ALL {
        info!("{}: {} words", class.file_name(), classification.count(class));
    }
    classification
        .write_to_dir(&cli.output_dir)
        .unwrap_or_else(|e| fatal(&e.to_string()));
}
