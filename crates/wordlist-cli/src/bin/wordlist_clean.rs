// wordlist-clean: Clean a raw reference word list.
//
// Reads one word per line, lowercases and trims every line, drops lines
// that are not valid words, removes duplicates and writes the result sorted.
//
// Usage:
//   wordlist-clean INPUT OUTPUT

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use wordlist_cli::{CommonArgs, fatal, init_logging};
use wordlist_en::io::write_wordlist;
use wordlist_en::reference::ReferenceIndex;

#[derive(Parser)]
#[command(name = "wordlist-clean", about = "Clean and deduplicate a raw reference word list")]
struct Cli {
    /// Raw word list, one word per line
    input: PathBuf,

    /// Destination for the cleaned list
    output: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);

    let (index, stats) =
        ReferenceIndex::from_path(&cli.input).unwrap_or_else(|e| fatal(&e.to_string()));

    for (reason, count) in &stats.rejections {
        info!("rejected {count} lines: {reason}");
    }
    info!(
        "{} lines read, {} blank, {} valid, {} unique",
        stats.total_lines, stats.blank_lines, stats.accepted_lines, stats.unique_words
    );

    write_wordlist(&cli.output, index.iter()).unwrap_or_else(|e| fatal(&e.to_string()));
    info!("wrote {} words to {}", index.len(), cli.output.display());
}
