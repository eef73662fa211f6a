// wordlist-freq: Build a word -> Zipf frequency table for a wordlist.
//
// Valid words of INPUT are looked up in the frequency table, rounded to two
// decimals and kept when above --min-freq. OUTPUT is a JSON object ordered
// from most to least frequent.
//
// Usage:
//   wordlist-freq INPUT OUTPUT --frequencies FREQ [--min-freq F]

use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use wordlist_cli::{CommonArgs, fatal, init_logging, load_config, load_frequencies};
use wordlist_en::frequency::frequency_listing;
use wordlist_en::io::{open, write_frequency_table};

#[derive(Parser)]
#[command(name = "wordlist-freq", about = "Write a descending frequency table for a wordlist")]
struct Cli {
    /// Wordlist, one word per line
    input: PathBuf,

    /// Destination JSON file
    output: PathBuf,

    /// Word<TAB>zipf table, or a JSON object of word -> zipf
    #[arg(long)]
    frequencies: PathBuf,

    /// Keep only words whose Zipf value is above this
    #[arg(long, default_value_t = 0.0)]
    min_freq: f64,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);
    let config = load_config(&cli.common).unwrap_or_else(|e| fatal(&e));
    let frequencies = load_frequencies(&cli.frequencies, &config).unwrap_or_else(|e| fatal(&e));

    let reader = open(&cli.input).unwrap_or_else(|e| fatal(&e.to_string()));
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| fatal(&format!("failed to read {}: {e}", cli.input.display())));

    let listing = frequency_listing(&lines, &frequencies, &config.language, cli.min_freq);
    write_frequency_table(&cli.output, &listing).unwrap_or_else(|e| fatal(&e.to_string()));
    info!(
        "wrote {} of {} lines to {}",
        listing.len(),
        lines.len(),
        cli.output.display()
    );
}
