// wordlist-expand: Grow target wordlists with related forms.
//
// Every valid word of a target is used as a seed; reference words that
// start with a seed are merged in. A target is rewritten only when it gained
// words.
//
// Usage:
//   wordlist-expand --reference REF TARGET...

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use wordlist_cli::{CommonArgs, fatal, init_logging, load_config, load_reference};
use wordlist_en::pipeline::Expander;

#[derive(Parser)]
#[command(name = "wordlist-expand", about = "Prefix-expand wordlists against a reference corpus")]
struct Cli {
    /// Reference corpus, one word per line
    #[arg(long)]
    reference: PathBuf,

    /// Wordlists to expand in place
    #[arg(required = true)]
    targets: Vec<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.common);
    let config = load_config(&cli.common).unwrap_or_else(|e| fatal(&e));
    let index = load_reference(&cli.reference).unwrap_or_else(|e| fatal(&e));
    let expander = Expander::new(&index, config.min_seed_len);

    let mut grown = 0;
    let mut failed = 0;
    for target in &cli.targets {
        match expander.expand_file(target) {
            Ok(outcome) if outcome.grew() => grown += 1,
            Ok(_) => {}
            Err(e) => {
                warn!("skipping: {e}");
                failed += 1;
            }
        }
    }
    info!("{grown} of {} targets expanded", cli.targets.len());

    if failed > 0 {
        fatal(&format!("{failed} of {} targets failed", cli.targets.len()));
    }
}
