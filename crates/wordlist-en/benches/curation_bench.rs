// Criterion benchmarks for wordlist-en.
//
// Uses a synthetic corpus so no data files are needed. The corpus is built
// from a fixed syllable inventory, which gives realistic shared prefixes for
// expansion and a spread of bigrams for the likeness model.
//
// Run:
//   cargo bench -p wordlist-en

use std::collections::BTreeSet;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wordlist_en::expand::{MIN_SEED_LEN, expand_set};
use wordlist_en::frequency::{FrequencyOptions, FrequencyScorer, ZipfTable};
use wordlist_en::lemma::NoLemmatizer;
use wordlist_en::likeness::{BigramModel, LikenessOptions};
use wordlist_en::reference::ReferenceIndex;

// ---------------------------------------------------------------------------
// Synthetic corpus
// ---------------------------------------------------------------------------

const SYLLABLES: &[&str] = &[
    "ba", "ce", "di", "fo", "gu", "ha", "je", "ki", "lo", "mu", "na", "pe", "ri", "so", "tu",
    "ver", "wal", "ing", "er", "ly",
];

fn corpus() -> Vec<String> {
    let mut words = Vec::new();
    for a in SYLLABLES {
        for b in SYLLABLES {
            words.push(format!("{a}{b}"));
            for c in SYLLABLES {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    words
}

fn oracle(words: &[String]) -> ZipfTable {
    // Deterministic spread of Zipf values over 0..8.
    let entries = words
        .iter()
        .enumerate()
        .map(|(i, w)| (w.clone(), (i % 800) as f64 / 100.0));
    ZipfTable::from_entries("en", entries)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_build_index(c: &mut Criterion) {
    let words = corpus();
    c.bench_function("build_reference_index", |b| {
        b.iter(|| black_box(ReferenceIndex::build(&words)));
    });
}

fn bench_expand(c: &mut Criterion) {
    let index = ReferenceIndex::build(corpus());
    let seeds: BTreeSet<String> = SYLLABLES
        .iter()
        .flat_map(|a| SYLLABLES.iter().map(move |b| format!("{a}{b}")))
        .filter(|s| s.len() >= MIN_SEED_LEN)
        .take(100)
        .collect();

    c.bench_function("expand_100_seeds", |b| {
        b.iter(|| black_box(expand_set(seeds.clone(), &index, MIN_SEED_LEN)));
    });
}

fn bench_train_model(c: &mut Criterion) {
    let words = corpus();
    let oracle = oracle(&words);
    c.bench_function("train_bigram_model", |b| {
        b.iter(|| {
            black_box(BigramModel::train(
                &words,
                &oracle,
                "en",
                LikenessOptions::default(),
            ))
        });
    });
}

fn bench_score(c: &mut Criterion) {
    let words = corpus();
    let oracle = oracle(&words);
    let model = BigramModel::train(&words, &oracle, "en", LikenessOptions::default());
    let scorer = FrequencyScorer::new(&oracle, &NoLemmatizer, "en", FrequencyOptions::default());
    let sample: Vec<&String> = words.iter().step_by(10).take(1000).collect();

    c.bench_function("score_1000_words", |b| {
        b.iter(|| {
            for word in &sample {
                black_box(scorer.score(word, None));
                black_box(model.score(word));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_index,
    bench_expand,
    bench_train_model,
    bench_score
);
criterion_main!(benches);
