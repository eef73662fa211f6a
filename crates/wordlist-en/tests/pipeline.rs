//! End-to-end curation runs over temporary directories.
//!
//! Each test builds a small reference, frequency table and set of target
//! wordlists on disk, drives the public API the way the command-line tools
//! do, and checks the files left behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use wordlist_en::config::CurationConfig;
use wordlist_en::expand::MIN_SEED_LEN;
use wordlist_en::frequency::{ZipfTable, frequency_listing};
use wordlist_en::io::{read_wordlist, write_frequency_table};
use wordlist_en::lemma::LemmaTable;
use wordlist_en::likeness::BigramModel;
use wordlist_en::pipeline::{Curator, Expander, FileOutcome};
use wordlist_en::reference::ReferenceIndex;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const REFERENCE: &str = "\
The
then
there
these
gym
gymnast
gymnastics
gymnasium
energy
gynaecology
run
runner
running
ran
dark
darker
darkness
aaardvark
bcdfghjk

x
";

const FREQUENCIES: &str = "\
# word\tzipf
the\t7.73
then\t6.4
there\t6.6
these\t6.1
run\t5.8
dark\t5.0
energy\t4.9
gym\t4.2
running\t4.6
";

struct Workspace {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        fs::write(root.join("reference.txt"), REFERENCE).unwrap();
        fs::write(root.join("freq.tsv"), FREQUENCIES).unwrap();
        Self { _dir: dir, root }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    fn index(&self) -> ReferenceIndex {
        ReferenceIndex::from_path(&self.path("reference.txt")).unwrap().0
    }

    fn oracle(&self) -> ZipfTable {
        ZipfTable::from_path("en", &self.path("freq.tsv")).unwrap()
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn reference_cleaning_drops_invalid_lines() {
    let ws = Workspace::new();
    let (index, stats) = ReferenceIndex::from_path(&ws.path("reference.txt")).unwrap();
    assert_eq!(index.len(), 17);
    assert!(index.contains("the"));
    assert!(!index.contains("aaardvark"));
    assert!(!index.contains("bcdfghjk"));
    assert_eq!(stats.blank_lines, 1);
    assert_eq!(stats.rejected_lines(), 3);
}

#[test]
fn curate_expands_and_rescores_grown_files() {
    let ws = Workspace::new();
    let index = ws.index();
    let oracle = ws.oracle();
    let config = CurationConfig::default();
    let model = BigramModel::train(index.iter(), &oracle, "en", config.likeness.clone());
    let mut lemmas = LemmaTable::new();
    lemmas.insert(wordlist_core::enums::PartOfSpeech::Verb, "ran", "run");

    let nouns = ws.write("lists/nouns.txt", "gym\nenergy\n");
    let verbs = ws.write("lists/verbs.txt", "RUN\nran\n");
    let done = ws.write("lists/adjectives.txt", "gynaecology\n");
    let missing = ws.path("lists/missing.txt");

    let curator = Curator::new(&index, &model, &oracle, &lemmas, &config);
    let out = ws.path("scores");
    let summary = curator.run(
        &[nouns.clone(), verbs.clone(), done.clone(), missing.clone()],
        &out,
    );

    assert_eq!(summary.expanded, [nouns.clone(), verbs.clone()]);
    assert_eq!(summary.unchanged, [done]);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].0, missing);
    assert_eq!(summary.scored.len(), 2);
    assert!(!out.join("adjectives.json").exists());

    let nouns_words: Vec<String> = read_wordlist(&nouns).unwrap().into_iter().collect();
    assert_eq!(
        nouns_words,
        ["energy", "gym", "gymnasium", "gymnast", "gymnastics"]
    );

    let verbs_json = read_json(&out.join("verbs.json"));
    let keys: Vec<&String> = verbs_json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["ran", "run", "runner", "running"]);
    // "ran" is boosted through the verb lemma "run"
    assert_eq!(verbs_json["ran"]["freq"], 50.75);
    assert_eq!(verbs_json["run"]["freq"], 72.5);
    for record in verbs_json.as_object().unwrap().values() {
        let like = record["like"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&like));
    }
}

#[test]
fn curate_is_idempotent() {
    let ws = Workspace::new();
    let index = ws.index();
    let expander = Expander::new(&index, MIN_SEED_LEN);

    let target = ws.write("nouns.txt", "dark\n");
    let first = expander.expand_file(&target).unwrap();
    assert_eq!(first, FileOutcome::Expanded { original: 1, merged: 3 });
    let after_first = fs::read_to_string(&target).unwrap();

    let second = expander.expand_file(&target).unwrap();
    assert_eq!(second, FileOutcome::Unchanged { words: 3 });
    assert_eq!(fs::read_to_string(&target).unwrap(), after_first);
}

#[test]
fn rescore_all_scores_unchanged_files() {
    let ws = Workspace::new();
    let index = ws.index();
    let oracle = ws.oracle();
    let config = CurationConfig {
        rescore_all: true,
        ..CurationConfig::default()
    };
    let model = BigramModel::train(index.iter(), &oracle, "en", config.likeness.clone());
    let lemmas = LemmaTable::new();
    let curator = Curator::new(&index, &model, &oracle, &lemmas, &config);

    let target = ws.write("others.txt", "gynaecology\n");
    let summary = curator.run(&[target], &ws.path("out"));
    assert!(summary.expanded.is_empty());
    assert_eq!(summary.scored, [ws.path("out").join("others.json")]);

    let table = read_json(&ws.path("out/others.json"));
    // unattested valid words still get the floor score
    assert_eq!(table["gynaecology"]["freq"], 0.01);
}

#[test]
fn seed_expansion_spreads_to_matching_files() {
    let ws = Workspace::new();
    let index = ws.index();
    let expander = Expander::new(&index, MIN_SEED_LEN);

    let a = ws.write("lists/a/nouns.txt", "gym\ndark\n");
    let b = ws.write("lists/b/nouns.txt", "gym\ngymnast\ngymnastics\ngymnasium\n");
    let c = ws.write("lists/b/verbs.txt", "run\n");

    let result = expander
        .expand_seed_across(
            " Gym ",
            &[ws.path("lists")],
            Some(ws.path("reference.txt").as_path()),
        )
        .unwrap();

    assert_eq!(result.matches.len(), 4);
    assert_eq!(result.updated, [a.clone()]);
    assert!(result.failures.is_empty());
    assert_eq!(read_wordlist(&a).unwrap().len(), 5);
    assert_eq!(read_wordlist(&b).unwrap().len(), 4);
    assert_eq!(fs::read_to_string(&c).unwrap(), "run\n");
}

#[test]
fn frequency_listing_is_ordered_by_value() {
    let ws = Workspace::new();
    let oracle = ws.oracle();
    let lines = ["dark", "The", "gym", "unknown", "the", "42"];
    let listing = frequency_listing(lines, &oracle, "en", 0.0);
    let words: Vec<&str> = listing.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, ["the", "dark", "gym"]);

    let out = ws.path("freq.json");
    write_frequency_table(&out, &listing).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.find("\"the\"").unwrap() < text.find("\"dark\"").unwrap());
    assert!(text.find("\"dark\"").unwrap() < text.find("\"gym\"").unwrap());
    assert_eq!(read_json(&out)["the"], 7.73);
}

#[cfg(feature = "classify")]
#[test]
fn classification_writes_every_bucket() {
    use wordlist_core::enums::WordClass;
    use wordlist_en::classify::{LexiconTagger, classify};

    let ws = Workspace::new();
    let lexicon = ws.write("lexicon.tsv", "gym\tnoun\nrun\tnoun,verb\ndark\tadj,noun\n");
    let tagger = LexiconTagger::from_path(&lexicon).unwrap();
    let index = ws.index();

    let result = classify(index.iter(), &tagger);
    assert_eq!(result.count(WordClass::Nouns), 3);
    assert_eq!(result.words(WordClass::Conjunctions).collect::<Vec<_>>(), ["the"]);

    let out = ws.path("classes");
    let written = result.write_to_dir(&out).unwrap();
    assert_eq!(written.len(), 7);
    assert_eq!(fs::read_to_string(out.join("verbs.txt")).unwrap(), "run\n");
    let others = fs::read_to_string(out.join("others.txt")).unwrap();
    assert!(others.lines().any(|w| w == "gymnast"));
}
