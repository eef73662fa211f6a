// Wordlist, score table and TSV file handling
//
// All writers go through a temporary file in the destination directory that
// is persisted over the target only after it was written completely, so a
// failed write never leaves a truncated wordlist behind.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File, Permissions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use wordlist_core::score::ScoreRecord;
use wordlist_core::word::canonicalize;

use crate::CurationError;

/// Word -> scores, ordered by word.
pub type ScoreTable = BTreeMap<String, ScoreRecord>;

/// Error type for malformed tab-separated tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TableError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        TableError::Malformed {
            line,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Open a file for buffered reading, attaching the path to any error.
pub fn open(path: &Path) -> Result<BufReader<File>, CurationError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CurationError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Feed every line of `reader` to `line`, without its `\n` or `\r\n`
/// terminator. Lines that are not UTF-8 arrive as `None`.
pub fn for_each_line<R, F>(mut reader: R, mut line: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(Option<&str>),
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        line(std::str::from_utf8(raw).ok());
    }
}

/// Parse a wordlist: one word per line, normalized and validated. Lines that
/// are not valid words, or not UTF-8, are dropped.
pub fn parse_wordlist<R: BufRead>(reader: R) -> io::Result<BTreeSet<String>> {
    let mut words = BTreeSet::new();
    for_each_line(reader, |line| {
        if let Some(word) = line.and_then(canonicalize) {
            words.insert(word);
        }
    })?;
    Ok(words)
}

/// Read a wordlist file as a sorted set of canonical words.
pub fn read_wordlist(path: &Path) -> Result<BTreeSet<String>, CurationError> {
    parse_wordlist(open(path)?).map_err(|source| CurationError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Walk a tab-separated table, calling `row` with the 1-based line number and
/// the fields of every line. Blank lines and `#` comments are skipped.
pub fn parse_tsv<R, F>(reader: R, mut row: F) -> Result<(), TableError>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<(), TableError>,
{
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        row(i + 1, &fields)?;
    }
    Ok(())
}

/// Load a table file with `parse`, attaching the path to any error.
pub fn load_table<T, F>(path: &Path, parse: F) -> Result<T, CurationError>
where
    F: FnOnce(BufReader<File>) -> Result<T, TableError>,
{
    let reader = open(path)?;
    parse(reader).map_err(|source| CurationError::Table {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Mode for new files when there is no target to copy it from.
#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Write `path` through a temporary sibling file and move it into place.
/// A rewritten file keeps the permissions it had.
fn write_atomically<F>(path: &Path, write: F) -> Result<(), CurationError>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let wrap = |source: io::Error| CurationError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(wrap)?;

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());
    let mut builder = Builder::new();
    if let Some(perms) = existing.clone().or_else(default_permissions) {
        builder.permissions(perms);
    }
    let temp_file = builder.tempfile_in(dir).map_err(wrap)?;
    // The create mode is masked by the umask; copy the target's bits exactly.
    if let Some(perms) = existing {
        temp_file.as_file().set_permissions(perms).map_err(wrap)?;
    }
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer).map_err(wrap)?;
        writer.flush().map_err(wrap)?;
    }
    temp_file.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

/// Write words one per line with `\n` endings, in iteration order.
pub fn write_wordlist<I, S>(path: &Path, words: I) -> Result<(), CurationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_atomically(path, |out| {
        for word in words {
            out.write_all(word.as_ref().as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), CurationError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| CurationError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomically(path, |out| {
        out.write_all(json.as_bytes())?;
        out.write_all(b"\n")
    })
}

/// Write a score table as an indented JSON object with sorted keys.
pub fn write_score_table(path: &Path, table: &ScoreTable) -> Result<(), CurationError> {
    write_json(path, table)
}

/// Write `(word, zipf)` pairs as a JSON object, keeping the given order.
pub fn write_frequency_table(path: &Path, entries: &[(String, f64)]) -> Result<(), CurationError> {
    let mut map = serde_json::Map::with_capacity(entries.len());
    for (word, zipf) in entries {
        map.insert(word.clone(), serde_json::Value::from(*zipf));
    }
    write_json(path, &map)
}

/// Score table location for a wordlist: same stem, `.json` extension,
/// inside `output_dir`.
pub fn score_table_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "wordlist".to_string());
    output_dir.join(format!("{stem}.json"))
}
