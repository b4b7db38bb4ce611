use super::order::sort_urls;
use super::{LogSource, PuzzleError};
use indexmap::IndexSet;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

/// Whitespace-bounded text with at least one character before `puzzle`
const PUZZLE_PATTERN: &str = r"\S*\Spuzzle\S*";

fn puzzle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PUZZLE_PATTERN).expect("valid puzzle regex"))
}

/// Collect the first puzzle match of every line, deduplicated in first-seen order.
pub fn scan_keys<R: BufRead>(reader: R, path: &Path) -> Result<IndexSet<String>, PuzzleError> {
    let re = puzzle_regex();
    let mut keys = IndexSet::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => PuzzleError::LogFormat {
                path: path.to_path_buf(),
                line: idx + 1,
            },
            _ => PuzzleError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        if let Some(found) = re.find(&line) {
            keys.insert(found.as_str().to_string());
        }
    }

    Ok(keys)
}

/// Read the puzzle URLs out of `path`, rebuilt against `source` and sorted by its rule.
pub fn read_urls(path: &Path, source: &LogSource) -> Result<Vec<String>, PuzzleError> {
    tracing::debug!(
        "category {:?}, host {:?}, sorting {:?}",
        source.category,
        source.host,
        source.sort_rule()
    );

    let file = File::open(path).map_err(|e| PuzzleError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let keys = scan_keys(BufReader::new(file), path)?;
    tracing::debug!(
        "found {} distinct puzzle paths in {}",
        keys.len(),
        path.display()
    );

    let prefix = source.prefix();
    let urls = keys
        .into_iter()
        .map(|key| format!("{}{}", prefix, key))
        .collect();

    sort_urls(urls, source.sort_rule())
}

/// Like [`read_urls`], with the source taken from the file name.
#[allow(dead_code)]
pub fn extract(path: &Path) -> Result<Vec<String>, PuzzleError> {
    let source = LogSource::from_path(path)?;
    read_urls(path, &source)
}
