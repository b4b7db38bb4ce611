use std::path::{Path, PathBuf};
use thiserror::Error;

/// Category whose URLs are sorted by the whole string
pub const ANIMAL_CATEGORY: &str = "animal";

/// Scheme prepended to the host when rebuilding URLs
pub const URL_SCHEME: &str = "HTTP://";

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("log filename {path} is not of the form <category>_<host>")]
    BadFilename { path: PathBuf },

    #[error("failed to read log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: line is not valid UTF-8")]
    LogFormat { path: PathBuf, line: usize },

    #[error("cannot sort {url}: expected at least 5 '-' separated tokens, found {tokens}")]
    SortKey { url: String, tokens: usize },
}

/// How the rebuilt URLs are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRule {
    /// Ascending by the full URL
    Lexicographic,
    /// Ascending by the token at index 4 of the URL split on `-`
    FifthToken,
}

/// Where a log came from: picks the URL host and the sort rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    pub category: String,
    pub host: String,
}

impl LogSource {
    pub fn new(category: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            host: host.into(),
        }
    }

    /// Parse `<category>_<host>[_...]` out of the log's file name.
    ///
    /// Segments after the second are ignored, and the host keeps whatever
    /// extension the file has.
    pub fn from_path(path: &Path) -> Result<Self, PuzzleError> {
        let bad_filename = || PuzzleError::BadFilename {
            path: path.to_path_buf(),
        };

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(bad_filename)?;

        let mut segments = name.split('_');
        match (segments.next(), segments.next()) {
            (Some(category), Some(host)) => Ok(Self::new(category, host)),
            _ => Err(bad_filename()),
        }
    }

    /// `HTTP://<host>`, glued directly onto each matched path.
    pub fn prefix(&self) -> String {
        format!("{}{}", URL_SCHEME, self.host)
    }

    pub fn sort_rule(&self) -> SortRule {
        if self.category == ANIMAL_CATEGORY {
            SortRule::Lexicographic
        } else {
            SortRule::FifthToken
        }
    }
}

pub mod extract;
pub mod order;

pub use extract::{extract, read_urls};
