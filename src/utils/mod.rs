//! Helpers for the download side of logpuzzle
//!
//! - `files`: destination directory and index page
//! - `http`: HTTP client utilities
//! - `images`: sequential image download

pub mod files;
pub mod http;
pub mod images;

#[cfg(test)]
pub(crate) mod test_server;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for URL: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
