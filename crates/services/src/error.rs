//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::QuestionListError;

/// Errors emitted while loading questions from a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] QuestionListError),
}

/// Errors emitted while resolving where questions come from.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceConfigError {
    #[error("invalid question url {raw}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported question url scheme `{scheme}` (expected http or https)")]
    UnsupportedScheme { scheme: String },
    #[error("question file path is empty")]
    EmptyPath,
}
