extern crate thiserror;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Table(#[from] TableError),

    #[error("{0}")]
    Scorer(#[from] ScorerError),
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Config File Error: {path}: {kind}")]
    File { path: PathBuf, kind: io::ErrorKind },

    #[error("Config Parse Error: {0}")]
    Parse(String),

    #[error("Scorer Error: no scorer command configured and scoring was not skipped")]
    MissingScorer,
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {path}: {kind}")]
    File { path: PathBuf, kind: io::ErrorKind },

    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),
}

impl IoError {
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            IoError::File { kind, .. } => *kind,
            IoError::Reader(kind) => *kind,
        }
    }
}

/// Tabular data errors.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("CSV Error: {0}")]
    Csv(String),

    #[error("Missing Column: {0}")]
    MissingColumn(String),

    #[error("No message ids are shared by the original and transformed scores")]
    EmptyComparison,
}

impl From<csv::Error> for TableError {
    fn from(error: csv::Error) -> Self {
        TableError::Csv(error.to_string())
    }
}

/// External scorer errors.
#[derive(Debug, Error, PartialEq)]
pub enum ScorerError {
    #[error("Scorer Spawn Error: {0}")]
    Spawn(io::ErrorKind),

    #[error("Scorer Failed (exit {code}): {message}")]
    Failed { code: i32, message: String },
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Table(error.into())
    }
}
