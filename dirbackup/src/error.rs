// src/error.rs
use std::io;
use thiserror::Error;

/// Failure of a top-level directory operation.
///
/// The `Display` output carries the prefix the CLI prints on stderr, so a
/// caller can report either variant with a plain `eprintln!("{err}")`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpError {
    #[error("Filesystem error: {0}")]
    Filesystem(String),

    #[error("Error: {0}")]
    Generic(String),
}

impl OpError {
    #[must_use]
    pub const fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem(_))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Filesystem(msg) | Self::Generic(msg) => msg,
        }
    }
}

impl From<io::Error> for OpError {
    #[inline]
    fn from(err: io::Error) -> Self {
        Self::Filesystem(err.to_string())
    }
}

impl From<walkdir::Error> for OpError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        match err.io_error() {
            Some(io_err) if path.is_empty() => Self::Filesystem(io_err.to_string()),
            Some(io_err) => Self::Filesystem(format!("{path}: {io_err}")),
            None => Self::Generic(err.to_string()),
        }
    }
}

pub type OpResult<T> = Result<T, OpError>;
