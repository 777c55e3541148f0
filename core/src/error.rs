use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable failure codes reported alongside every failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidPath,
    InvalidVault,
    PathTraversal,
    IoError,
    NotFound,
    InvalidType,
    InvalidExtension,
    InvalidFind,
    InvalidMax,
    NoMatches,
    InvalidManual,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidPath => "invalid_path",
            ErrorCode::InvalidVault => "invalid_vault",
            ErrorCode::PathTraversal => "path_traversal",
            ErrorCode::IoError => "io_error",
            ErrorCode::NotFound => "not_found",
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::InvalidExtension => "invalid_extension",
            ErrorCode::InvalidFind => "invalid_find",
            ErrorCode::InvalidMax => "invalid_max",
            ErrorCode::NoMatches => "no_matches",
            ErrorCode::InvalidManual => "invalid_manual",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to resolve path: {0}")]
    InvalidPath(String),

    #[error("Failed to resolve vault path: {0}")]
    InvalidVault(String),

    #[error("Path escapes the vault root.")]
    PathTraversal,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidType(String),

    #[error("Only .md files are allowed: {0}")]
    InvalidExtension(String),

    #[error("find must be a non-empty string.")]
    InvalidFind,

    #[error("max_replacements must be >= 1 (got {0}).")]
    InvalidMax(i64),

    #[error("No matches found for the given text in {0}")]
    NoMatches(String),

    #[error("Invalid manual name.")]
    InvalidManual,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidPath(_) => ErrorCode::InvalidPath,
            Error::InvalidVault(_) => ErrorCode::InvalidVault,
            Error::PathTraversal => ErrorCode::PathTraversal,
            Error::Io { .. } => ErrorCode::IoError,
            Error::NotFound(_) => ErrorCode::NotFound,
            Error::InvalidType(_) => ErrorCode::InvalidType,
            Error::InvalidExtension(_) => ErrorCode::InvalidExtension,
            Error::InvalidFind => ErrorCode::InvalidFind,
            Error::InvalidMax(_) => ErrorCode::InvalidMax,
            Error::NoMatches(_) => ErrorCode::NoMatches,
            Error::InvalidManual => ErrorCode::InvalidManual,
        }
    }
}
