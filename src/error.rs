//! Error type shared by the database, persistence and scanning layers.

use std::path::PathBuf;

/// Errors raised around the playlist registry.
///
/// Looking up or erasing an absent playlist is not an error; those operations
/// report it through their `Option`/`bool` result instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Stream(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unsupported state file format: {0}")]
    UnsupportedFormat(String),

    #[error("playlist name cannot be stored: {0:?}")]
    InvalidName(String),

    #[error("database lock poisoned")]
    LockPoisoned,

    #[error("no such playlist: {0}")]
    NoSuchPlaylist(String),

    #[error(transparent)]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
