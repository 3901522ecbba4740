//! Error types shared by the library and the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for autodoc operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system errors while resetting or appending the output file,
    /// or while reading a manifest
    #[error("cannot access '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A module manifest that is not valid JSON or has the wrong shape
    #[error("invalid manifest '{origin}': {source}")]
    Manifest {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A type that (transitively) derives from itself
    #[error("inheritance cycle through type '{0}'")]
    InheritanceCycle(String),

    /// A method whose flags contradict each other
    #[error("invalid method '{type_name}.{method}': {reason}")]
    InvalidMethod {
        type_name: String,
        method: String,
        reason: &'static str,
    },

    /// Reading from or writing to the operator's terminal failed
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
