use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a worker could not produce a value for its input
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("malformed token `{token}` at line {line}")]
    Malformed { line: usize, token: String },
}

impl AggregateError {
    /// Whether this failure comes from I/O rather than from the file's content
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Read { .. })
    }
}
