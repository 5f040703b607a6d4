use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the monthly store.
///
/// Either the whole append/load succeeds or the call fails with one of these;
/// nothing is retried and a month is never partially loaded.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid timestamp {value:?} in header on line {line}")]
    InvalidTimestamp { line: usize, value: String },
}

impl JournalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, JournalError>;
