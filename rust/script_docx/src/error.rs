//! Error types for script conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The two ways a run can end badly, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    ProcessingOrWriteFailure,
}

#[derive(Error, Debug)]
pub enum Error {
    /// No file at the configured input path.
    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// The input exists but could not be read as UTF-8 text.
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Building the ZIP container failed.
    #[error("package error: {0}")]
    Package(#[from] zip::result::ZipError),

    /// Writing the finished document failed.
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InputNotFound(_) => ErrorKind::InputNotFound,
            _ => ErrorKind::ProcessingOrWriteFailure,
        }
    }
}
