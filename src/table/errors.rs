//! # Table Errors
//!
//! Error types for loading the permit table from disk.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while loading the permit table
#[derive(Debug, Error)]
pub enum TableError {
    /// The CSV file could not be opened or read
    #[error("failed to read permit file '{path}': {source}")]
    Io {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl TableError {
    /// Wraps an I/O error with the path being read
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TableError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the file that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            TableError::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = TableError::io(
            "missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let display = format!("{}", err);
        assert!(display.contains("missing.csv"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_io_error_preserves_source() {
        let err = TableError::io(
            "permits.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
