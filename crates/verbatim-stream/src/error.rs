//! Error types for streaming dataset processing.

use std::path::PathBuf;
use thiserror::Error;

/// Whole-stream failures. Per-record problems are never reported here; they
/// are logged and counted instead.
#[derive(Debug, Error)]
pub enum StreamError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but cannot be opened.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file cannot be created.
    #[error("failed to create {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Stream Errors ===
    /// Reading the input stream failed.
    #[error("failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// Writing the output stream failed.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Input is not a well-formed JSON object of region records.
    #[error(
        "invalid JSON at line {line}, column {column} (after {regions_read} regions): {source}"
    )]
    Parse {
        line: usize,
        column: usize,
        regions_read: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl StreamError {
    pub(crate) fn write(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}

/// Result type for streaming operations.
pub type Result<T> = std::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StreamError::FileNotFound {
            path: PathBuf::from("public/data.json"),
        };
        assert_eq!(err.to_string(), "input file not found: public/data.json");
    }

    #[test]
    fn test_parse_error_names_position() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StreamError::Parse {
            line: source.line(),
            column: source.column(),
            regions_read: 0,
            source,
        };
        assert!(err.to_string().starts_with("invalid JSON at line 1, column 1"));
    }
}
