//! Error types for survey ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a survey export from storage.
///
/// Parsing itself never fails as a whole; these are the only fatal paths.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Survey file not found.
    #[error("survey file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("survey file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Errors raised while mapping one logical record into a [`survey_model::RawRecord`].
///
/// A mapping error only ever affects the record it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The id field did not start with a number.
    #[error("invalid respondent id '{value}'")]
    InvalidId { value: String },

    /// A schema entry produced a value of the wrong shape for its field.
    #[error("schema decoder produced the wrong value kind for field {field}")]
    SchemaMismatch { field: &'static str },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/enquesta.csv"),
        };
        assert_eq!(err.to_string(), "survey file not found: /data/enquesta.csv");

        let err = MapError::InvalidId {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid respondent id 'abc'");
    }
}
