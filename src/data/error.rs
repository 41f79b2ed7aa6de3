//! Data store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a data store
#[derive(Error, Debug)]
pub enum DataError {
    /// Reading the data file failed
    #[error("Failed to read data file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// The document is not valid store JSON
    #[error("Failed to parse data: {0}")]
    Parse(String),

    /// Two records in one collection share an identity
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: u32 },
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

/// Result type alias for data store operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::DuplicateId {
            collection: "competitors",
            id: 7,
        };
        assert_eq!(err.to_string(), "Duplicate id 7 in competitors");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: DataError = json_err.into();
        assert!(matches!(err, DataError::Parse(_)));
    }
}
