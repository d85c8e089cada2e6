//! Result and error types for the core library

use thiserror::Error;

use crate::schema::RecordKind;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unrecognized file: headers match neither the transactions nor the categories layout")]
    UnrecognizedFormat,

    #[error("Type mismatch: file was declared as {declared} but its headers look like {detected}")]
    TypeMismatch {
        declared: RecordKind,
        detected: RecordKind,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message_names_both_kinds() {
        let err = Error::TypeMismatch {
            declared: RecordKind::Categories,
            detected: RecordKind::Transactions,
        };
        let msg = err.to_string();
        assert!(msg.contains("categories"));
        assert!(msg.contains("transactions"));
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(Error::storage("disk full"), Error::Storage(_)));
        assert!(matches!(Error::config("bad delimiter"), Error::Config(_)));
    }
}
