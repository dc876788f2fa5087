use std::time::Duration;

use thiserror::Error;

use docdash_core::QueryError;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl From<StorageError> for QueryError {
    fn from(err: StorageError) -> Self {
        QueryError::Connectivity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_surface_as_connectivity_failures() {
        let err: QueryError = StorageError::Timeout {
            operation: "find",
            after: Duration::from_millis(1500),
        }
        .into();
        assert!(matches!(err, QueryError::Connectivity(ref msg) if msg == "find timed out after 1.5s"));
        assert!(!err.is_client_error());
    }
}
