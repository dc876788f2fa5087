use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    /// Store unreachable, or a call ran past its deadline.
    #[error("document store unavailable: {0}")]
    Connectivity(String),

    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("request has no targets")]
    MissingTarget,

    #[error("series request has no range")]
    MissingRange,

    #[error("invalid range timestamp '{0}': expected YYYY-MM-DDTHH:MM:SS.ffffffZ")]
    InvalidTimestamp(String),

    #[error("document in '{dataset}' has a non-timestamp '{field}' value")]
    MalformedDocument { dataset: String, field: String },
}

impl QueryError {
    /// True for errors caused by the caller's request rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QueryError::MalformedBody(_)
                | QueryError::MissingTarget
                | QueryError::MissingRange
                | QueryError::InvalidTimestamp(_)
        )
    }
}
