//! Read-only access to the document store.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::document::Document;
use crate::error::QueryError;

/// The two independently addressable halves of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Flat row/column snapshots.
    Tabular,
    /// Observations keyed by a `Date` field.
    TimeIndexed,
}

impl Domain {
    pub const ALL: [Domain; 2] = [Domain::Tabular, Domain::TimeIndexed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Tabular => "table",
            Domain::TimeIndexed => "timeseries",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document store collaborator. Implementations own connection management;
/// fetched documents never include the store's internal identifier.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Names of every dataset stored in `domain`.
    async fn list_datasets(&self, domain: Domain) -> Result<Vec<String>, QueryError>;

    /// Every document of `dataset`, in store order. An unknown dataset is empty.
    async fn fetch_all(&self, domain: Domain, dataset: &str) -> Result<Vec<Document>, QueryError>;

    /// Documents whose `field` is a timestamp within `[low, high]`, both ends inclusive.
    async fn fetch_range(
        &self,
        domain: Domain,
        dataset: &str,
        field: &str,
        low: DateTime<Utc>,
        high: DateTime<Utc>,
    ) -> Result<Vec<Document>, QueryError>;
}
