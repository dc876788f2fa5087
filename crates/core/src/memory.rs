//! In-process [`DocumentStore`], used by tests and local experiments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::document::Document;
use crate::error::QueryError;
use crate::store::{Domain, DocumentStore};

type Datasets = IndexMap<String, Vec<Document>>;

#[derive(Default)]
pub struct MemoryStore {
    domains: RwLock<HashMap<Domain, Datasets>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`MemoryStore::insert_all`].
    pub fn with_dataset(
        self,
        domain: Domain,
        dataset: &str,
        documents: impl IntoIterator<Item = Document>,
    ) -> Self {
        self.insert_all(domain, dataset, documents);
        self
    }

    /// Append documents to a dataset, creating it if needed.
    pub fn insert_all(
        &self,
        domain: Domain,
        dataset: &str,
        documents: impl IntoIterator<Item = Document>,
    ) {
        let mut domains = self.domains.write().unwrap_or_else(PoisonError::into_inner);
        domains
            .entry(domain)
            .or_default()
            .entry(dataset.to_string())
            .or_default()
            .extend(documents);
    }

    /// Simulate an unreachable store: every call fails with `Connectivity`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), QueryError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(QueryError::Connectivity("memory store marked unavailable".into()));
        }
        Ok(())
    }

    fn select(
        &self,
        domain: Domain,
        dataset: &str,
        keep: impl Fn(&Document) -> bool,
    ) -> Result<Vec<Document>, QueryError> {
        self.check_available()?;
        let domains = self.domains.read().unwrap_or_else(PoisonError::into_inner);
        Ok(domains
            .get(&domain)
            .and_then(|datasets| datasets.get(dataset))
            .map(|docs| docs.iter().filter(|doc| keep(doc)).cloned().collect())
            .unwrap_or_default())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_datasets(&self, domain: Domain) -> Result<Vec<String>, QueryError> {
        self.check_available()?;
        let domains = self.domains.read().unwrap_or_else(PoisonError::into_inner);
        Ok(domains
            .get(&domain)
            .map(|datasets| datasets.keys().cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch_all(&self, domain: Domain, dataset: &str) -> Result<Vec<Document>, QueryError> {
        self.select(domain, dataset, |_| true)
    }

    async fn fetch_range(
        &self,
        domain: Domain,
        dataset: &str,
        field: &str,
        low: DateTime<Utc>,
        high: DateTime<Utc>,
    ) -> Result<Vec<Document>, QueryError> {
        // Only timestamp values compare against a timestamp bound.
        self.select(domain, dataset, |doc| {
            doc.get(field)
                .and_then(|value| value.as_timestamp())
                .is_some_and(|ts| low <= ts && ts <= high)
        })
    }
}
