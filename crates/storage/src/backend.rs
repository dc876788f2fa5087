use std::future::Future;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document as BsonDocument};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::{debug, info};

use docdash_core::config::{redact_url, StoreConfig};
use docdash_core::{Document, DocumentStore, Domain, QueryError};

use crate::convert::document_from_bson;
use crate::error::StorageError;

/// MongoDB-backed [`DocumentStore`]. Each domain is a database and each
/// dataset a collection within it.
///
/// The driver's `Client` owns the connection pool: it is built once at
/// startup and each request checks connections out and back in through it.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    config: StoreConfig,
}

impl MongoStore {
    /// Build the pooled client. No connection is made until the first call.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StorageError> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some("docdash".to_string());
        options.connect_timeout = Some(config.timeout());
        options.server_selection_timeout = Some(config.timeout());

        let client = Client::with_options(options)?;
        info!("Storage: mongodb at {}", redact_url(&config.url));
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn collection(&self, domain: Domain, dataset: &str) -> Collection<BsonDocument> {
        self.client
            .database(self.config.database(domain))
            .collection(dataset)
    }

    /// Run a driver call under the configured deadline.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, mongodb::error::Error>>,
    ) -> Result<T, StorageError> {
        let after = self.config.timeout();
        match tokio::time::timeout(after, call).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(StorageError::Timeout { operation, after }),
        }
    }

    async fn find(
        &self,
        domain: Domain,
        dataset: &str,
        filter: BsonDocument,
    ) -> Result<Vec<Document>, StorageError> {
        let collection = self.collection(domain, dataset);
        let raw: Vec<BsonDocument> = self
            .bounded("find", async {
                let cursor = collection.find(filter).projection(doc! { "_id": 0 }).await?;
                cursor.try_collect::<Vec<BsonDocument>>().await
            })
            .await?;
        debug!(domain = %domain, dataset, documents = raw.len(), "find");
        Ok(raw.into_iter().map(document_from_bson).collect())
    }
}

/// `{field: {$gte: low, $lte: high}}`.
pub fn range_filter(field: &str, low: DateTime<Utc>, high: DateTime<Utc>) -> BsonDocument {
    let mut bounds = BsonDocument::new();
    bounds.insert("$gte", BsonDateTime::from_millis(low.timestamp_millis()));
    bounds.insert("$lte", BsonDateTime::from_millis(high.timestamp_millis()));

    let mut filter = BsonDocument::new();
    filter.insert(field, bounds);
    filter
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn list_datasets(&self, domain: Domain) -> Result<Vec<String>, QueryError> {
        let database = self.client.database(self.config.database(domain));
        let names = self
            .bounded("list_collection_names", async { database.list_collection_names().await })
            .await?;
        Ok(names)
    }

    async fn fetch_all(&self, domain: Domain, dataset: &str) -> Result<Vec<Document>, QueryError> {
        Ok(self.find(domain, dataset, BsonDocument::new()).await?)
    }

    async fn fetch_range(
        &self,
        domain: Domain,
        dataset: &str,
        field: &str,
        low: DateTime<Utc>,
        high: DateTime<Utc>,
    ) -> Result<Vec<Document>, QueryError> {
        Ok(self.find(domain, dataset, range_filter(field, low, high)).await?)
    }
}
