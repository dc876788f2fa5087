use indexmap::IndexSet;
use tracing::debug;

use crate::error::QueryError;
use crate::store::{Domain, DocumentStore};

/// Names of every dataset across both domains, each reported once.
///
/// The contract gives no ordering guarantee; names come back in the order
/// first seen, tabular domain first.
pub async fn list_datasets(store: &dyn DocumentStore) -> Result<Vec<String>, QueryError> {
    let mut names = IndexSet::new();
    for domain in Domain::ALL {
        let found = store.list_datasets(domain).await?;
        debug!(domain = %domain, count = found.len(), "listed datasets");
        names.extend(found);
    }
    Ok(names.into_iter().collect())
}
