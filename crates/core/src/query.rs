use tracing::debug;

use crate::error::QueryError;
use crate::request::{QueryRequest, TargetKind};
use crate::reshape::{build_series, build_table, QueryResponse, QueryResult, DATE_FIELD};
use crate::store::{Domain, DocumentStore};

/// Serve one `/query` request: fetch the first target's documents and
/// reshape them into a table or a series, depending on the output-type hint.
pub async fn execute_query(
    store: &dyn DocumentStore,
    request: &QueryRequest,
) -> Result<QueryResponse, QueryError> {
    let target = request.primary_target()?;
    let dataset = target.target.as_str();

    let result = match target.kind {
        TargetKind::Table => {
            let documents = store.fetch_all(Domain::Tabular, dataset).await?;
            debug!(dataset, documents = documents.len(), "table query");
            QueryResult::Table(build_table(&documents))
        }
        TargetKind::Timeseries => {
            let range = request.range.as_ref().ok_or(QueryError::MissingRange)?;
            let (from, to) = range.bounds()?;
            let documents = store
                .fetch_range(Domain::TimeIndexed, dataset, DATE_FIELD, from, to)
                .await?;
            debug!(dataset, %from, %to, documents = documents.len(), "series query");
            QueryResult::Series(build_series(dataset, &documents)?)
        }
    };

    Ok(vec![result])
}
