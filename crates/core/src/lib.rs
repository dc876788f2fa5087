pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod memory;
pub mod query;
pub mod request;
pub mod reshape;
pub mod store;

pub use config::Config;
pub use discovery::list_datasets;
pub use document::*;
pub use error::*;
pub use memory::MemoryStore;
pub use query::execute_query;
pub use request::{QueryRequest, Target, TargetKind, TimeRange};
pub use reshape::{QueryResponse, QueryResult};
pub use store::{Domain, DocumentStore};
