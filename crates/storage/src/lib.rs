pub mod backend;
pub mod convert;
pub mod error;

pub use backend::MongoStore;
pub use error::StorageError;
