mod error;
mod traits;

pub use error::{DataSourceError, RepositoryError, RepositoryResult, Result};
pub use traits::{DunDataSource, DunsRepository};
