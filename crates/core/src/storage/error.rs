use thiserror::Error;

/// Errors that can occur inside a single data source.
///
/// Data sources never panic or leak driver errors past their boundary;
/// every failure is converted into one of these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("Dun not found: {id}")]
    NotFound { id: String },
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Errors surfaced by a repository that unifies the remote and local sources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A forced refresh was requested but the remote could not be reached.
    /// The local mirror is deliberately not consulted.
    #[error("Can't force refresh: remote data source is unavailable")]
    ForceRefreshUnavailable(#[source] DataSourceError),
    #[error("Error fetching from remote and local")]
    Exhausted {
        remote: DataSourceError,
        local: DataSourceError,
    },
    /// Neither the cache nor the fetch produced data, yet no error was reported.
    #[error("Illegal state")]
    IllegalState,
    #[error(
        "Write failed (remote: {}, local: {})",
        describe(.remote),
        describe(.local)
    )]
    WriteFailed {
        remote: Option<DataSourceError>,
        local: Option<DataSourceError>,
    },
}

fn describe(side: &Option<DataSourceError>) -> String {
    match side {
        Some(err) => err.to_string(),
        None => "ok".to_string(),
    }
}

impl RepositoryError {
    /// Builds a `WriteFailed` error from the outcome of a dual write, or
    /// `None` if both sides succeeded.
    pub fn from_dual_write(remote: Result<()>, local: Result<()>) -> Option<Self> {
        match (remote.err(), local.err()) {
            (None, None) => None,
            (remote, local) => Some(RepositoryError::WriteFailed { remote, local }),
        }
    }
}

/// Result type for data source operations.
pub type Result<T> = std::result::Result<T, DataSourceError>;

/// Result type for repository operations.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;
