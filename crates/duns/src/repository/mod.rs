//! Repository over the remote store, the local mirror and an in-memory cache.
//!
//! Reads are served from the cache when possible. On a miss, or when the
//! caller forces a refresh, the remote is queried first and the local
//! mirror is used only as a fallback:
//!
//! - **Reads**: cache, then remote (written through to local), then local
//! - **Writes**: update the cache, then write remote and local concurrently
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let remote = Arc::new(RemoteDataSource::new(Duration::from_secs(2)));
//! let local = Arc::new(SqliteDataSource::new("duns.db").await?);
//!
//! let repository = DefaultDunsRepository::new(remote, local);
//! let duns = repository.get_duns(false).await?;
//! ```

mod cache;
mod default;

pub use cache::CacheState;
pub use default::DefaultDunsRepository;
