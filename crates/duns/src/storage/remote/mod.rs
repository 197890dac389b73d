//! Simulated remote data source.
//!
//! This module provides the authoritative store of duns. There is no real
//! network behind it: data lives in a map wrapped in `Arc<RwLock<_>>`, and
//! reads are delayed by a configurable latency to behave like a slow service.
//! The source can be switched offline to exercise the local fallback.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use duns::storage::remote::RemoteDataSource;
//!
//! let remote = RemoteDataSource::new(Duration::from_millis(2000));
//! remote.set_available(false); // simulate losing the network
//! ```

mod source;

pub use source::RemoteDataSource;
