//! Data source implementations.
//!
//! This module provides the two concrete implementations of the
//! `DunDataSource` trait defined in `duns_core::storage`:
//!
//! - `remote`: the authoritative store, an in-process stand-in for a network
//!   service with simulated latency and a switch to take it offline
//! - `sqlite`: the durable local mirror, backed by `rusqlite` and `tokio-rusqlite`
//!
//! Both are owned by the repository, which is their only writer.

pub mod remote;
pub mod sqlite;

pub use remote::RemoteDataSource;
pub use sqlite::SqliteDataSource;
