//! SQLite local data source.
//!
//! This module provides the durable on-device mirror of the remote store,
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for
//! async wrapping. The repository falls back to it when the remote fails
//! and writes every successful remote fetch through to it.

mod conversions;
mod error;
mod schema;
mod source;

pub use source::SqliteDataSource;
