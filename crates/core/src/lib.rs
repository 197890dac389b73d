//! duns_core - domain types and storage contracts for duns.
//!
//! This crate holds the pure parts of the project: the [`dun::Dun`] record,
//! filtering and statistics over it, and the async traits that data sources
//! and repositories implement. It performs no I/O.

pub mod dun;
pub mod storage;
