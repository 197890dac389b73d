//! duns - keep track of the sites you plan to visit, online or offline.
//!
//! Duns live in a remote store that is the source of truth, mirrored into a
//! local SQLite database and cached in memory by the repository.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod repository;
pub mod service;
pub mod state;
pub mod storage;

pub use config::Config;
pub use error::{Result, ServiceError};
pub use service::DunsService;
pub use state::AppState;
