//! Application state wiring the data sources, repository and service.

use std::sync::Arc;

use duns_core::dun::seed_duns;
use duns_core::storage::{DunDataSource, Result};

use crate::config::Config;
use crate::repository::DefaultDunsRepository;
use crate::service::DunsService;
use crate::storage::{RemoteDataSource, SqliteDataSource};

/// Shared application state.
///
/// Holds the service the command line talks to, plus a handle on the remote
/// so its availability can be switched at runtime.
#[derive(Clone)]
pub struct AppState {
    pub service: DunsService,
    pub remote: RemoteDataSource,
}

impl AppState {
    /// Builds the state from configuration, opening the SQLite mirror at
    /// `config.sqlite_path`.
    pub async fn new(config: &Config) -> Result<Self> {
        let local = SqliteDataSource::new(&config.sqlite_path).await?;
        Self::with_local(config, local).await
    }

    /// Builds the state over an in-memory SQLite mirror.
    pub async fn in_memory(config: &Config) -> Result<Self> {
        let local = SqliteDataSource::new_in_memory().await?;
        Self::with_local(config, local).await
    }

    async fn with_local(config: &Config, local: SqliteDataSource) -> Result<Self> {
        // The remote lives in-process, so it starts from the last mirrored
        // state. Demo duns are seeded once per database, never again after
        // the user empties it.
        let mut initial = local.get_duns().await?;
        if initial.is_empty() && config.seed_remote && !is_seeded(&local).await? {
            initial = seed_duns();
            for dun in &initial {
                local.save_dun(dun).await?;
            }
            local.set_meta(SEEDED_KEY, "true").await?;
            tracing::debug!(count = initial.len(), "Seeded demo duns");
        }

        tracing::debug!(
            count = initial.len(),
            latency_ms = config.remote_latency_ms,
            offline = config.offline,
            "Starting remote data source"
        );

        let remote = RemoteDataSource::seeded(config.remote_latency(), initial);
        remote.set_available(!config.offline);

        let repository = DefaultDunsRepository::new(Arc::new(remote.clone()), Arc::new(local));

        Ok(Self {
            service: DunsService::new(Arc::new(repository)),
            remote,
        })
    }
}

const SEEDED_KEY: &str = "seeded";

async fn is_seeded(local: &SqliteDataSource) -> Result<bool> {
    Ok(local.get_meta(SEEDED_KEY).await?.is_some())
}
