//! Default repository over a remote and a local data source.
//!
//! The remote store is the source of truth. The local mirror is consulted
//! only when the remote fails, and is rewritten from every successful
//! remote fetch.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use duns_core::dun::Dun;
use duns_core::storage::{
    DataSourceError, DunDataSource, DunsRepository, RepositoryError, RepositoryResult,
};

use super::cache::CacheState;

/// Repository that loads duns from the data sources into an in-memory cache.
///
/// # Type Parameters
///
/// * `R` - The remote data source (source of truth)
/// * `L` - The local data source (fallback and mirror)
pub struct DefaultDunsRepository<R, L>
where
    R: DunDataSource,
    L: DunDataSource,
{
    remote: Arc<R>,
    local: Arc<L>,
    cache: RwLock<CacheState>,
}

impl<R, L> DefaultDunsRepository<R, L>
where
    R: DunDataSource,
    L: DunDataSource,
{
    /// Creates a new repository with an uninitialized cache.
    ///
    /// # Arguments
    ///
    /// * `remote` - The authoritative data source
    /// * `local` - The durable mirror used as a fallback
    pub fn new(remote: Arc<R>, local: Arc<L>) -> Self {
        Self {
            remote,
            local,
            cache: RwLock::new(CacheState::default()),
        }
    }

    /// Returns true once the cache has been filled or written to.
    pub async fn is_cache_populated(&self) -> bool {
        self.cache.read().await.is_populated()
    }

    async fn fetch_duns_from_remote_or_local(
        &self,
        force_update: bool,
    ) -> RepositoryResult<Vec<Dun>> {
        let remote_error = match self.remote.get_duns().await {
            Ok(duns) => {
                self.refresh_local_data_source(&duns).await;
                return Ok(duns);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Remote data source fetch failed");
                err
            }
        };

        // Don't read from local if it's forced
        if force_update {
            return Err(RepositoryError::ForceRefreshUnavailable(remote_error));
        }

        self.local
            .get_duns()
            .await
            .map_err(|local| RepositoryError::Exhausted {
                remote: remote_error,
                local,
            })
    }

    async fn fetch_dun_from_remote_or_local(
        &self,
        id: &str,
        force_update: bool,
    ) -> RepositoryResult<Dun> {
        let remote_error = match self.remote.get_dun(id).await {
            Ok(dun) => {
                if let Err(err) = self.local.save_dun(&dun).await {
                    tracing::warn!(dun_id = %id, error = %err, "Failed to mirror dun locally");
                }
                return Ok(dun);
            }
            Err(err) => {
                tracing::warn!(dun_id = %id, error = %err, "Remote data source fetch failed");
                err
            }
        };

        if force_update {
            return Err(RepositoryError::ForceRefreshUnavailable(remote_error));
        }

        self.local
            .get_dun(id)
            .await
            .map_err(|local| RepositoryError::Exhausted {
                remote: remote_error,
                local,
            })
    }

    /// Replaces the local mirror with a fresh remote listing.
    async fn refresh_local_data_source(&self, duns: &[Dun]) {
        if let Err(err) = self.mirror_locally(duns).await {
            tracing::warn!(error = %err, "Failed to refresh local data source");
        }
    }

    async fn mirror_locally(&self, duns: &[Dun]) -> Result<(), DataSourceError> {
        self.local.delete_all_duns().await?;
        for dun in duns {
            self.local.save_dun(dun).await?;
        }
        tracing::trace!(count = duns.len(), "Local data source refreshed");
        Ok(())
    }

    /// Stores a copy of the dun in the cache and returns another copy to
    /// hand to the data sources.
    async fn cache_dun(&self, dun: Dun) -> Dun {
        self.cache.write().await.upsert(dun.clone());
        dun
    }

    /// Turns the outcome of a dual write into the operation result.
    fn finish_write(
        &self,
        operation: &'static str,
        remote: Result<(), DataSourceError>,
        local: Result<(), DataSourceError>,
    ) -> RepositoryResult<()> {
        match RepositoryError::from_dual_write(remote, local) {
            Some(err) => {
                tracing::warn!(operation, error = %err, "Dual write failed");
                Err(err)
            }
            None => {
                tracing::debug!(operation, "Dual write completed");
                Ok(())
            }
        }
    }
}

/// Chooses what `get_duns` returns once a fetch has been attempted.
///
/// A non-empty cache snapshot always wins. Otherwise an explicitly empty
/// fetch is a success and a failed fetch reports its own error. A fetch that
/// returned duns while the cache ended up empty should not happen and is
/// reported as `IllegalState`.
fn resolve_fetched(
    snapshot: Vec<Dun>,
    fetched: RepositoryResult<Vec<Dun>>,
) -> RepositoryResult<Vec<Dun>> {
    if !snapshot.is_empty() {
        return Ok(snapshot);
    }

    match fetched {
        Ok(duns) if duns.is_empty() => Ok(duns),
        Ok(_) => Err(RepositoryError::IllegalState),
        Err(err) => Err(err),
    }
}

#[async_trait]
impl<R, L> DunsRepository for DefaultDunsRepository<R, L>
where
    R: DunDataSource + 'static,
    L: DunDataSource + 'static,
{
    async fn get_duns(&self, force_update: bool) -> RepositoryResult<Vec<Dun>> {
        // Respond immediately with cache if available
        if !force_update {
            let cache = self.cache.read().await;
            if !cache.is_empty() {
                tracing::trace!(count = cache.len(), "Cache hit for duns");
                return Ok(cache.snapshot());
            }
        }

        tracing::trace!(force_update, "Cache miss for duns");
        let fetched = self.fetch_duns_from_remote_or_local(force_update).await;

        let snapshot = {
            let mut cache = self.cache.write().await;
            if let Ok(duns) = &fetched {
                cache.replace_all(duns);
            }
            cache.snapshot()
        };

        resolve_fetched(snapshot, fetched)
    }

    async fn get_dun(&self, id: &str, force_update: bool) -> RepositoryResult<Dun> {
        if !force_update {
            if let Some(dun) = self.cache.read().await.get(id) {
                tracing::trace!(dun_id = %id, "Cache hit for dun");
                return Ok(dun);
            }
        }

        tracing::trace!(dun_id = %id, force_update, "Cache miss for dun");
        let fetched = self.fetch_dun_from_remote_or_local(id, force_update).await;

        if let Ok(dun) = &fetched {
            self.cache.write().await.upsert(dun.clone());
        }

        fetched
    }

    async fn save_dun(&self, dun: &Dun) -> RepositoryResult<()> {
        // Update the cache first to keep consumers up to date
        let cached = self.cache_dun(dun.clone()).await;

        let (remote, local) = tokio::join!(
            self.remote.save_dun(&cached),
            self.local.save_dun(&cached)
        );
        tracing::debug!(dun_id = %cached.id, "Dun saved");
        self.finish_write("save", remote, local)
    }

    async fn complete_dun(&self, dun: &Dun) -> RepositoryResult<()> {
        let cached = self.cache_dun(dun.clone().with_completed(true)).await;

        let (remote, local) = tokio::join!(
            self.remote.complete_dun(&cached),
            self.local.complete_dun(&cached)
        );
        tracing::debug!(dun_id = %cached.id, "Dun completed");
        self.finish_write("complete", remote, local)
    }

    async fn complete_dun_by_id(&self, id: &str) -> RepositoryResult<()> {
        let cached = self.cache.read().await.get(id);
        match cached {
            Some(dun) => self.complete_dun(&dun).await,
            None => {
                tracing::trace!(dun_id = %id, "Complete skipped, dun not cached");
                Ok(())
            }
        }
    }

    async fn activate_dun(&self, dun: &Dun) -> RepositoryResult<()> {
        let cached = self.cache_dun(dun.clone().with_completed(false)).await;

        let (remote, local) = tokio::join!(
            self.remote.activate_dun(&cached),
            self.local.activate_dun(&cached)
        );
        tracing::debug!(dun_id = %cached.id, "Dun activated");
        self.finish_write("activate", remote, local)
    }

    async fn activate_dun_by_id(&self, id: &str) -> RepositoryResult<()> {
        let cached = self.cache.read().await.get(id);
        match cached {
            Some(dun) => self.activate_dun(&dun).await,
            None => {
                tracing::trace!(dun_id = %id, "Activate skipped, dun not cached");
                Ok(())
            }
        }
    }

    async fn clear_completed_duns(&self) -> RepositoryResult<()> {
        let (remote, local) = tokio::join!(
            self.remote.clear_completed_duns(),
            self.local.clear_completed_duns()
        );

        self.cache.write().await.remove_completed();
        tracing::debug!("Completed duns cleared");
        self.finish_write("clear_completed", remote, local)
    }

    async fn delete_all_duns(&self) -> RepositoryResult<()> {
        let (remote, local) = tokio::join!(
            self.remote.delete_all_duns(),
            self.local.delete_all_duns()
        );

        self.cache.write().await.clear();
        tracing::debug!("All duns deleted");
        self.finish_write("delete_all", remote, local)
    }

    async fn delete_dun(&self, id: &str) -> RepositoryResult<()> {
        let (remote, local) = tokio::join!(self.remote.delete_dun(id), self.local.delete_dun(id));

        self.cache.write().await.remove(id);
        tracing::debug!(dun_id = %id, "Dun deleted");
        self.finish_write("delete", remote, local)
    }
}
