use async_trait::async_trait;

use crate::dun::Dun;

use super::{RepositoryResult, Result};

/// A backing store of duns: the remote service or the local mirror.
///
/// Reads report failures as errors. Writes also return a result so callers
/// can tell which store rejected a mutation.
#[async_trait]
pub trait DunDataSource: Send + Sync {
    /// Gets every dun in the store.
    async fn get_duns(&self) -> Result<Vec<Dun>>;

    /// Gets a dun by its ID.
    async fn get_dun(&self, id: &str) -> Result<Dun>;

    /// Inserts or replaces a dun.
    async fn save_dun(&self, dun: &Dun) -> Result<()>;

    /// Marks the given dun as completed.
    async fn complete_dun(&self, dun: &Dun) -> Result<()>;

    /// Marks the dun with this ID as completed.
    async fn complete_dun_by_id(&self, id: &str) -> Result<()>;

    /// Marks the given dun as active again.
    async fn activate_dun(&self, dun: &Dun) -> Result<()>;

    /// Marks the dun with this ID as active again.
    async fn activate_dun_by_id(&self, id: &str) -> Result<()>;

    /// Removes every completed dun.
    async fn clear_completed_duns(&self) -> Result<()>;

    /// Removes every dun.
    async fn delete_all_duns(&self) -> Result<()>;

    /// Removes a dun by its ID. Removing an absent ID succeeds.
    async fn delete_dun(&self, id: &str) -> Result<()>;
}

/// Single read/write entry point over the remote store, the local mirror
/// and an in-memory cache.
#[async_trait]
pub trait DunsRepository: Send + Sync {
    /// Gets all duns sorted by ID, from the cache unless `force_update` is set.
    async fn get_duns(&self, force_update: bool) -> RepositoryResult<Vec<Dun>>;

    /// Gets a dun by its ID, from the cache unless `force_update` is set.
    async fn get_dun(&self, id: &str, force_update: bool) -> RepositoryResult<Dun>;

    /// Saves a dun to the cache and both stores.
    async fn save_dun(&self, dun: &Dun) -> RepositoryResult<()>;

    /// Saves the dun as completed.
    async fn complete_dun(&self, dun: &Dun) -> RepositoryResult<()>;

    /// Completes the cached dun with this ID. A cache miss does nothing.
    async fn complete_dun_by_id(&self, id: &str) -> RepositoryResult<()>;

    /// Saves the dun as active.
    async fn activate_dun(&self, dun: &Dun) -> RepositoryResult<()>;

    /// Activates the cached dun with this ID. A cache miss does nothing.
    async fn activate_dun_by_id(&self, id: &str) -> RepositoryResult<()>;

    /// Removes completed duns everywhere.
    async fn clear_completed_duns(&self) -> RepositoryResult<()>;

    /// Removes every dun everywhere.
    async fn delete_all_duns(&self) -> RepositoryResult<()>;

    /// Removes a dun everywhere.
    async fn delete_dun(&self, id: &str) -> RepositoryResult<()>;
}
