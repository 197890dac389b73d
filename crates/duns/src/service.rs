//! Consumer-facing operations on duns.
//!
//! The service is what the command line talks to. It validates input,
//! applies filters and statistics from `duns_core::dun`, and delegates every
//! read and write to a `DunsRepository`.

use std::sync::Arc;

use duns_core::dun::{
    compute_statistics, filter_duns, validate_dun, Dun, DunFilter, Statistics,
};
use duns_core::storage::{DataSourceError, DunsRepository, RepositoryError};

use crate::error::{Result, ServiceError};

/// Dun operations over a shared repository.
#[derive(Clone)]
pub struct DunsService {
    repository: Arc<dyn DunsRepository>,
}

impl DunsService {
    pub fn new(repository: Arc<dyn DunsRepository>) -> Self {
        Self { repository }
    }

    /// Lists duns matching `filter`, sorted by id.
    pub async fn list(&self, filter: DunFilter, force_update: bool) -> Result<Vec<Dun>> {
        let duns = self.repository.get_duns(force_update).await?;
        Ok(filter_duns(&duns, filter))
    }

    /// Forces a refresh from the remote and returns every dun.
    pub async fn refresh(&self) -> Result<Vec<Dun>> {
        self.list(DunFilter::All, true).await
    }

    pub async fn get(&self, id: &str) -> Result<Dun> {
        self.repository
            .get_dun(id, false)
            .await
            .map_err(|err| not_found_or(err, id))
    }

    /// Percentages of active and completed duns.
    pub async fn statistics(&self, force_update: bool) -> Result<Statistics> {
        let duns = self.repository.get_duns(force_update).await?;
        Ok(compute_statistics(&duns))
    }

    /// Creates a new active dun with a fresh id.
    pub async fn create(&self, title: &str, description: &str) -> Result<Dun> {
        let dun = Dun::new(title, description);
        validate_dun(&dun)?;

        self.repository.save_dun(&dun).await?;
        tracing::debug!(dun_id = %dun.id, "Dun created");
        Ok(dun)
    }

    /// Replaces the text of an existing dun, keeping its completion state.
    ///
    /// Fields left as `None` keep their current value.
    pub async fn update(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Dun> {
        let existing = self.get(id).await?;

        let dun = Dun {
            title: title.map_or(existing.title, str::to_string),
            description: description.map_or(existing.description, str::to_string),
            ..existing
        };
        validate_dun(&dun)?;

        self.repository.save_dun(&dun).await?;
        tracing::debug!(dun_id = %dun.id, "Dun updated");
        Ok(dun)
    }

    /// Marks a dun completed or active again.
    pub async fn set_completed(&self, id: &str, completed: bool) -> Result<Dun> {
        // Loading first puts the dun in the repository cache, which the
        // by-id mutators resolve against
        let dun = self.get(id).await?;

        if completed {
            self.repository.complete_dun_by_id(id).await?;
        } else {
            self.repository.activate_dun_by_id(id).await?;
        }

        Ok(dun.with_completed(completed))
    }

    pub async fn clear_completed(&self) -> Result<()> {
        self.repository.clear_completed_duns().await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repository.delete_dun(id).await?;
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<()> {
        self.repository.delete_all_duns().await?;
        Ok(())
    }
}

/// Reports a lookup that no data source could satisfy as `NotFound`.
fn not_found_or(err: RepositoryError, id: &str) -> ServiceError {
    let missing = matches!(
        &err,
        RepositoryError::Exhausted {
            remote: DataSourceError::NotFound { .. },
            local: DataSourceError::NotFound { .. },
        } | RepositoryError::ForceRefreshUnavailable(DataSourceError::NotFound { .. })
    );

    if missing {
        ServiceError::NotFound { id: id.to_string() }
    } else {
        err.into()
    }
}
