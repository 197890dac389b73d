//! In-process remote data source with simulated latency.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use duns_core::dun::Dun;
use duns_core::storage::{DataSourceError, DunDataSource, Result};

/// Stand-in for the remote dun service.
///
/// Uses a map wrapped in `Arc<RwLock<_>>` for thread-safe access. Clones
/// share the same store and the same availability switch, so a test can
/// keep a handle and take the "network" down while a repository uses it.
#[derive(Debug, Clone)]
pub struct RemoteDataSource {
    duns: Arc<RwLock<BTreeMap<String, Dun>>>,
    latency: Duration,
    available: Arc<AtomicBool>,
}

impl Default for RemoteDataSource {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl RemoteDataSource {
    /// Creates an empty remote store whose reads take `latency` to answer.
    pub fn new(latency: Duration) -> Self {
        Self::seeded(latency, Vec::new())
    }

    /// Creates a remote store that already holds the given duns.
    pub fn seeded(latency: Duration, duns: Vec<Dun>) -> Self {
        let duns = duns.into_iter().map(|dun| (dun.id.clone(), dun)).collect();
        Self {
            duns: Arc::new(RwLock::new(duns)),
            latency,
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Simulates the network going down (`false`) or coming back (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
        tracing::debug!(available, "Remote availability changed");
    }

    /// Returns true if the remote currently answers requests.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(DataSourceError::Unavailable(
                "remote service is unreachable".to_string(),
            ))
        }
    }

    /// Waits out the simulated round trip, then checks availability.
    async fn round_trip(&self) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.ensure_available()
    }

    async fn set_completed(&self, id: &str, completed: bool) {
        let mut duns = self.duns.write().await;
        if let Some(dun) = duns.get_mut(id) {
            dun.completed = completed;
        }
    }
}

#[async_trait]
impl DunDataSource for RemoteDataSource {
    async fn get_duns(&self) -> Result<Vec<Dun>> {
        self.round_trip().await?;
        let duns = self.duns.read().await;
        Ok(duns.values().cloned().collect())
    }

    async fn get_dun(&self, id: &str) -> Result<Dun> {
        self.round_trip().await?;
        let duns = self.duns.read().await;
        duns.get(id).cloned().ok_or_else(|| DataSourceError::NotFound {
            id: id.to_string(),
        })
    }

    async fn save_dun(&self, dun: &Dun) -> Result<()> {
        self.ensure_available()?;
        let mut duns = self.duns.write().await;
        duns.insert(dun.id.clone(), dun.clone());
        Ok(())
    }

    async fn complete_dun(&self, dun: &Dun) -> Result<()> {
        self.ensure_available()?;
        let mut duns = self.duns.write().await;
        duns.insert(dun.id.clone(), dun.clone().with_completed(true));
        Ok(())
    }

    async fn complete_dun_by_id(&self, id: &str) -> Result<()> {
        self.ensure_available()?;
        self.set_completed(id, true).await;
        Ok(())
    }

    async fn activate_dun(&self, dun: &Dun) -> Result<()> {
        self.ensure_available()?;
        let mut duns = self.duns.write().await;
        duns.insert(dun.id.clone(), dun.clone().with_completed(false));
        Ok(())
    }

    async fn activate_dun_by_id(&self, id: &str) -> Result<()> {
        self.ensure_available()?;
        self.set_completed(id, false).await;
        Ok(())
    }

    async fn clear_completed_duns(&self) -> Result<()> {
        self.ensure_available()?;
        let mut duns = self.duns.write().await;
        duns.retain(|_, dun| !dun.completed);
        Ok(())
    }

    async fn delete_all_duns(&self) -> Result<()> {
        self.ensure_available()?;
        self.duns.write().await.clear();
        Ok(())
    }

    async fn delete_dun(&self, id: &str) -> Result<()> {
        self.ensure_available()?;
        self.duns.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dun(id: &str, title: &str) -> Dun {
        Dun::new(title, "").with_id(id)
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let remote = RemoteDataSource::default();
        let pisa = dun("a", "Pisa");

        remote.save_dun(&pisa).await.unwrap();

        assert_eq!(remote.get_dun("a").await.unwrap(), pisa);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let remote = RemoteDataSource::default();

        let result = remote.get_dun("missing").await;

        assert!(matches!(result, Err(DataSourceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_seeded_store_returns_duns_in_id_order() {
        let remote =
            RemoteDataSource::seeded(Duration::ZERO, vec![dun("b", "Tacoma"), dun("a", "Pisa")]);

        let duns = remote.get_duns().await.unwrap();

        let ids: Vec<_> = duns.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_wait_for_latency() {
        let remote = RemoteDataSource::new(Duration::from_millis(2000));
        let start = tokio::time::Instant::now();

        remote.get_duns().await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_unavailable_fails_reads_and_writes() {
        let remote = RemoteDataSource::seeded(Duration::ZERO, vec![dun("a", "Pisa")]);
        remote.set_available(false);

        assert!(matches!(
            remote.get_duns().await,
            Err(DataSourceError::Unavailable(_))
        ));
        assert!(matches!(
            remote.get_dun("a").await,
            Err(DataSourceError::Unavailable(_))
        ));
        assert!(matches!(
            remote.save_dun(&dun("b", "Tacoma")).await,
            Err(DataSourceError::Unavailable(_))
        ));

        remote.set_available(true);
        assert_eq!(remote.get_duns().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_complete_and_activate() {
        let remote = RemoteDataSource::default();
        let pisa = dun("a", "Pisa");
        remote.save_dun(&pisa).await.unwrap();

        remote.complete_dun(&pisa).await.unwrap();
        assert!(remote.get_dun("a").await.unwrap().completed);

        remote.activate_dun_by_id("a").await.unwrap();
        assert!(!remote.get_dun("a").await.unwrap().completed);

        remote.complete_dun_by_id("a").await.unwrap();
        assert!(remote.get_dun("a").await.unwrap().completed);
    }

    #[tokio::test]
    async fn test_complete_by_id_missing_is_noop() {
        let remote = RemoteDataSource::default();

        remote.complete_dun_by_id("missing").await.unwrap();

        assert!(remote.get_duns().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_completed_keeps_active() {
        let remote = RemoteDataSource::seeded(
            Duration::ZERO,
            vec![dun("a", "Pisa"), dun("b", "Tacoma").with_completed(true)],
        );

        remote.clear_completed_duns().await.unwrap();

        let duns = remote.get_duns().await.unwrap();
        assert_eq!(duns.len(), 1);
        assert_eq!(duns[0].id, "a");
    }

    #[tokio::test]
    async fn test_delete_and_delete_all() {
        let remote =
            RemoteDataSource::seeded(Duration::ZERO, vec![dun("a", "Pisa"), dun("b", "Tacoma")]);

        remote.delete_dun("a").await.unwrap();
        remote.delete_dun("missing").await.unwrap();
        assert_eq!(remote.get_duns().await.unwrap().len(), 1);

        remote.delete_all_duns().await.unwrap();
        assert!(remote.get_duns().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_store_and_availability() {
        let remote = RemoteDataSource::default();
        let handle = remote.clone();

        remote.save_dun(&dun("a", "Pisa")).await.unwrap();
        handle.set_available(false);

        assert!(!remote.is_available());
        handle.set_available(true);
        assert_eq!(handle.get_duns().await.unwrap().len(), 1);
    }
}
