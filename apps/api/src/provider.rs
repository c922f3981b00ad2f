//! Data provider — the read/write seam between handlers and data origin.
//!
//! Default: `MockDataProvider` (bundled catalog + in-memory profile).
//!
//! `AppState` holds an `Arc<dyn DataProvider>`, so a real job source can be
//! swapped in without touching handlers or the filter/validation code.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::jobs::catalog::Catalog;
use crate::models::job::{JobDetail, JobListing};
use crate::models::profile::UserProfile;
use crate::profile::seed::initial_profile;

#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobListing>, AppError>;

    /// `Ok(None)` for an unknown id; callers render a not-found state.
    async fn get_job_by_id(&self, id: &str) -> Result<Option<JobDetail>, AppError>;

    async fn get_profile(&self) -> Result<UserProfile, AppError>;

    /// Replaces the committed profile. Callers validate first.
    async fn save_profile(&self, profile: UserProfile) -> Result<(), AppError>;
}

/// Session-scoped mock data. The profile lives for the process lifetime only.
pub struct MockDataProvider {
    catalog: Catalog,
    profile: RwLock<UserProfile>,
}

impl MockDataProvider {
    pub fn new(catalog: Catalog, profile: UserProfile) -> Self {
        MockDataProvider {
            catalog,
            profile: RwLock::new(profile),
        }
    }
}

impl Default for MockDataProvider {
    fn default() -> Self {
        MockDataProvider::new(Catalog::mock(), initial_profile())
    }
}

#[async_trait]
impl DataProvider for MockDataProvider {
    async fn list_jobs(&self) -> Result<Vec<JobListing>, AppError> {
        Ok(self.catalog.listings().to_vec())
    }

    async fn get_job_by_id(&self, id: &str) -> Result<Option<JobDetail>, AppError> {
        Ok(self.catalog.detail(id).cloned())
    }

    async fn get_profile(&self) -> Result<UserProfile, AppError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save_profile(&self, profile: UserProfile) -> Result<(), AppError> {
        *self.profile.write().await = profile;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lists_mock_jobs() {
        let provider = MockDataProvider::default();
        assert_eq!(provider.list_jobs().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let provider = MockDataProvider::default();
        assert!(provider.get_job_by_id("999").await.unwrap().is_none());
        assert!(provider.get_job_by_id("1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_save_replaces_profile() {
        let provider = MockDataProvider::default();
        let mut profile = provider.get_profile().await.unwrap();
        profile.title = "Principal Engineer".to_string();
        provider.save_profile(profile.clone()).await.unwrap();
        assert_eq!(provider.get_profile().await.unwrap(), profile);
    }
}
