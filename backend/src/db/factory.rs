//! Repository factory.
//!
//! Builds the in-memory repository from the configured dataset files. Every
//! category must load; a single malformed file aborts startup.

use std::sync::Arc;

use super::repo_config::DashboardConfig;
use super::repositories::LocalRepository;
use super::repository::{DatasetRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::io::DatasetLoader;
use crate::models::Category;

/// Repository factory for creating repository instances.
///
/// # Example
/// ```no_run
/// use ytdash::db::{DashboardConfig, RepositoryFactory};
///
/// let config = DashboardConfig::load().unwrap();
/// let repo = RepositoryFactory::load_from_config(&config).unwrap();
/// assert!(repo.health_check());
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<LocalRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Load the three category datasets named by `config`.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn DatasetRepository>)` - Repository with every category loaded
    /// * `Err(RepositoryError::Load)` - If any dataset is missing or malformed
    pub fn load_from_config(
        config: &DashboardConfig,
    ) -> RepositoryResult<Arc<dyn DatasetRepository>> {
        let repo = Self::create_local();

        for category in Category::ALL {
            let path = config.dataset_path(category);
            let loaded = DatasetLoader::load_from_file(category, &path).map_err(|e| {
                RepositoryError::load_with_context(
                    e,
                    ErrorContext::new("load_datasets")
                        .with_entity("dataset")
                        .with_entity_id(category)
                        .with_details(path.display().to_string()),
                )
            })?;
            let info = repo.store(loaded);
            log::info!(
                "Loaded {} dataset: {} rows (checksum {})",
                category,
                info.rows,
                &info.checksum[..info.checksum.len().min(12)]
            );
        }

        Ok(repo as Arc<dyn DatasetRepository>)
    }
}
