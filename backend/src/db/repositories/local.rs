//! In-memory dataset repository.
//!
//! Tables are inserted once by the factory and handed out as `Arc`s, so a
//! render pass never copies or mutates a loaded table.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::DatasetInfo;
use crate::db::checksum::calculate_table_checksum;
use crate::db::repository::{
    DatasetRepository, ErrorContext, RepositoryError, RepositoryResult,
};
use crate::io::DatasetLoadResult;
use crate::models::{Category, VideoTable};

#[derive(Debug, Clone)]
struct StoredDataset {
    table: Arc<VideoTable>,
    info: DatasetInfo,
}

/// In-memory repository keyed by category.
#[derive(Debug, Default)]
pub struct LocalRepository {
    datasets: RwLock<HashMap<Category, StoredDataset>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly loaded dataset, replacing any previous table for its category.
    pub fn store(&self, loaded: DatasetLoadResult) -> DatasetInfo {
        let info = DatasetInfo {
            category: loaded.category,
            rows: loaded.num_rows,
            source: loaded.source.display().to_string(),
            checksum: loaded.checksum,
        };
        self.datasets.write().insert(
            loaded.category,
            StoredDataset {
                table: Arc::new(loaded.table),
                info: info.clone(),
            },
        );
        info
    }

    /// Insert a table built in memory. The checksum is taken over its rows.
    pub fn insert_table(&self, category: Category, table: VideoTable) {
        let info = DatasetInfo {
            category,
            rows: table.len(),
            source: "memory".to_string(),
            checksum: calculate_table_checksum(&table),
        };
        self.datasets.write().insert(
            category,
            StoredDataset {
                table: Arc::new(table),
                info,
            },
        );
    }

    /// Build a repository from three in-memory tables.
    pub fn with_tables(gaming: VideoTable, movies: VideoTable, music: VideoTable) -> Self {
        let repo = Self::new();
        repo.insert_table(Category::Gaming, gaming);
        repo.insert_table(Category::Movies, movies);
        repo.insert_table(Category::Music, music);
        repo
    }

    fn not_loaded(category: Category, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Dataset {} is not loaded", category),
            ErrorContext::new(operation)
                .with_entity("dataset")
                .with_entity_id(category),
        )
    }
}

impl DatasetRepository for LocalRepository {
    fn table(&self, category: Category) -> RepositoryResult<Arc<VideoTable>> {
        self.datasets
            .read()
            .get(&category)
            .map(|d| Arc::clone(&d.table))
            .ok_or_else(|| Self::not_loaded(category, "table"))
    }

    fn dataset_info(&self, category: Category) -> RepositoryResult<DatasetInfo> {
        self.datasets
            .read()
            .get(&category)
            .map(|d| d.info.clone())
            .ok_or_else(|| Self::not_loaded(category, "dataset_info"))
    }

    fn list_datasets(&self) -> Vec<DatasetInfo> {
        let datasets = self.datasets.read();
        Category::ALL
            .iter()
            .filter_map(|c| datasets.get(c).map(|d| d.info.clone()))
            .collect()
    }
}
