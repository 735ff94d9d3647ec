//! Repository trait for loaded category datasets.
//!
//! Tables are loaded once at startup and are read-only afterwards; callers
//! receive shared handles and never mutate them.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use std::fmt;
use std::sync::Arc;

use crate::api::DatasetInfo;
use crate::models::{Category, VideoTable};

/// Repository of the three category tables.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across handlers.
pub trait DatasetRepository: Send + Sync + fmt::Debug {
    /// Shared handle to a category's table.
    ///
    /// # Returns
    /// * `Ok(Arc<VideoTable>)` - The immutable table
    /// * `Err(RepositoryError::NotFound)` - If the category was never loaded
    fn table(&self, category: Category) -> RepositoryResult<Arc<VideoTable>>;

    /// Source information for a loaded dataset.
    fn dataset_info(&self, category: Category) -> RepositoryResult<DatasetInfo>;

    /// Source information for every loaded dataset, in tab order.
    fn list_datasets(&self) -> Vec<DatasetInfo>;

    /// Whether all three categories are loaded.
    fn health_check(&self) -> bool {
        self.list_datasets().len() == Category::ALL.len()
    }
}
