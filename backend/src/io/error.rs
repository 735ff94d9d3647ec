//! Error type for dataset loading.

use polars::prelude::PolarsError;
use std::path::PathBuf;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// A dataset could not be turned into a [`VideoTable`](crate::models::VideoTable).
///
/// Load errors are fatal at startup; nothing retries them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dataset not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed value in column '{column}' at row {row}: {message}")]
    Malformed {
        row: usize,
        column: String,
        message: String,
    },
}

impl LoadError {
    pub(crate) fn malformed(row: usize, column: &str, message: impl Into<String>) -> Self {
        LoadError::Malformed {
            row,
            column: column.to_string(),
            message: message.into(),
        }
    }
}
