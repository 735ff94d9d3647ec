use serde::{Deserialize, Serialize};

use crate::models::Category;

// =========================================================
// Dataset overview types + routes
// =========================================================

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

/// One row of a dataset preview or filtered listing.
///
/// The channel name is omitted: listings are always scoped to a channel
/// selection or shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRow {
    pub title: String,
    pub description: String,
    pub published_date: chrono::NaiveDate,
    pub views: u64,
    pub duration: u64,
    pub is_short: bool,
}

impl From<&crate::models::VideoRecord> for VideoRow {
    fn from(record: &crate::models::VideoRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            published_date: record.published_date,
            views: record.views,
            duration: record.duration,
            is_short: record.is_short,
        }
    }
}

/// Introduction-tab summary of a category dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetOverview {
    pub category: Category,
    pub total_videos: usize,
    pub total_columns: usize,
    pub views_stats: ColumnStats,
    pub duration_stats: ColumnStats,
    pub preview: Vec<VideoRow>,
}

/// Source information for a loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub category: Category,
    pub rows: usize,
    pub source: String,
    pub checksum: String,
}

pub const LIST_DATASETS: &str = "/datasets";
pub const GET_OVERVIEW: &str = "/overview";
