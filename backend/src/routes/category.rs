use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Category;

// =========================================================
// Category tab types + routes
// =========================================================

/// Video count, total duration and total views of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub video_count: usize,
    /// Seconds.
    pub total_duration: u64,
    pub total_views: u64,
}

/// Mean views of the videos published on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMeanPoint {
    pub date: NaiveDate,
    pub mean_views: f64,
}

/// Aggregated metric for one channel (total views or video count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMetric {
    pub channel_name: String,
    pub value: u64,
}

/// Leading rows of a channel ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopChannels {
    /// Number of rows actually returned after clamping.
    pub n: usize,
    /// Largest selectable N for this table.
    pub max_n: usize,
    pub channels: Vec<ChannelMetric>,
}

/// Always-visible part of a category tab, computed from the full table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOverview {
    pub category: Category,
    pub summary: SummaryMetrics,
    pub daily_mean_views: Vec<DailyMeanPoint>,
    pub overall_mean_views: f64,
    pub top_channels_by_views: TopChannels,
    pub top_channels_by_count: TopChannels,
}

pub const GET_CATEGORY_OVERVIEW: &str = "/categories/{category}";
pub const GET_FILTER_BOUNDS: &str = "/categories/{category}/filters";
