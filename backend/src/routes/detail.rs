use serde::{Deserialize, Serialize};

use super::category::{CategoryOverview, DailyMeanPoint, SummaryMetrics};
use super::overview::VideoRow;
use crate::models::{ActivePanel, Category, DateRange, FilterCriteria, PanelFlags, ValueRange};

// =========================================================
// Detail panel types + routes
// =========================================================

/// Observed bounds of a table, used to seed and limit the filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBounds {
    pub category: Category,
    pub date_range: Option<DateRange>,
    pub views: Option<ValueRange>,
    pub duration: Option<ValueRange>,
    /// Distinct channel names in alphabetical order.
    pub channels: Vec<String>,
}

/// Point of the duration-vs-views scatter plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub title: String,
    pub duration: u64,
    pub views: u64,
}

/// Non-fatal conditions met while rendering a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewWarning {
    /// No row satisfied the filter.
    EmptyResult,
    /// A range control had its lower bound above its upper bound.
    InvalidRange { field: String },
}

/// Drill-down view computed from the filtered table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailView {
    pub criteria: FilterCriteria,
    pub bounds: FilterBounds,
    pub summary: SummaryMetrics,
    pub daily_mean_views: Vec<DailyMeanPoint>,
    /// Mean over the unfiltered category table.
    pub overall_mean_views: f64,
    pub top_videos: Vec<VideoRow>,
    pub scatter: Vec<ScatterPoint>,
    pub rows: Vec<VideoRow>,
    pub warnings: Vec<ViewWarning>,
}

/// Everything the presentation layer needs to draw one category tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewModel {
    pub category: Category,
    pub active_panel: ActivePanel,
    pub panels: PanelFlags,
    pub overview: CategoryOverview,
    /// Present only while this category's detail panel is active.
    pub detail: Option<DetailView>,
}

pub const GET_VIEW: &str = "/sessions/{session_id}/categories/{category}/view";
