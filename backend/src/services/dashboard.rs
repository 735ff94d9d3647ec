//! Render pass for one category tab.
//!
//! [`render`] is a pure function of the category table, the filter criteria
//! and the session's active panel. Handlers call it once per interaction;
//! concurrent calls share nothing but the read-only table.

use crate::api::{
    CategoryOverview, DatasetOverview, DetailView, FilterBounds, ScatterPoint, VideoRow,
    ViewModel, ViewWarning,
};
use crate::models::{
    ActivePanel, Category, DateRange, FilterCriteria, ValueRange, VideoTable,
};
use crate::services::aggregation::{
    channel_video_counts, channel_view_totals, daily_mean_views, overall_mean_views,
    summary_metrics, top_n_capped, top_videos_by_views, DEFAULT_TOP_CHANNELS, MAX_TOP_CHANNELS,
    TOP_VIDEOS,
};
use crate::services::filtering::apply_filters;
use crate::services::statistics::{duration_stats, views_stats};

/// Number of columns in a category dataset.
pub const DATASET_COLUMNS: usize = 7;

/// Tunables for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Requested N for the channel-views ranking.
    pub views_top: usize,
    /// Requested N for the channel-count ranking.
    pub counts_top: usize,
    pub max_top_n: usize,
    pub top_videos: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            views_top: DEFAULT_TOP_CHANNELS,
            counts_top: DEFAULT_TOP_CHANNELS,
            max_top_n: MAX_TOP_CHANNELS,
            top_videos: TOP_VIDEOS,
        }
    }
}

/// Always-visible section of a category tab, over the full table.
pub fn category_overview(
    category: Category,
    table: &VideoTable,
    options: &RenderOptions,
) -> CategoryOverview {
    CategoryOverview {
        category,
        summary: summary_metrics(table),
        daily_mean_views: daily_mean_views(table),
        overall_mean_views: overall_mean_views(table),
        top_channels_by_views: top_n_capped(
            &channel_view_totals(table),
            options.views_top,
            options.max_top_n,
        ),
        top_channels_by_count: top_n_capped(
            &channel_video_counts(table),
            options.counts_top,
            options.max_top_n,
        ),
    }
}

/// Observed bounds and channel options of a table.
pub fn filter_bounds(category: Category, table: &VideoTable) -> FilterBounds {
    FilterBounds {
        category,
        date_range: table
            .date_bounds()
            .map(|(start, end)| DateRange::new(start, end)),
        views: table.views_bounds().map(|(min, max)| ValueRange::new(min, max)),
        duration: table
            .duration_bounds()
            .map(|(min, max)| ValueRange::new(min, max)),
        channels: table.channel_names(),
    }
}

/// Drill-down section computed from the filtered table.
///
/// `table` is the unfiltered category table; the overall mean is taken from
/// it while every other figure comes from the filtered rows.
pub fn detail_view(
    category: Category,
    table: &VideoTable,
    criteria: &FilterCriteria,
    options: &RenderOptions,
) -> DetailView {
    let mut warnings = Vec::new();
    for field in criteria.inverted_ranges() {
        log::warn!(
            "Inverted {} range in {} filter; matching nothing",
            field,
            category
        );
        warnings.push(ViewWarning::InvalidRange {
            field: field.to_string(),
        });
    }

    let filtered = apply_filters(table, criteria);
    if filtered.is_empty() {
        warnings.push(ViewWarning::EmptyResult);
    }

    DetailView {
        criteria: criteria.clone(),
        bounds: filter_bounds(category, table),
        summary: summary_metrics(&filtered),
        daily_mean_views: daily_mean_views(&filtered),
        overall_mean_views: overall_mean_views(table),
        top_videos: top_videos_by_views(&filtered, options.top_videos)
            .iter()
            .map(VideoRow::from)
            .collect(),
        scatter: filtered
            .iter()
            .map(|r| ScatterPoint {
                title: r.title.clone(),
                duration: r.duration,
                views: r.views,
            })
            .collect(),
        rows: filtered.iter().map(VideoRow::from).collect(),
        warnings,
    }
}

/// Full view model for one category tab.
pub fn render(
    category: Category,
    table: &VideoTable,
    criteria: &FilterCriteria,
    active_panel: ActivePanel,
    options: &RenderOptions,
) -> ViewModel {
    log::debug!(
        "Rendering {} ({} rows), panel {:?}",
        category,
        table.len(),
        active_panel
    );

    let detail = active_panel
        .is_active(category)
        .then(|| detail_view(category, table, criteria, options));

    ViewModel {
        category,
        active_panel,
        panels: active_panel.flags(),
        overview: category_overview(category, table, options),
        detail,
    }
}

/// Introduction-tab description of a dataset.
pub fn dataset_overview(
    category: Category,
    table: &VideoTable,
    preview_rows: usize,
) -> DatasetOverview {
    DatasetOverview {
        category,
        total_videos: table.len(),
        total_columns: DATASET_COLUMNS,
        views_stats: views_stats(table),
        duration_stats: duration_stats(table),
        preview: table
            .iter()
            .take(preview_rows)
            .map(VideoRow::from)
            .collect(),
    }
}
