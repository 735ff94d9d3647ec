//! Service layer for aggregation, filtering and rendering.
//!
//! Everything here is a pure function of immutable tables, except the
//! session tracker which owns the per-user panel selector.

pub mod aggregation;
pub mod dashboard;
pub mod filtering;
pub mod session_tracker;
pub mod statistics;

#[cfg(test)]
mod filtering_tests;

pub use aggregation::{
    channel_video_counts, channel_view_totals, daily_mean_views, overall_mean_views,
    summary_metrics, top_n, top_videos_by_views,
};
pub use dashboard::{
    category_overview, dataset_overview, detail_view, filter_bounds, render, RenderOptions,
};
pub use filtering::apply_filters;
pub use session_tracker::SessionTracker;
