//! Data Transfer Objects for the HTTP API.
//!
//! Response bodies are mostly the view types from the routes module; this
//! module adds the request-side query types and a few envelopes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    CategoryOverview, DatasetInfo, DatasetOverview, FilterBounds, SessionInfo, ViewModel,
};
use crate::models::{DateRange, FilterCriteria, ValueRange};
use crate::services::RenderOptions;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of category datasets loaded
    pub datasets_loaded: usize,
}

/// Response for the dataset listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetListResponse {
    pub datasets: Vec<DatasetInfo>,
    pub total: usize,
}

/// Introduction-tab response covering every category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub datasets: Vec<DatasetOverview>,
}

/// Query parameters for channel rankings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TopNQuery {
    /// N for the channel-views ranking
    #[serde(default)]
    pub views_top: Option<usize>,
    /// N for the channel-count ranking
    #[serde(default)]
    pub counts_top: Option<usize>,
}

impl TopNQuery {
    /// Render options with the requested N values applied.
    pub fn apply(&self, options: &RenderOptions) -> RenderOptions {
        RenderOptions {
            views_top: self.views_top.unwrap_or(options.views_top),
            counts_top: self.counts_top.unwrap_or(options.counts_top),
            ..*options
        }
    }
}

/// Query parameters for the detail view.
///
/// Omitted bounds fall back to the observed bounds of the category table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewQuery {
    /// First publication date, `YYYY-MM-DD`
    #[serde(default)]
    pub start: Option<String>,
    /// Last publication date, `YYYY-MM-DD`
    #[serde(default)]
    pub end: Option<String>,
    /// Channel to keep; omitted or empty keeps every channel
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub min_views: Option<u64>,
    #[serde(default)]
    pub max_views: Option<u64>,
    #[serde(default)]
    pub min_duration: Option<u64>,
    #[serde(default)]
    pub max_duration: Option<u64>,
    #[serde(default)]
    pub views_top: Option<usize>,
    #[serde(default)]
    pub counts_top: Option<usize>,
}

impl ViewQuery {
    /// Build filter criteria, filling gaps from `bounds`.
    ///
    /// # Errors
    /// Returns a message naming the parameter when a date is not `YYYY-MM-DD`.
    pub fn to_criteria(&self, bounds: &FilterBounds) -> Result<FilterCriteria, String> {
        let start = parse_date("start", self.start.as_deref())?;
        let end = parse_date("end", self.end.as_deref())?;

        // A filled-in bound never crosses the supplied one
        let observed = bounds.date_range;
        let date_range = match (start, end, observed) {
            (None, None, observed) => observed,
            (Some(s), Some(e), _) => Some(DateRange::new(s, e)),
            (Some(s), None, observed) => {
                Some(DateRange::new(s, observed.map_or(s, |r| r.end.max(s))))
            }
            (None, Some(e), observed) => {
                Some(DateRange::new(observed.map_or(e, |r| r.start.min(e)), e))
            }
        };

        // Channel names are matched exactly; only a blank value means "all"
        let channel = self
            .channel
            .as_ref()
            .filter(|c| !c.trim().is_empty())
            .cloned();

        Ok(FilterCriteria {
            date_range,
            channel,
            views_range: fill_range(self.min_views, self.max_views, bounds.views),
            duration_range: fill_range(self.min_duration, self.max_duration, bounds.duration),
        })
    }

    /// Top-N part of the query.
    pub fn top_n(&self) -> TopNQuery {
        TopNQuery {
            views_top: self.views_top,
            counts_top: self.counts_top,
        }
    }
}

fn parse_date(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| format!("Invalid {} date '{}': {}", name, raw, e)),
    }
}

/// Fill omitted bounds from `observed`. Only a range with both bounds
/// supplied can come out inverted.
fn fill_range(min: Option<u64>, max: Option<u64>, observed: Option<ValueRange>) -> ValueRange {
    let fallback = observed.unwrap_or_else(ValueRange::unbounded);
    match (min, max) {
        (Some(min), Some(max)) => ValueRange::new(min, max),
        (Some(min), None) => ValueRange::new(min, fallback.max.max(min)),
        (None, Some(max)) => ValueRange::new(fallback.min.min(max), max),
        (None, None) => fallback,
    }
}
