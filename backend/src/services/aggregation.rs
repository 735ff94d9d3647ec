//! Aggregation engine: pure reductions over a (possibly filtered) table.
//!
//! Every ranking here is deterministic. Groups are formed in order of first
//! appearance and then stable-sorted, so equal metrics keep table order.

use std::collections::{BTreeMap, HashMap};

use crate::api::{ChannelMetric, DailyMeanPoint, SummaryMetrics, TopChannels};
use crate::models::{VideoRecord, VideoTable};

/// Upper bound on the selectable number of channels in a ranking.
pub const MAX_TOP_CHANNELS: usize = 20;

/// Initial number of channels shown in a ranking.
pub const DEFAULT_TOP_CHANNELS: usize = 5;

/// Number of videos in the top-videos chart.
pub const TOP_VIDEOS: usize = 10;

/// Video count, total duration and total views. All zero for an empty table.
pub fn summary_metrics(table: &VideoTable) -> SummaryMetrics {
    table.iter().fold(SummaryMetrics::default(), |acc, r| SummaryMetrics {
        video_count: acc.video_count + 1,
        total_duration: acc.total_duration.saturating_add(r.duration),
        total_views: acc.total_views.saturating_add(r.views),
    })
}

/// Mean views per distinct publication date, ascending by date.
pub fn daily_mean_views(table: &VideoTable) -> Vec<DailyMeanPoint> {
    let mut by_date: BTreeMap<chrono::NaiveDate, (u64, usize)> = BTreeMap::new();
    for record in table {
        let entry = by_date.entry(record.published_date).or_insert((0, 0));
        entry.0 = entry.0.saturating_add(record.views);
        entry.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| DailyMeanPoint {
            date,
            mean_views: mean(sum, count),
        })
        .collect()
}

/// Mean views across the whole table, 0.0 when empty.
///
/// Callers pass the unfiltered category table: the result is the reference
/// line drawn next to filtered charts.
pub fn overall_mean_views(table: &VideoTable) -> f64 {
    let summary = summary_metrics(table);
    mean(summary.total_views, summary.video_count)
}

/// Total views per channel, descending.
pub fn channel_view_totals(table: &VideoTable) -> Vec<ChannelMetric> {
    rank_channels(table, |r| r.views)
}

/// Number of videos per channel, descending.
pub fn channel_video_counts(table: &VideoTable) -> Vec<ChannelMetric> {
    rank_channels(table, |_| 1)
}

/// Largest selectable N for a ranking with `distinct` channels.
pub fn top_n_limit(distinct: usize) -> usize {
    distinct.min(MAX_TOP_CHANNELS)
}

/// Clamp a requested N into `[1, min(cap, len)]`; 0 when there is nothing to rank.
pub fn clamp_top_n(requested: usize, len: usize, cap: usize) -> usize {
    let limit = len.min(cap);
    if limit == 0 {
        return 0;
    }
    requested.clamp(1, limit)
}

/// First N rows of a ranking, N clamped to `[1, min(20, len)]`.
pub fn top_n(ranked: &[ChannelMetric], n: usize) -> Vec<ChannelMetric> {
    top_n_capped(ranked, n, MAX_TOP_CHANNELS).channels
}

/// First N rows of a ranking with an explicit cap on N.
pub fn top_n_capped(ranked: &[ChannelMetric], n: usize, cap: usize) -> TopChannels {
    let clamped = clamp_top_n(n, ranked.len(), cap);
    TopChannels {
        n: clamped,
        max_n: ranked.len().min(cap),
        channels: ranked[..clamped].to_vec(),
    }
}

/// The `limit` most viewed videos, descending by views. Ties keep table order.
pub fn top_videos_by_views(table: &VideoTable, limit: usize) -> VideoTable {
    let mut sorted: Vec<&VideoRecord> = table.iter().collect();
    sorted.sort_by(|a, b| b.views.cmp(&a.views));
    sorted.into_iter().take(limit).cloned().collect()
}

fn rank_channels<F>(table: &VideoTable, metric: F) -> Vec<ChannelMetric>
where
    F: Fn(&VideoRecord) -> u64,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ChannelMetric> = Vec::new();

    for record in table {
        let value = metric(record);
        match index.get(record.channel_name.as_str()) {
            Some(&i) => groups[i].value = groups[i].value.saturating_add(value),
            None => {
                index.insert(record.channel_name.as_str(), groups.len());
                groups.push(ChannelMetric {
                    channel_name: record.channel_name.clone(),
                    value,
                });
            }
        }
    }

    groups.sort_by(|a, b| b.value.cmp(&a.value));
    groups
}

fn mean(sum: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
