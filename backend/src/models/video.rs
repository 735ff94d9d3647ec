//! Video records and the immutable per-category tables built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three independent video datasets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gaming,
    Movies,
    Music,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Gaming, Category::Movies, Category::Music];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gaming => "gaming",
            Category::Movies => "movies",
            Category::Music => "music",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gaming" => Ok(Category::Gaming),
            "movies" | "movie" => Ok(Category::Movies),
            "music" => Ok(Category::Music),
            other => Err(format!(
                "Unknown category: {}. Must be 'gaming', 'movies', or 'music'",
                other
            )),
        }
    }
}

/// A single video row. All three category tables share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub description: String,
    /// Publication timestamp truncated to its calendar date.
    pub published_date: NaiveDate,
    pub channel_name: String,
    pub views: u64,
    /// Length in seconds.
    pub duration: u64,
    pub is_short: bool,
}

/// Immutable table of video records.
///
/// Filtering never mutates a table; it produces a new one holding copies of
/// the matching rows in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoTable {
    records: Vec<VideoRecord>,
}

impl VideoTable {
    pub fn new(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VideoRecord> {
        self.records.iter()
    }

    /// Earliest and latest publication dates, `None` for an empty table.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.published_date).min()?;
        let max = self.records.iter().map(|r| r.published_date).max()?;
        Some((min, max))
    }

    pub fn views_bounds(&self) -> Option<(u64, u64)> {
        let min = self.records.iter().map(|r| r.views).min()?;
        let max = self.records.iter().map(|r| r.views).max()?;
        Some((min, max))
    }

    pub fn duration_bounds(&self) -> Option<(u64, u64)> {
        let min = self.records.iter().map(|r| r.duration).min()?;
        let max = self.records.iter().map(|r| r.duration).max()?;
        Some((min, max))
    }

    /// Distinct channel names sorted alphabetically.
    pub fn channel_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .map(|r| r.channel_name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

impl From<Vec<VideoRecord>> for VideoTable {
    fn from(records: Vec<VideoRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<VideoRecord> for VideoTable {
    fn from_iter<I: IntoIterator<Item = VideoRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VideoTable {
    type Item = &'a VideoRecord;
    type IntoIter = std::slice::Iter<'a, VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
