//! Filter criteria for a single detail-panel render pass.
//!
//! Criteria are rebuilt from the current control values on every
//! interaction and dropped once the filtered table has been produced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::video::{VideoRecord, VideoTable};

/// Inclusive range of calendar dates.
///
/// A range whose start lies after its end is kept as given and matches
/// nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Inclusive range of non-negative integers (views or seconds).
///
/// `min > max` is accepted and yields an empty range instead of an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u64,
    pub max: u64,
}

impl ValueRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Range covering every value.
    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// One conjunct of the filter predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    PublishedWithin(DateRange),
    Channel(String),
    DurationWithin(ValueRange),
    ViewsWithin(ValueRange),
}

impl Predicate {
    pub fn matches(&self, record: &VideoRecord) -> bool {
        match self {
            Predicate::PublishedWithin(range) => range.contains(record.published_date),
            Predicate::Channel(name) => record.channel_name == *name,
            Predicate::DurationWithin(range) => range.contains(record.duration),
            Predicate::ViewsWithin(range) => range.contains(record.views),
        }
    }
}

/// Per-tab filter selection.
///
/// `channel` holds at most one channel name; `None` matches every channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub date_range: Option<DateRange>,
    pub channel: Option<String>,
    pub views_range: ValueRange,
    pub duration_range: ValueRange,
}

impl FilterCriteria {
    /// Criteria that match every row of any table.
    pub fn match_all() -> Self {
        Self {
            date_range: None,
            channel: None,
            views_range: ValueRange::unbounded(),
            duration_range: ValueRange::unbounded(),
        }
    }

    /// Criteria spanning exactly the observed bounds of `table`, with no
    /// channel restriction.
    pub fn full_range(table: &VideoTable) -> Self {
        let mut criteria = Self::match_all();
        if let Some((start, end)) = table.date_bounds() {
            criteria.date_range = Some(DateRange::new(start, end));
        }
        if let Some((min, max)) = table.views_bounds() {
            criteria.views_range = ValueRange::new(min, max);
        }
        if let Some((min, max)) = table.duration_bounds() {
            criteria.duration_range = ValueRange::new(min, max);
        }
        criteria
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn with_views(mut self, min: u64, max: u64) -> Self {
        self.views_range = ValueRange::new(min, max);
        self
    }

    pub fn with_duration(mut self, min: u64, max: u64) -> Self {
        self.duration_range = ValueRange::new(min, max);
        self
    }

    /// Decompose into independent conjuncts.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::with_capacity(4);
        if let Some(range) = self.date_range {
            predicates.push(Predicate::PublishedWithin(range));
        }
        if let Some(ref channel) = self.channel {
            predicates.push(Predicate::Channel(channel.clone()));
        }
        predicates.push(Predicate::DurationWithin(self.duration_range));
        predicates.push(Predicate::ViewsWithin(self.views_range));
        predicates
    }

    /// Names of the range controls whose lower bound exceeds the upper bound.
    pub fn inverted_ranges(&self) -> Vec<&'static str> {
        let mut inverted = Vec::new();
        if self.date_range.is_some_and(|r| r.is_inverted()) {
            inverted.push("date");
        }
        if self.views_range.is_inverted() {
            inverted.push("views");
        }
        if self.duration_range.is_inverted() {
            inverted.push("duration");
        }
        inverted
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::match_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_value_range_inclusive() {
        let range = ValueRange::new(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = ValueRange::new(50, 10);
        assert!(range.is_inverted());
        assert!(!range.contains(10));
        assert!(!range.contains(30));
        assert!(!range.contains(50));

        let dates = DateRange::new(date(10), date(2));
        assert!(dates.is_inverted());
        assert!(!dates.contains(date(5)));
    }

    #[test]
    fn test_predicates_skip_absent_criteria() {
        let predicates = FilterCriteria::match_all().predicates();
        assert_eq!(predicates.len(), 2);

        let predicates = FilterCriteria::match_all()
            .with_date_range(date(1), date(3))
            .with_channel("chan")
            .predicates();
        assert_eq!(predicates.len(), 4);
        assert!(predicates.contains(&Predicate::Channel("chan".to_string())));
    }

    #[test]
    fn test_inverted_ranges_reported() {
        let criteria = FilterCriteria::match_all()
            .with_date_range(date(5), date(1))
            .with_views(100, 1)
            .with_duration(0, 10);
        assert_eq!(criteria.inverted_ranges(), vec!["date", "views"]);
    }
}
