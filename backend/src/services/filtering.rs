//! Filter engine.
//!
//! Filtering is the conjunction of the predicates derived from a
//! [`FilterCriteria`]. The source table is never modified; matching rows are
//! copied into a new table in their original order. No match is an empty
//! table, not an error.

use crate::models::{FilterCriteria, Predicate, VideoTable};

/// Keep the rows satisfying every criterion.
pub fn apply_filters(table: &VideoTable, criteria: &FilterCriteria) -> VideoTable {
    let predicates = criteria.predicates();
    let filtered = apply_predicates(table, &predicates);

    log::debug!(
        "Filtered {} -> {} rows with {} predicates",
        table.len(),
        filtered.len(),
        predicates.len()
    );

    filtered
}

/// Keep the rows satisfying all `predicates`, evaluated in a single pass.
pub fn apply_predicates(table: &VideoTable, predicates: &[Predicate]) -> VideoTable {
    table
        .iter()
        .filter(|r| predicates.iter().all(|p| p.matches(r)))
        .cloned()
        .collect()
}

/// Keep the rows satisfying one predicate.
pub fn apply_predicate(table: &VideoTable, predicate: &Predicate) -> VideoTable {
    table.iter().filter(|r| predicate.matches(r)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRange, ValueRange, VideoRecord};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn record(channel: &str, day: u32, views: u64, duration: u64) -> VideoRecord {
        VideoRecord {
            title: format!("{}-{}-{}", channel, day, views),
            description: String::new(),
            published_date: date(day),
            channel_name: channel.to_string(),
            views,
            duration,
            is_short: duration < 60,
        }
    }

    fn sample_table() -> VideoTable {
        VideoTable::new(vec![
            record("alpha", 1, 10, 30),
            record("beta", 2, 250, 600),
            record("alpha", 3, 90, 1200),
            record("gamma", 4, 40, 45),
            record("alpha", 5, 500, 300),
        ])
    }

    #[test]
    fn test_full_range_is_identity() {
        let table = sample_table();
        let filtered = apply_filters(&table, &FilterCriteria::full_range(&table));
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_match_all_is_identity() {
        let table = sample_table();
        assert_eq!(apply_filters(&table, &FilterCriteria::match_all()), table);
    }

    #[test]
    fn test_channel_filter_exact_match() {
        let table = sample_table();
        let criteria = FilterCriteria::match_all().with_channel("alpha");
        let filtered = apply_filters(&table, &criteria);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.channel_name == "alpha"));

        let criteria = FilterCriteria::match_all().with_channel("Alpha");
        assert!(apply_filters(&table, &criteria).is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let table = sample_table();
        let criteria = FilterCriteria::match_all().with_date_range(date(2), date(4));
        let days: Vec<_> = apply_filters(&table, &criteria)
            .iter()
            .map(|r| r.published_date)
            .collect();
        assert_eq!(days, vec![date(2), date(3), date(4)]);
    }

    #[test]
    fn test_views_range_without_exact_match_is_empty() {
        let table = sample_table();
        let criteria = FilterCriteria::match_all().with_views(100, 100);
        let filtered = apply_filters(&table, &criteria);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_combined_criteria() {
        let table = sample_table();
        let criteria = FilterCriteria::match_all()
            .with_channel("alpha")
            .with_duration(100, 2000)
            .with_views(50, 1000);
        let filtered = apply_filters(&table, &criteria);
        let views: Vec<u64> = filtered.iter().map(|r| r.views).collect();
        assert_eq!(views, vec![90, 500]);
    }

    #[test]
    fn test_inverted_range_yields_empty_table() {
        let table = sample_table();
        let criteria = FilterCriteria::match_all().with_duration(600, 30);
        assert!(apply_filters(&table, &criteria).is_empty());
    }

    #[test]
    fn test_source_table_untouched() {
        let table = sample_table();
        let before = table.clone();
        let _ = apply_filters(&table, &FilterCriteria::match_all().with_channel("beta"));
        assert_eq!(table, before);
    }

    #[test]
    fn test_sequential_predicates_match_single_pass() {
        let table = sample_table();
        let predicates = vec![
            Predicate::PublishedWithin(DateRange::new(date(1), date(5))),
            Predicate::ViewsWithin(ValueRange::new(20, 600)),
            Predicate::DurationWithin(ValueRange::new(40, 1500)),
        ];
        let sequential = predicates
            .iter()
            .rev()
            .fold(table.clone(), |acc, p| apply_predicate(&acc, p));
        assert_eq!(sequential, apply_predicates(&table, &predicates));
    }
}
