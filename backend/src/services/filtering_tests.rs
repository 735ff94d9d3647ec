#[cfg(test)]
mod tests {
    use crate::models::{DateRange, FilterCriteria, Predicate, ValueRange, VideoRecord, VideoTable};
    use crate::services::filtering::{apply_filters, apply_predicate, apply_predicates};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, day).unwrap()
    }

    fn arb_record() -> impl Strategy<Value = VideoRecord> {
        (0usize..4, 1u32..30, 0u64..5_000, 0u64..4_000, any::<bool>()).prop_map(
            |(channel, day, views, duration, is_short)| VideoRecord {
                title: format!("video {} {}", day, views),
                description: String::new(),
                published_date: date(day),
                channel_name: format!("channel{}", channel),
                views,
                duration,
                is_short,
            },
        )
    }

    fn arb_table() -> impl Strategy<Value = VideoTable> {
        prop::collection::vec(arb_record(), 0..50).prop_map(VideoTable::new)
    }

    fn arb_range(max: u64) -> impl Strategy<Value = ValueRange> {
        (0..max, 0..max).prop_map(|(a, b)| ValueRange::new(a, b))
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            proptest::option::of((1u32..30, 1u32..30)),
            proptest::option::of(0usize..5),
            arb_range(5_000),
            arb_range(4_000),
        )
            .prop_map(|(dates, channel, views_range, duration_range)| FilterCriteria {
                date_range: dates.map(|(s, e)| DateRange::new(date(s), date(e))),
                channel: channel.map(|c| format!("channel{}", c)),
                views_range,
                duration_range,
            })
    }

    proptest! {
        #[test]
        fn prop_predicate_order_does_not_matter(
            table in arb_table(),
            (predicates, shuffled) in arb_criteria().prop_flat_map(|criteria| {
                let predicates = criteria.predicates();
                (Just(predicates.clone()), Just(predicates).prop_shuffle())
            })
        ) {
            let one_pass = apply_predicates(&table, &predicates);
            let reordered = apply_predicates(&table, &shuffled);
            let stepwise = shuffled
                .iter()
                .fold(table.clone(), |acc, p| apply_predicate(&acc, p));

            prop_assert_eq!(&one_pass, &reordered);
            prop_assert_eq!(&one_pass, &stepwise);
        }

        #[test]
        fn prop_full_range_is_identity(table in arb_table()) {
            let criteria = FilterCriteria::full_range(&table);
            prop_assert_eq!(apply_filters(&table, &criteria), table);
        }

        #[test]
        fn prop_filtered_rows_satisfy_criteria(table in arb_table(), criteria in arb_criteria()) {
            let filtered = apply_filters(&table, &criteria);
            prop_assert!(filtered.len() <= table.len());
            for record in &filtered {
                for predicate in criteria.predicates() {
                    prop_assert!(predicate.matches(record));
                }
            }
        }

        #[test]
        fn prop_filter_is_idempotent(table in arb_table(), criteria in arb_criteria()) {
            let once = apply_filters(&table, &criteria);
            let twice = apply_filters(&once, &criteria);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_on_empty_table() {
        let table = VideoTable::empty();
        let criteria = FilterCriteria::match_all().with_channel("anyone");
        assert!(apply_filters(&table, &criteria).is_empty());
    }

    #[test]
    fn test_views_range_hundred_on_five_rows() {
        let table: VideoTable = [10u64, 99, 101, 250, 5]
            .iter()
            .enumerate()
            .map(|(i, views)| VideoRecord {
                title: format!("v{}", i),
                description: String::new(),
                published_date: date(1),
                channel_name: "solo".to_string(),
                views: *views,
                duration: 60,
                is_short: false,
            })
            .collect();

        let filtered = apply_filters(&table, &FilterCriteria::match_all().with_views(100, 100));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_channel_predicate_is_single_valued() {
        let predicates = FilterCriteria::match_all().with_channel("a").with_channel("b").predicates();
        let channels: Vec<_> = predicates
            .iter()
            .filter(|p| matches!(p, Predicate::Channel(_)))
            .collect();
        assert_eq!(channels, vec![&Predicate::Channel("b".to_string())]);
    }
}
