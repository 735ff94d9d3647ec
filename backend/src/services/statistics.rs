use crate::api::ColumnStats;
use crate::models::VideoTable;

/// Compute descriptive statistics for a set of values.
///
/// Quartiles use linear interpolation between closest ranks. The standard
/// deviation is the sample one; it is 0.0 when fewer than two values exist.
pub fn compute_stats(values: &[f64]) -> ColumnStats {
    if values.is_empty() {
        return ColumnStats {
            count: 0,
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            p25: 0.0,
            median: 0.0,
            p75: 0.0,
            max: 0.0,
        };
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let std_dev = if count < 2 {
        0.0
    } else {
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    };

    ColumnStats {
        count,
        mean,
        std_dev,
        min: sorted[0],
        p25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        p75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Quantile of already sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

pub fn views_stats(table: &VideoTable) -> ColumnStats {
    let values: Vec<f64> = table.iter().map(|r| r.views as f64).collect();
    compute_stats(&values)
}

pub fn duration_stats(table: &VideoTable) -> ColumnStats {
    let values: Vec<f64> = table.iter().map(|r| r.duration as f64).collect();
    compute_stats(&values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_stats() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = compute_stats(&values);

        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.p25, 2.0);
        assert_eq!(stats.p75, 4.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert!((stats.std_dev - 2.5_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_compute_stats_interpolates_quartiles() {
        let stats = compute_stats(&[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(stats.p25, 17.5);
        assert_eq!(stats.median, 25.0);
        assert_eq!(stats.p75, 32.5);
    }

    #[test]
    fn test_compute_stats_unsorted_input() {
        let stats = compute_stats(&[5.0, 1.0, 3.0]);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_compute_stats_single_value() {
        let stats = compute_stats(&[42.0]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.p25, 42.0);
        assert_eq!(stats.p75, 42.0);
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.max, 0.0);
    }
}
