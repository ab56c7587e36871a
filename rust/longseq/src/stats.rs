use longseq_common::{Result, error::Error};

use crate::reduce;

/// A snapshot of every reduction over a sequence's logical elements.
///
/// Each field carries exactly the value the corresponding reduction on
/// [`LongSequence`](crate::LongSequence) would return, computed with a single
/// sorted copy of the input rather than one per statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStats {
    pub count: usize,
    pub sum: i64,
    pub mean: i64,
    pub min: i64,
    pub max: i64,
    pub variance: i64,
    /// `None` when the wrapped variance is negative.
    pub standard_deviation: Option<i64>,
    pub median: i64,
}

impl SequenceStats {
    /// Collects the statistics for `values`.
    ///
    /// # Errors
    ///
    /// Returns `EmptySequence` when `values` is empty.
    pub fn from_values(values: &[i64]) -> Result<SequenceStats> {
        if values.is_empty() {
            return Err(Error::empty_sequence("stats"));
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let sum = reduce::wrapping_sum(values);
        let mean = sum / values.len() as i64;
        let variance = reduce::truncated_variance(values, mean);
        Ok(SequenceStats {
            count: values.len(),
            sum,
            mean,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            variance,
            standard_deviation: reduce::isqrt_variance(variance).ok(),
            median: reduce::sorted_median(&sorted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_match_individual_reductions() {
        let values = [7, -3, 12, 0, 5, 5, 21, -8];
        let stats = SequenceStats::from_values(&values).unwrap();
        assert_eq!(stats.count, values.len());
        assert_eq!(stats.sum, reduce::sum(&values).unwrap());
        assert_eq!(stats.mean, reduce::mean(&values).unwrap());
        assert_eq!(stats.min, reduce::min(&values).unwrap());
        assert_eq!(stats.max, reduce::max(&values).unwrap());
        assert_eq!(stats.variance, reduce::variance(&values).unwrap());
        assert_eq!(
            stats.standard_deviation,
            Some(reduce::standard_deviation(&values).unwrap())
        );
        assert_eq!(stats.median, reduce::median(&values).unwrap());
    }

    #[test]
    fn test_stats_wrapped_variance_has_no_standard_deviation() {
        let values = [i64::MIN, i64::MAX, 0, i64::MAX];
        let stats = SequenceStats::from_values(&values).unwrap();
        assert!(stats.variance < 0);
        assert_eq!(stats.standard_deviation, None);
        assert!(reduce::standard_deviation(&values).is_err());
    }

    #[test]
    fn test_stats_empty() {
        let err = SequenceStats::from_values(&[]).unwrap_err();
        assert!(err.is_empty_sequence());
    }

    #[test]
    fn test_stats_single_value() {
        let stats = SequenceStats::from_values(&[-4]).unwrap();
        assert_eq!(
            stats,
            SequenceStats {
                count: 1,
                sum: -4,
                mean: -4,
                min: -4,
                max: -4,
                variance: 0,
                standard_deviation: Some(0),
                median: -4,
            }
        );
    }
}
