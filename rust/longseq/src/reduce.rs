//! Numeric reductions over a slice of `i64` values.
//!
//! All reductions use 64-bit integer arithmetic. `sum`, `mean` and `variance` wrap
//! on overflow, and every division truncates toward zero. `standard_deviation` is
//! the integer square root of the truncated variance, so it is a low-precision
//! statistic: for `[1, 2]` the variance is `0` and so is the standard deviation.
//! Callers that need fractional precision should compute in floating point over
//! [`LongSequence::as_slice`](crate::LongSequence::as_slice) instead.
//!
//! Every function returns [`ErrorKind::EmptySequence`](longseq_common::error::ErrorKind::EmptySequence)
//! for an empty slice.

use longseq_common::{Result, error::Error};

/// A binary combining operation applied left-to-right by [`reduce_by`].
///
/// Implemented for every `FnMut(i64, i64) -> i64`, so closures and function
/// items can be passed directly. Implement it on a type when the combiner
/// carries state of its own.
pub trait Reducer {
    /// Combines the running accumulator with the next element.
    fn combine(&mut self, accumulator: i64, value: i64) -> i64;
}

impl<F> Reducer for F
where
    F: FnMut(i64, i64) -> i64,
{
    #[inline]
    fn combine(&mut self, accumulator: i64, value: i64) -> i64 {
        self(accumulator, value)
    }
}

/// Wrapping sum of all values.
pub fn sum(values: &[i64]) -> Result<i64> {
    non_empty(values, "sum")?;
    Ok(wrapping_sum(values))
}

/// Truncated integer mean: `sum / len`.
pub fn mean(values: &[i64]) -> Result<i64> {
    non_empty(values, "mean")?;
    Ok(truncated_mean(values))
}

pub fn min(values: &[i64]) -> Result<i64> {
    values
        .iter()
        .copied()
        .min()
        .ok_or_else(|| Error::empty_sequence("min"))
}

pub fn max(values: &[i64]) -> Result<i64> {
    values
        .iter()
        .copied()
        .max()
        .ok_or_else(|| Error::empty_sequence("max"))
}

/// Population variance: the truncated mean of squared deviations from the
/// truncated [`mean`].
pub fn variance(values: &[i64]) -> Result<i64> {
    non_empty(values, "variance")?;
    Ok(truncated_variance(values, truncated_mean(values)))
}

/// Integer square root of [`variance`].
///
/// Fails with `ArithmeticOverflow` when the wrapped variance is negative, which
/// can only happen after the squared deviations overflowed 64 bits.
pub fn standard_deviation(values: &[i64]) -> Result<i64> {
    non_empty(values, "standard_deviation")?;
    isqrt_variance(truncated_variance(values, truncated_mean(values)))
}

/// Median of a sorted copy of `values`. For an even count this is the average of
/// the two central elements, truncated toward zero.
///
/// `values` itself is never reordered.
pub fn median(values: &[i64]) -> Result<i64> {
    non_empty(values, "median")?;
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    Ok(sorted_median(&sorted))
}

/// Folds `values` left-to-right with `reducer`, seeded with the first element.
///
/// Because `R` is bounded by [`Reducer`] rather than `FnMut`, closure parameter
/// types are not inferred here: write `|a: i64, b: i64| a + b`, or use
/// [`reduce_by_fn`] which takes the closure directly.
pub fn reduce_by<R: Reducer>(values: &[i64], mut reducer: R) -> Result<i64> {
    let (&first, rest) = values
        .split_first()
        .ok_or_else(|| Error::empty_sequence("reduce_by"))?;
    Ok(rest
        .iter()
        .fold(first, |acc, &value| reducer.combine(acc, value)))
}

/// [`reduce_by`] for a plain closure, with its parameter types inferred.
///
/// ```
/// let values = [1, 2, 3, 4];
/// assert_eq!(longseq::reduce::reduce_by_fn(&values, |a, b| a * b).unwrap(), 24);
/// ```
pub fn reduce_by_fn<F>(values: &[i64], f: F) -> Result<i64>
where
    F: FnMut(i64, i64) -> i64,
{
    reduce_by(values, f)
}

#[inline]
fn non_empty(values: &[i64], operation: &'static str) -> Result<()> {
    if values.is_empty() {
        Err(Error::empty_sequence(operation))
    } else {
        Ok(())
    }
}

#[inline]
pub(crate) fn wrapping_sum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, &v| acc.wrapping_add(v))
}

pub(crate) fn truncated_mean(values: &[i64]) -> i64 {
    debug_assert!(!values.is_empty());
    wrapping_sum(values) / values.len() as i64
}

pub(crate) fn truncated_variance(values: &[i64], mean: i64) -> i64 {
    debug_assert!(!values.is_empty());
    let squares = values.iter().fold(0i64, |acc, &v| {
        let d = v.wrapping_sub(mean);
        acc.wrapping_add(d.wrapping_mul(d))
    });
    squares / values.len() as i64
}

pub(crate) fn isqrt_variance(variance: i64) -> Result<i64> {
    if variance < 0 {
        return Err(Error::arithmetic_overflow("standard_deviation"));
    }
    Ok(variance.isqrt())
}

/// Median of an already sorted, non-empty slice.
pub(crate) fn sorted_median(sorted: &[i64]) -> i64 {
    debug_assert!(!sorted.is_empty());
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        // The 128-bit intermediate keeps the pair sum exact.
        ((sorted[mid - 1] as i128 + sorted[mid] as i128) / 2) as i64
    }
}
