//! Backing storage allocation and the capacity growth policy.

use longseq_common::{Result, error::Error};

/// Allocates a zero-filled buffer of exactly `capacity` slots.
pub(crate) fn allocate(capacity: usize) -> Box<[i64]> {
    vec![0i64; capacity].into_boxed_slice()
}

/// Fallible [`allocate`]: allocator failure or an oversized `capacity` is
/// returned as `AllocationFailure`.
pub(crate) fn try_allocate(capacity: usize) -> Result<Box<[i64]>> {
    let mut v = Vec::<i64>::new();
    v.try_reserve_exact(capacity)
        .map_err(|e| Error::allocation_failure(capacity, e))?;
    v.resize(capacity, 0);
    Ok(v.into_boxed_slice())
}

/// Capacity for the single-element growth path: at least double, plus
/// `min_growth` so that an empty buffer still grows.
#[inline]
pub(crate) fn next_capacity(capacity: usize, min_growth: usize) -> Result<usize> {
    capacity
        .checked_mul(2)
        .and_then(|c| c.checked_add(min_growth))
        .ok_or_else(|| Error::capacity_overflow("single-element growth"))
}

/// Capacity for the bulk growth path: `2 * (capacity + additional)`.
#[inline]
pub(crate) fn bulk_capacity(capacity: usize, additional: usize) -> Result<usize> {
    capacity
        .checked_add(additional)
        .and_then(|c| c.checked_mul(2))
        .ok_or_else(|| Error::capacity_overflow("bulk growth"))
}

/// Reallocates `values` into a buffer of exactly `new_capacity` slots, copying
/// the first `len` elements. The tail of the new buffer is zero-filled.
#[cold]
pub(crate) fn grow(values: &[i64], len: usize, new_capacity: usize) -> Result<Box<[i64]>> {
    assert!(len <= values.len());
    assert!(new_capacity >= len);
    let mut v = Vec::<i64>::new();
    v.try_reserve_exact(new_capacity)
        .map_err(|e| Error::allocation_failure(new_capacity, e))?;
    v.extend_from_slice(&values[..len]);
    v.resize(new_capacity, 0);
    log::trace!(
        "grew sequence storage: len={len}, capacity {} -> {new_capacity}",
        values.len()
    );
    Ok(v.into_boxed_slice())
}
