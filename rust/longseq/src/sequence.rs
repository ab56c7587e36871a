use longseq_common::{Result, error::Error};

use crate::{
    options::SequenceOptions,
    reduce::{self, Reducer},
    stats::SequenceStats,
    storage,
};

/// A growable sequence of `i64` values backed by a single contiguous buffer.
///
/// The sequence tracks a logical length separately from the physical capacity of
/// its buffer. Elements in `[0, len)` are the values pushed (or adopted) by the
/// caller; slots in `[len, capacity)` are spare storage and are never observable
/// through this API. Index access is checked against the logical length.
///
/// Reductions (`sum`, `mean`, `median`, ...) run directly over the logical
/// prefix of the buffer and never mutate the sequence. See [`crate::reduce`] for
/// their integer semantics.
///
/// # Growth
///
/// - `push` grows when `len + 1 >= capacity`, to `capacity * 2 + min_growth`.
/// - `extend_from_slice` grows when `len + count >= capacity`, to
///   `2 * (capacity + count)` in a single reallocation.
///
/// Growth reserves fallibly: allocator failure surfaces as an
/// `AllocationFailure` error and leaves the sequence unchanged.
///
/// # Examples
///
/// ```
/// use longseq::LongSequence;
///
/// let mut seq = LongSequence::with_capacity(2);
/// for v in [1, 2, 3, 4, 5] {
///     seq.push(v).unwrap();
/// }
/// assert_eq!(seq.len(), 5);
/// assert_eq!(seq.sum().unwrap(), 15);
/// assert_eq!(seq.median().unwrap(), 3);
/// assert!(seq.get(5).is_err());
/// ```
#[derive(Clone)]
pub struct LongSequence {
    /// Backing buffer; its length is the physical capacity.
    values: Box<[i64]>,
    /// Number of logically valid elements at the start of `values`.
    len: usize,
    min_growth: usize,
}

impl LongSequence {
    /// Creates an empty sequence with the default capacity of 10.
    pub fn new() -> LongSequence {
        Self::with_capacity(SequenceOptions::DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with a buffer of exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> LongSequence {
        LongSequence {
            values: storage::allocate(capacity),
            len: 0,
            min_growth: SequenceOptions::DEFAULT_MIN_GROWTH,
        }
    }

    /// Creates an empty sequence from validated `options`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for invalid options and `AllocationFailure` when
    /// the initial buffer cannot be allocated.
    pub fn with_options(options: SequenceOptions) -> Result<LongSequence> {
        options.validate()?;
        Ok(LongSequence {
            values: storage::try_allocate(options.initial_capacity)?,
            len: 0,
            min_growth: options.min_growth,
        })
    }

    /// Adopts `values` as the backing buffer. Every element is treated as
    /// populated: `len() == values.len()` and there is no spare capacity until
    /// the next growth.
    pub fn from_vec(values: Vec<i64>) -> LongSequence {
        Self::from_boxed_slice(values.into_boxed_slice())
    }

    /// Adopts `values` as the backing buffer without copying.
    pub fn from_boxed_slice(values: Box<[i64]>) -> LongSequence {
        let len = values.len();
        LongSequence {
            values,
            len,
            min_growth: SequenceOptions::DEFAULT_MIN_GROWTH,
        }
    }

    /// Returns the number of logically valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Returns the logical elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.values[..self.len]
    }

    /// Returns the logical elements as native-endian bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.as_slice().iter()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= len()`, including indices that fall
    /// inside the spare capacity.
    #[inline]
    pub fn get(&self, index: usize) -> Result<i64> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_bounds(index, self.len))
    }

    /// Replaces the element at `index` with `value` and returns the previous
    /// value. The length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: i64) -> Result<i64> {
        let len = self.len;
        let slot = self.values[..len]
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, len))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Appends `value` to the end of the sequence, growing the buffer first
    /// when `len + 1` reaches the capacity.
    #[inline]
    pub fn push(&mut self, value: i64) -> Result<()> {
        if self.len + 1 >= self.capacity() {
            let new_capacity = storage::next_capacity(self.capacity(), self.min_growth)?;
            self.values = storage::grow(&self.values, self.len, new_capacity)?;
        }
        self.values[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends every element of `values` in order with a single bulk copy.
    ///
    /// When `len + values.len()` reaches the capacity, the buffer is reallocated
    /// once to `2 * (capacity + values.len())`. An empty slice is a no-op.
    pub fn extend_from_slice(&mut self, values: &[i64]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        let end = self
            .len
            .checked_add(values.len())
            .ok_or_else(|| Error::capacity_overflow("sequence length"))?;
        if end >= self.capacity() {
            let new_capacity = storage::bulk_capacity(self.capacity(), values.len())?;
            self.values = storage::grow(&self.values, self.len, new_capacity)?;
        }
        self.values[self.len..end].copy_from_slice(values);
        self.len = end;
        Ok(())
    }

    /// Shortens the sequence to `len` elements. Has no effect if `len` is not
    /// smaller than the current length. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Returns an independent copy of the logical elements.
    pub fn to_vec(&self) -> Vec<i64> {
        self.as_slice().to_vec()
    }

    /// Consumes the sequence and returns the logical elements.
    pub fn into_vec(self) -> Vec<i64> {
        let mut values = self.values.into_vec();
        values.truncate(self.len);
        values
    }
}

impl LongSequence {
    /// Wrapping sum of the elements.
    pub fn sum(&self) -> Result<i64> {
        reduce::sum(self.as_slice())
    }

    /// Integer mean, `sum / len` truncated toward zero.
    pub fn mean(&self) -> Result<i64> {
        reduce::mean(self.as_slice())
    }

    pub fn min(&self) -> Result<i64> {
        reduce::min(self.as_slice())
    }

    pub fn max(&self) -> Result<i64> {
        reduce::max(self.as_slice())
    }

    /// Population variance with integer truncation at each division.
    pub fn variance(&self) -> Result<i64> {
        reduce::variance(self.as_slice())
    }

    /// Integer square root of [`variance`](Self::variance).
    ///
    /// This is a low-precision statistic: every intermediate step is integer
    /// arithmetic, so small spreads collapse to `0`. Use a floating-point
    /// computation over [`as_slice`](Self::as_slice) when precision matters.
    pub fn standard_deviation(&self) -> Result<i64> {
        reduce::standard_deviation(self.as_slice())
    }

    /// Median over a sorted copy; the sequence itself is not reordered.
    pub fn median(&self) -> Result<i64> {
        reduce::median(self.as_slice())
    }

    /// Folds the elements left-to-right with `reducer`, starting from the first
    /// element.
    pub fn reduce_by<R: Reducer>(&self, reducer: R) -> Result<i64> {
        reduce::reduce_by(self.as_slice(), reducer)
    }

    /// Like [`reduce_by`](Self::reduce_by), but takes a closure directly so its
    /// parameter types are inferred.
    pub fn reduce_by_fn<F>(&self, f: F) -> Result<i64>
    where
        F: FnMut(i64, i64) -> i64,
    {
        reduce::reduce_by_fn(self.as_slice(), f)
    }

        /// Computes every reduction at once.
    pub fn stats(&self) -> Result<SequenceStats> {
        SequenceStats::from_values(self.as_slice())
    }
}

impl Default for LongSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LongSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LongSequence")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl PartialEq for LongSequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for LongSequence {}

impl From<Vec<i64>> for LongSequence {
    fn from(values: Vec<i64>) -> LongSequence {
        LongSequence::from_vec(values)
    }
}

impl From<Box<[i64]>> for LongSequence {
    fn from(values: Box<[i64]>) -> LongSequence {
        LongSequence::from_boxed_slice(values)
    }
}

impl FromIterator<i64> for LongSequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        LongSequence::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LongSequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
