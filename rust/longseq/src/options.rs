use longseq_common::{Result, verify_arg};

/// Construction and growth settings for a [`LongSequence`](crate::LongSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    /// Number of slots allocated up front.
    pub initial_capacity: usize,
    /// Constant added on top of doubling when a single `push` grows the buffer.
    /// Must be non-zero so that a zero-capacity sequence can grow.
    pub min_growth: usize,
}

impl SequenceOptions {
    pub const DEFAULT_CAPACITY: usize = 10;
    pub const DEFAULT_MIN_GROWTH: usize = 2;

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_min_growth(mut self, min_growth: usize) -> Self {
        self.min_growth = min_growth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        verify_arg!(min_growth, self.min_growth > 0);
        Ok(())
    }
}

impl Default for SequenceOptions {
    fn default() -> Self {
        SequenceOptions {
            initial_capacity: Self::DEFAULT_CAPACITY,
            min_growth: Self::DEFAULT_MIN_GROWTH,
        }
    }
}
