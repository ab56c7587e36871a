//! A growable, primitive-valued sequence of 64-bit integers with numeric
//! reductions computed directly over its backing buffer.
//!
//! [`LongSequence`] owns a single contiguous `i64` buffer and tracks its logical
//! length apart from the physical capacity. It supports amortized constant-time
//! `push`, single-reallocation bulk appends, checked indexed access, and the
//! integer reductions in [`reduce`] (`sum`, `mean`, `min`, `max`, `variance`,
//! `standard_deviation`, `median`, and caller-defined folds via [`Reducer`]).
//!
//! The container is single-threaded: growth replaces the backing buffer, so
//! concurrent mutation requires external synchronization.

pub mod options;
pub mod reduce;
pub mod sequence;
pub mod stats;

mod storage;

pub use longseq_common::{Result, error::Error, error::ErrorKind};
pub use options::SequenceOptions;
pub use reduce::Reducer;
pub use sequence::LongSequence;
pub use stats::SequenceStats;
