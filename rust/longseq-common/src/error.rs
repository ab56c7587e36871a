use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfBounds { index, len }.into())
    }

    pub fn empty_sequence(operation: &'static str) -> Error {
        Error(ErrorKind::EmptySequence { operation }.into())
    }

    pub fn allocation_failure(requested: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::AllocationFailure { requested, source }.into())
    }

    pub fn capacity_overflow(context: impl Into<String>) -> Error {
        Error(
            ErrorKind::CapacityOverflow {
                context: context.into(),
            }
            .into(),
        )
    }

    pub fn arithmetic_overflow(operation: &'static str) -> Error {
        Error(ErrorKind::ArithmeticOverflow { operation }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this is an [`ErrorKind::EmptySequence`] error.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptySequence { .. })
    }

    /// Returns `true` if this is an [`ErrorKind::OutOfBounds`] error.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfBounds { .. })
    }

    /// Returns `true` if growth could not obtain the requested storage.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::AllocationFailure { .. } | ErrorKind::CapacityOverflow { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("{operation} is undefined for an empty sequence")]
    EmptySequence { operation: &'static str },

    #[error("failed to allocate storage for {requested} elements")]
    AllocationFailure {
        requested: usize,
        source: TryReserveError,
    },

    #[error("capacity overflow while computing {context}")]
    CapacityOverflow { context: String },

    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: &'static str },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_accessors() {
        let e = Error::out_of_bounds(7, 3);
        assert!(e.is_out_of_bounds());
        assert!(!e.is_empty_sequence());
        match e.into_kind() {
            ErrorKind::OutOfBounds { index, len } => {
                assert_eq!(index, 7);
                assert_eq!(len, 3);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::empty_sequence("median").to_string(),
            "median is undefined for an empty sequence"
        );
        assert_eq!(
            Error::out_of_bounds(4, 2).to_string(),
            "index 4 out of bounds for sequence of length 2"
        );
        assert_eq!(
            Error::invalid_arg("min_growth", "min_growth > 0").to_string(),
            "invalid argument min_growth: min_growth > 0"
        );
    }

    #[test]
    fn test_allocation_failure_source() {
        let source = Vec::<i64>::new()
            .try_reserve_exact(usize::MAX)
            .expect_err("reservation must fail");
        let e = Error::allocation_failure(usize::MAX, source);
        assert!(e.is_allocation_failure());
        assert!(Error::capacity_overflow("bulk growth").is_allocation_failure());
    }
}
