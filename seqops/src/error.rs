use thiserror::Error;

/// Errors raised by sequence operators.
///
/// All errors are raised synchronously at the point of violation; nothing
/// is retried or suppressed internally. The library never logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operator requires at least one element.
    #[error("sequence is empty")]
    EmptyInput,
    /// A numeric argument violated a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An index fell outside the sequence where no clamping is specified.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Paired sequence arguments disagree in length.
    #[error("length mismatch: {keys} keys against {values} values")]
    LengthMismatch { keys: usize, values: usize },
    /// Elements with no defined relative order.
    #[error("elements cannot be ordered")]
    Uncomparable,
    /// A required match was not found.
    #[error("value not found in sequence")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
