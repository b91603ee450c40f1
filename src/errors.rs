//! Error types for label loading, writing and validation
//!
//! Every failure aborts the whole operation: a label file is either loaded
//! completely or not at all, and validation reports without repairing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type LabelResult<T> = Result<T, LabelError>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum LabelError {
    /// Bytes are neither valid UTF-8 nor valid Shift_JIS
    #[error("label text is neither valid UTF-8 nor valid Shift_JIS")]
    Decode,

    /// Text contains characters the target encoding cannot represent
    #[error("label text cannot be encoded as {encoding}")]
    Encode { encoding: &'static str },

    /// A line does not follow the label grammar (1-based line number)
    #[error("malformed label at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// The load entry point was handed something that is not a label source
    #[error("invalid label source: {0}")]
    InvalidArgument(String),

    /// Reading or writing a label file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The song tree disagrees with its own recorded counts or positions
    #[error("structural validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl LabelError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        LabelError::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}

/// A mismatch between a recorded context field and the actual tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A recorded child count differs from the number of children
    #[error("{aggregate}: recorded {field} is {recorded}, actual is {actual}")]
    CountMismatch {
        aggregate: String,
        field: &'static str,
        recorded: usize,
        actual: usize,
    },

    /// A recorded 1-based position differs from the child's index + 1
    #[error("{aggregate}: recorded position is {recorded}, expected {expected}")]
    PositionMismatch {
        aggregate: String,
        recorded: usize,
        expected: usize,
    },
}
