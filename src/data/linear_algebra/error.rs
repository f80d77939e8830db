//! # Error reporting for container construction and access
//!
//! A single enum describing any contract violation a caller can trigger. Each variant carries the
//! offending values, such that the message names both what was asked and what was allowed.
use std::error;
use std::fmt;
use std::fmt::Display;

/// An `Error` is created when a construction, access or arithmetic contract is violated.
///
/// All variants are produced synchronously and propagated directly to the caller; there is no
/// internal recovery. Values carried by the variants are the ones the caller provided, so tests
/// can match on them exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction was requested with a size of zero, or a size above the relevant maximum.
    InvalidSize {
        /// The size that was requested.
        size: usize,
        /// The largest size allowed for the container being constructed.
        maximum: usize,
    },
    /// Construction was requested with a start index whose logical window is not representable.
    ///
    /// The valid window of a vector is `[start_index, start_index + size)`; this variant is
    /// created when the upper bound overflows. A negative start index is ruled out by the index
    /// type itself.
    InvalidIndex {
        /// The start index that was requested.
        start_index: usize,
        /// The size that was requested alongside it.
        size: usize,
    },
    /// An element or row was accessed at an index outside the valid logical window.
    ///
    /// The window is the closed-open interval `[start_index, start_index + size)`.
    IndexOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The first valid index of the container.
        start_index: usize,
        /// The number of valid indices.
        size: usize,
    },
    /// A binary arithmetic operation was invoked on operands whose sizes differ.
    ///
    /// Assignment by `clone_from` is exempt: it reshapes the destination instead.
    SizeMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { size, maximum } => write!(
                f, "invalid size {}: must be in range [1, {}]",
                size, maximum,
            ),
            Error::InvalidIndex { start_index, size } => write!(
                f, "invalid start index {}: window of size {} is not representable",
                start_index, size,
            ),
            Error::IndexOutOfRange { index, start_index, size } => write!(
                f, "index {} out of range: valid indices are [{}, {})",
                index, start_index, start_index + size,
            ),
            Error::SizeMismatch { left, right } => write!(
                f, "size mismatch: left operand has size {}, right operand has size {}",
                left, right,
            ),
        }
    }
}

impl error::Error for Error {
}
