//! Errors reported by positional [`TypeSeq`](crate::TypeSeq) operations.

use thiserror::Error;

/// The error returned when a positional operation is given bounds that do not fit the
/// sequence it is applied to.
///
/// Only the index-directed operations ([`get`](crate::TypeSeq::get),
/// [`remove_at`](crate::TypeSeq::remove_at), [`replace_at`](crate::TypeSeq::replace_at),
/// [`range`](crate::TypeSeq::range)) can fail; every other operation is total. In
/// particular a [`find`](crate::TypeSeq::find) that matches nothing is a normal `None`
/// result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The index does not name a position within the sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the sequence it was applied to.
        len: usize,
    },
    /// The inclusive range is inverted or extends past the end of the sequence.
    #[error("invalid range {start}..={end} for sequence of length {len}")]
    InvalidRange {
        /// The requested start position.
        start: usize,
        /// The requested (inclusive) end position.
        end: usize,
        /// The length of the sequence it was applied to.
        len: usize,
    },
}
