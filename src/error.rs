//! Errors reported when building a matrix from malformed input.
//!
//! Search itself cannot fail: the mesh is finite, the frame stack is bounded
//! by the primary item count, and every path terminates in emission or a
//! dead end. Only construction can reject input.

use thiserror::Error;

/// A row failed validation while building a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Row `row_index` (0-based, in input order) listed no items.
    #[error("row {row_index} is empty")]
    EmptyRow {
        /// 0-based index of the offending row in the input sequence.
        row_index: usize,
    },
    /// Row `row_index` listed the same item more than once.
    #[error("row {row_index} lists the same item more than once")]
    DuplicateItem {
        /// 0-based index of the offending row in the input sequence.
        row_index: usize,
    },
}
