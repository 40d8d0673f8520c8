//! Error types.

use thiserror::Error;

use crate::grid::GridId;

/// Precondition violations raised by the sort engine.
///
/// Malformed cell content is never an error; comparators degrade to
/// neutral values instead. Only invalid identifiers surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The grid id is not registered with this session.
    #[error("unknown grid {0:?}")]
    UnknownGrid(GridId),
    /// The column index is outside the grid's header.
    #[error("column {column} out of range for grid with {count} columns")]
    ColumnOutOfRange {
        /// The requested column index.
        column: usize,
        /// Number of header columns in the grid.
        count: usize,
    },
}
