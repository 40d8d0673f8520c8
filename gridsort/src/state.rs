//! Per-column sort state.

use crate::compare::Comparator;
use crate::grid::RowId;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sort state for one header column.
///
/// The comparator is assigned exactly once, at registration. The cache
/// holds the ascending order computed on the column's first sort and is
/// only cleared by an explicit
/// [`reset_column`](crate::SortSession::reset_column).
#[derive(Debug, Clone)]
pub struct ColumnState {
    comparator: Comparator,
    direction: Direction,
    is_sorted: bool,
    cached: Vec<(String, RowId)>,
}

impl ColumnState {
    pub(crate) fn new(comparator: Comparator) -> Self {
        Self {
            comparator,
            direction: Direction::Ascending,
            is_sorted: false,
            cached: Vec::new(),
        }
    }

    /// The comparator assigned to this column.
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// The current direction. Meaningful once [`is_sorted`](Self::is_sorted)
    /// is true.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the column has been sorted at least once.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    /// The cached ascending `(key, row)` order; empty before the first
    /// sort.
    pub fn cached(&self) -> &[(String, RowId)] {
        &self.cached
    }

    pub(crate) fn fill_cache(&mut self, cached: Vec<(String, RowId)>) {
        self.cached = cached;
        self.is_sorted = true;
        self.direction = Direction::Ascending;
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub(crate) fn reset(&mut self) {
        self.cached.clear();
        self.is_sorted = false;
        self.direction = Direction::Ascending;
    }
}
