//! The sort engine and its session context.
//!
//! A [`SortSession`] owns the grids prepared for sorting, keyed by
//! [`GridId`]. Sessions are independent values; embedders and tests can
//! hold several side by side without interference.

use std::collections::HashMap;

use crate::classify::classify;
use crate::error::SortError;
use crate::grid::{Grid, GridId, RowId};
use crate::reorder::apply_order;
use crate::state::{ColumnState, Direction};
use crate::text::visible_text;

#[derive(Debug)]
struct TableEntry {
    grid: Grid,
    columns: Vec<ColumnState>,
}

/// Session-scoped sort context.
///
/// A column moves through Unsorted → SortedAscending ⇄ SortedDescending:
/// the first [`sort`](Self::sort) extracts and caches the ascending
/// `(key, row)` order, every later sort replays the cache forward or
/// reversed without recomputing.
#[derive(Debug, Default)]
pub struct SortSession {
    tables: HashMap<GridId, TableEntry>,
    next_grid: u64,
}

impl SortSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares a grid for sorting and hands out its id.
    ///
    /// Resolves one comparator per header column: the column's override
    /// tag wins if it names a registry entry, otherwise the first data
    /// row's cell is classified. An empty grid (or a missing cell) falls
    /// back to the alphanumeric comparator. The assignment is final for
    /// the lifetime of the grid.
    pub fn register(&mut self, grid: Grid) -> GridId {
        let id = GridId(self.next_grid);
        self.next_grid += 1;

        let columns = grid
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let sample = grid
                    .rows()
                    .first()
                    .and_then(|row| row.cell(index))
                    .unwrap_or("");
                let comparator = classify(sample, column.sort_as.as_deref());
                log::debug!(
                    "[engine] grid {}, column {} ({:?}): using {}",
                    id.0,
                    index,
                    column.header,
                    comparator.name()
                );
                ColumnState::new(comparator)
            })
            .collect();

        self.tables.insert(id, TableEntry { grid, columns });
        id
    }

    /// Sorts a column, toggling direction on repeat requests.
    ///
    /// The resulting row order is applied to the grid in one batch and
    /// returned for rendering. On the first sort of a column the live
    /// rows are scanned, keyed, stable-sorted, and cached; afterwards the
    /// cache is replayed, so rows attached after the first sort are not
    /// reflected until [`reset_column`](Self::reset_column).
    pub fn sort(&mut self, grid: GridId, column: usize) -> Result<Vec<RowId>, SortError> {
        let entry = self
            .tables
            .get_mut(&grid)
            .ok_or(SortError::UnknownGrid(grid))?;
        let count = entry.columns.len();
        let state = entry
            .columns
            .get_mut(column)
            .ok_or(SortError::ColumnOutOfRange { column, count })?;

        let order: Vec<RowId> = if state.is_sorted() {
            let direction = state.direction().flipped();
            state.set_direction(direction);
            log::trace!("[engine] replaying cache for column {column} ({direction:?})");
            match direction {
                Direction::Ascending => state.cached().iter().map(|(_, id)| *id).collect(),
                Direction::Descending => state.cached().iter().rev().map(|(_, id)| *id).collect(),
            }
        } else {
            let comparator = state.comparator();
            let mut keys: Vec<(String, RowId)> = entry
                .grid
                .rows()
                .iter()
                .map(|row| {
                    let text = visible_text(row.cell(column).unwrap_or(""));
                    (text.to_string(), row.id())
                })
                .collect();
            // Stable sort: rows with equal keys keep their relative order.
            keys.sort_by(|a, b| comparator.compare(&a.0, &b.0));
            log::debug!(
                "[engine] first sort of column {column}: cached {} keys",
                keys.len()
            );
            state.fill_cache(keys);
            state.cached().iter().map(|(_, id)| *id).collect()
        };

        apply_order(&mut entry.grid, &order);
        Ok(order)
    }

    /// The active direction for a column, or `None` before its first
    /// sort. The environment renders its indicator glyph from this.
    pub fn direction(&self, grid: GridId, column: usize) -> Result<Option<Direction>, SortError> {
        let state = self.column_state(grid, column)?;
        Ok(state.is_sorted().then(|| state.direction()))
    }

    /// Forces a column back to its unsorted state so the next sort
    /// re-scans the live rows. The comparator assignment is kept.
    ///
    /// Cache invalidation is never automatic; this is the explicit hook
    /// for collaborators that mutate a grid structurally.
    pub fn reset_column(&mut self, grid: GridId, column: usize) -> Result<(), SortError> {
        let entry = self
            .tables
            .get_mut(&grid)
            .ok_or(SortError::UnknownGrid(grid))?;
        let count = entry.columns.len();
        let state = entry
            .columns
            .get_mut(column)
            .ok_or(SortError::ColumnOutOfRange { column, count })?;
        state.reset();
        Ok(())
    }

    /// The sort state of one column.
    pub fn column_state(&self, grid: GridId, column: usize) -> Result<&ColumnState, SortError> {
        let entry = self.tables.get(&grid).ok_or(SortError::UnknownGrid(grid))?;
        entry
            .columns
            .get(column)
            .ok_or(SortError::ColumnOutOfRange {
                column,
                count: entry.columns.len(),
            })
    }

    /// Read access to a registered grid, in its current row order.
    pub fn grid(&self, id: GridId) -> Option<&Grid> {
        self.tables.get(&id).map(|entry| &entry.grid)
    }

    /// Mutable access to a registered grid, for structural changes
    /// between sorts (e.g. attaching rows).
    pub fn grid_mut(&mut self, id: GridId) -> Option<&mut Grid> {
        self.tables.get_mut(&id).map(|entry| &mut entry.grid)
    }

    /// Removes a grid and all of its column state from the session.
    pub fn discard(&mut self, id: GridId) -> Option<Grid> {
        self.tables.remove(&id).map(|entry| entry.grid)
    }
}
