//! Batch application of a computed row order.

use std::collections::HashMap;

use crate::grid::{Grid, Row, RowId};

/// Moves the named rows into exactly the given order with one batch
/// rebuild of the row container. Rows are moved, never cloned.
///
/// Rows not named in the order keep their relative order and end up
/// after the ordered block; ids that name no current row are skipped.
/// Applying the same order twice is a no-op in effect.
pub fn apply_order(grid: &mut Grid, order: &[RowId]) {
    let mut slots: HashMap<RowId, usize> = order
        .iter()
        .enumerate()
        .map(|(slot, id)| (*id, slot))
        .collect();

    let mut ordered: Vec<Option<Row>> = (0..order.len()).map(|_| None).collect();
    let mut rest = Vec::new();

    for row in grid.take_rows() {
        match slots.remove(&row.id()) {
            Some(slot) => ordered[slot] = Some(row),
            None => rest.push(row),
        }
    }

    let mut rows: Vec<Row> = ordered.into_iter().flatten().collect();
    rows.append(&mut rest);
    grid.set_rows(rows);
}
