use gridsort::{Column, Grid, RowId, apply_order};

fn letters() -> (Grid, Vec<RowId>) {
    let mut grid = Grid::new(vec![Column::new("Letter")]);
    let ids = vec![
        grid.push_row(["a"]),
        grid.push_row(["b"]),
        grid.push_row(["c"]),
    ];
    (grid, ids)
}

fn order_of(grid: &Grid) -> Vec<RowId> {
    grid.rows().iter().map(|row| row.id()).collect()
}

#[test]
fn test_apply_order_rearranges_rows() {
    let (mut grid, ids) = letters();
    let wanted = vec![ids[2], ids[0], ids[1]];

    apply_order(&mut grid, &wanted);
    assert_eq!(order_of(&grid), wanted);

    let texts: Vec<&str> = grid.rows().iter().filter_map(|row| row.cell(0)).collect();
    assert_eq!(texts, vec!["c", "a", "b"]);
}

#[test]
fn test_apply_order_is_idempotent() {
    let (mut grid, ids) = letters();
    let wanted = vec![ids[1], ids[2], ids[0]];

    apply_order(&mut grid, &wanted);
    apply_order(&mut grid, &wanted);
    assert_eq!(order_of(&grid), wanted);
}

#[test]
fn test_unnamed_rows_follow_the_ordered_block() {
    let (mut grid, ids) = letters();
    let extra = grid.push_row(["d"]);

    // Order only names the original rows; "d" keeps its place after them.
    apply_order(&mut grid, &[ids[2], ids[1], ids[0]]);
    assert_eq!(order_of(&grid), vec![ids[2], ids[1], ids[0], extra]);
}

#[test]
fn test_empty_order_leaves_rows_alone() {
    let (mut grid, ids) = letters();

    apply_order(&mut grid, &[]);
    assert_eq!(order_of(&grid), ids);
}
