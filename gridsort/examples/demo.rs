//! Minimal wiring of the sort engine: registers a grid, "clicks" a few
//! headers, and renders the direction indicator the way an embedding UI
//! would.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use gridsort::{Column, Direction, Grid, GridId, SortSession};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut grid = Grid::new(vec![
        Column::new("Name"),
        Column::new("Price"),
        Column::new("Restocked"),
    ]);
    grid.push_row(["widget", "$99.90", "25/12/2023"]);
    grid.push_row(["anvil", "$1,234.50", "01/02/2023"]);
    grid.push_row(["nails", "N/A", "30/01/2023"]);
    grid.push_row(["bolt", "$0.10", "14/07/2023"]);

    let mut session = SortSession::new();
    let id = session.register(grid);

    // A header click delivers (grid id, column index) to the engine.
    for column in [1, 1, 0, 2] {
        session.sort(id, column).expect("column exists");
        println!("after clicking column {column}:");
        print_grid(&session, id);
        println!();
    }

    Ok(())
}

fn print_grid(session: &SortSession, id: GridId) {
    let grid = session.grid(id).expect("grid is registered");

    for (index, column) in grid.columns().iter().enumerate() {
        let indicator = match session.direction(id, index) {
            Ok(Some(Direction::Ascending)) => " ▲",
            Ok(Some(Direction::Descending)) => " ▼",
            _ => "",
        };
        print!("{:<14}", format!("{}{indicator}", column.header));
    }
    println!();

    for row in grid.rows() {
        for cell in row.cells() {
            print!("{cell:<14}");
        }
        println!();
    }
}
