//! Column sort engine for tabular grids
//!
//! Registers grids with a [`SortSession`], infers a comparator per column
//! from a sample of its content, and toggles between ascending and
//! descending order on repeated sort requests against the same column.

pub mod classify;
pub mod compare;
pub mod engine;
pub mod error;
pub mod grid;
pub mod reorder;
pub mod state;
pub mod text;

pub use classify::classify;
pub use compare::Comparator;
pub use engine::SortSession;
pub use error::SortError;
pub use grid::{Column, Grid, GridId, Row, RowId};
pub use reorder::apply_order;
pub use state::{ColumnState, Direction};
pub use text::visible_text;
