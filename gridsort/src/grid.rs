//! Grid, row, and column definitions.
//!
//! A [`Grid`] is the engine's view of one sortable table: a header of
//! [`Column`] definitions and a body of [`Row`]s. Rows carry a stable
//! [`RowId`] assigned when they are attached; the engine caches and
//! returns orders in terms of these ids and never clones row content.

/// Identifies a grid registered with a [`SortSession`](crate::SortSession).
///
/// Assigned once at registration and never reused for another grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(pub(crate) u64);

/// Stable identity of a row within its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub(crate) u64);

/// Header column definition.
///
/// # Example
///
/// ```
/// use gridsort::Column;
///
/// let columns = vec![
///     Column::new("Name"),
///     Column::new("Price").sort_as("numeric-period"),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header text.
    pub header: String,
    /// Optional comparator override tag, matched against registry names.
    pub sort_as: Option<String>,
}

impl Column {
    /// Creates a new column with the given header text.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sort_as: None,
        }
    }

    /// Declares the comparator for this column explicitly, bypassing
    /// sample-based classification. The tag must name a registry entry;
    /// unknown tags are ignored and classification runs as usual.
    pub fn sort_as(mut self, tag: impl Into<String>) -> Self {
        self.sort_as = Some(tag.into());
        self
    }
}

/// One body row: an ordered sequence of cell values.
#[derive(Debug, Clone)]
pub struct Row {
    id: RowId,
    cells: Vec<String>,
}

impl Row {
    /// The stable identity of this row.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The raw cell value at a column index, if present.
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// All cell values in column order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// A sortable table: header columns plus a row collection.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: Vec<Column>,
    rows: Vec<Row>,
    next_row: u64,
}

impl Grid {
    /// Creates an empty grid with the given header columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            next_row: 0,
        }
    }

    /// Appends a row and returns its stable id.
    pub fn push_row<I, S>(&mut self, cells: I) -> RowId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = RowId(self.next_row);
        self.next_row += 1;
        self.rows.push(Row {
            id,
            cells: cells.into_iter().map(Into::into).collect(),
        });
        id
    }

    /// The header columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The rows in their current order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Looks up a row by id.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn take_rows(&mut self) -> Vec<Row> {
        std::mem::take(&mut self.rows)
    }

    pub(crate) fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }
}
