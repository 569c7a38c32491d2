//! Table types.

use serde::{Deserialize, Serialize};

/// A table recovered from wiki markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table; the first row is rendered as the header
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid columns: the widest row, counting spans.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(TableRow::grid_width).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if the table has merged cells.
    pub fn has_merged_cells(&self) -> bool {
        self.rows.iter().any(TableRow::has_merged_cells)
    }

    /// Drop empty plain cells, then rows left without cells.
    pub fn prune(&mut self) {
        for row in &mut self.rows {
            row.cells.retain(|c| !c.is_empty());
        }
        self.rows.retain(|r| !r.cells.is_empty());
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Number of grid columns this row occupies.
    pub fn grid_width(&self) -> usize {
        self.cells
            .iter()
            .fold(0usize, |width, c| width.saturating_add(c.colspan))
    }

    /// Check if any cell spans more than one column.
    pub fn has_merged_cells(&self) -> bool {
        self.cells.iter().any(TableCell::is_merged)
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text
    pub text: String,

    /// Number of columns this cell spans
    pub colspan: usize,
}

impl TableCell {
    /// Create a plain cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            colspan: 1,
        }
    }

    /// Create a blank plain cell.
    pub fn empty() -> Self {
        Self::text("")
    }

    /// Set colspan and return self. A span of zero is treated as one.
    pub fn colspan(mut self, span: usize) -> Self {
        self.colspan = span.max(1);
        self
    }

    /// Rendered width of the text in characters.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// A plain cell with no text. Spanning cells are never empty.
    pub fn is_empty(&self) -> bool {
        !self.is_merged() && self.text.is_empty()
    }

    /// Check if this cell spans multiple columns.
    pub fn is_merged(&self) -> bool {
        self.colspan > 1
    }
}
