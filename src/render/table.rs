//! RST simple-table rendering.

use crate::model::{Table, TableCell, TableRow};

const HEADER_RULE: char = '=';
const SPAN_RULE: char = '-';
const SEPARATOR: &str = " ";

/// Render a table as an RST simple table, one output line per entry.
///
/// The first row is the header. Rows containing spanning cells are followed
/// by a `-` underline marking the spans. The result ends with a blank line.
pub fn render_table(table: &Table) -> Vec<String> {
    if table.is_empty() {
        return Vec::new();
    }

    let rows = layout_rows(table);
    let widths = column_widths(&rows);

    let rule = widths
        .iter()
        .map(|w| HEADER_RULE.to_string().repeat(*w))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(rule.clone());

    for (i, row) in rows.iter().enumerate() {
        lines.push(render_row(row, &widths));
        if row.has_merged_cells() {
            lines.push(span_underline(row, &widths));
        }
        if i == 0 && rows.len() > 1 {
            lines.push(rule.clone());
        }
    }

    lines.push(rule);
    lines.push(String::new());
    lines
}

/// Pad rows to a common grid width, adding a blank column when every row
/// holds a single cell.
fn layout_rows(table: &Table) -> Vec<TableRow> {
    let mut rows = table.rows.clone();
    let single_cell = rows.iter().all(|r| r.cells.len() == 1);

    if single_cell {
        for row in &mut rows {
            row.cells.push(TableCell::empty());
        }
    }

    let columns = table.column_count() + usize::from(single_cell);
    for row in &mut rows {
        let missing = columns.saturating_sub(row.grid_width());
        row.cells
            .extend(std::iter::repeat_with(TableCell::empty).take(missing));
    }

    rows
}

fn column_widths(rows: &[TableRow]) -> Vec<usize> {
    let columns = rows.iter().map(TableRow::grid_width).max().unwrap_or(0);
    let mut widths = vec![1; columns];

    for row in rows {
        let mut col = 0;
        for cell in &row.cells {
            if !cell.is_merged() {
                widths[col] = widths[col].max(cell.width());
            }
            col += cell.colspan;
        }
    }

    // Spanning cells only widen the last column they cover, and only when
    // the covered columns are too narrow.
    for row in rows {
        let mut col = 0;
        for cell in &row.cells {
            if cell.is_merged() {
                let available = span_width(&widths, col, cell.colspan);
                if cell.width() > available {
                    widths[col + cell.colspan - 1] += cell.width() - available;
                }
            }
            col += cell.colspan;
        }
    }

    widths
}

/// Width of `span` columns starting at `col`, including the separators
/// between them.
fn span_width(widths: &[usize], col: usize, span: usize) -> usize {
    widths[col..col + span].iter().sum::<usize>() + (span - 1) * SEPARATOR.len()
}

fn render_row(row: &TableRow, widths: &[usize]) -> String {
    let mut col = 0;
    let mut fields = Vec::with_capacity(row.cells.len());
    for cell in &row.cells {
        let width = span_width(widths, col, cell.colspan);
        fields.push(format!("{:<width$}", cell.text, width = width));
        col += cell.colspan;
    }
    fields.join(SEPARATOR).trim_end().to_string()
}

fn span_underline(row: &TableRow, widths: &[usize]) -> String {
    let mut col = 0;
    let mut segments = Vec::with_capacity(row.cells.len());
    for cell in &row.cells {
        segments.push(SPAN_RULE.to_string().repeat(span_width(widths, col, cell.colspan)));
        col += cell.colspan;
    }
    segments.join(SEPARATOR)
}
