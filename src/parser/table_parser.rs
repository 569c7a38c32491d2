//! Wiki table reconstruction.
//!
//! The captured table span is split into physical sub-lines and each one is
//! classified by a small line grammar before rows are assembled:
//!
//! - `|-` (not `|--`) starts a new row
//! - a line carrying `class=` is a directive and is skipped
//! - a line carrying `colspan='N'` is a cell spanning N columns
//! - a line starting with `!` or `|` is a plain cell
//!
//! Everything else inside the table is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Table, TableCell, TableRow};

/// Widest span accepted from a `colspan` directive.
pub const MAX_COLSPAN: usize = 64;

static COLSPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"=['"]?([0-9]+)['"]?[ \\|]+"#).unwrap());

/// One classified line of table markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLine {
    /// Row separator
    RowSeparator,
    /// Attribute directive with no content
    Directive,
    /// Plain cell
    Cell(String),
    /// Cell spanning several columns
    SpanningCell {
        /// Cell text
        text: String,
        /// Number of columns covered
        span: usize,
    },
    /// Anything the grammar does not recognize
    Ignored,
}

/// Strip wiki cell framing: leading `{`, trailing `}`, surrounding
/// backslashes and whitespace.
fn strip_framing(line: &str) -> &str {
    line.trim_start_matches('{')
        .trim_end_matches('}')
        .trim_matches('\\')
        .trim()
}

fn plain_cell(line: &str) -> Option<TableLine> {
    line.strip_prefix('!')
        .or_else(|| line.strip_prefix('|'))
        .map(|rest| TableLine::Cell(rest.trim().to_string()))
}

/// Classify one physical line of table markup.
pub fn classify(raw: &str) -> TableLine {
    let line = strip_framing(raw);

    if let Some(rest) = line.strip_prefix("|-") {
        if !rest.starts_with('-') {
            return TableLine::RowSeparator;
        }
    }

    if line.contains("class=") {
        return TableLine::Directive;
    }

    if line.contains("colspan=") {
        if let Some(caps) = COLSPAN.captures(line) {
            let span = caps[1]
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=MAX_COLSPAN).contains(n));
            if let Some(span) = span {
                let end = caps.get(0).map_or(line.len(), |m| m.end());
                return TableLine::SpanningCell {
                    text: line[end..].trim().to_string(),
                    span,
                };
            }
        }
        log::warn!("Malformed colspan directive: {}", line);
    }

    plain_cell(line).unwrap_or(TableLine::Ignored)
}

/// Parse a complete table span (from the opening marker through `|}`).
pub fn parse_table(source: &str) -> Table {
    let mut table = Table::new();
    let mut row: Vec<TableCell> = Vec::new();

    for line in source.lines() {
        match classify(line) {
            TableLine::RowSeparator => {
                if !row.is_empty() {
                    table.add_row(TableRow::new(std::mem::take(&mut row)));
                }
            }
            TableLine::Cell(text) => row.push(TableCell::text(text)),
            TableLine::SpanningCell { text, span } => {
                row.push(TableCell::text(text).colspan(span))
            }
            TableLine::Directive | TableLine::Ignored => {}
        }
    }
    table.add_row(TableRow::new(row));

    table.prune();
    table
}
