//! Rendering module: reStructuredText fragments, simple tables and the
//! conversion summary.

mod result;
pub mod rst;
mod table;

pub use result::{ConversionStats, ConversionSummary, DocumentSummary};
pub use table::render_table;
