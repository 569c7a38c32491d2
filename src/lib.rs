//! # wiki2rst
//!
//! Convert a flat, pandoc-flavoured wiki export into reStructuredText.
//!
//! The input is a single stream of lines. A word followed by a date stamp
//! (`Phonons 20190412`) starts a new output document; every document is
//! written as `<title>.rst` and gets an entry in a generated build script
//! that renders it to HTML.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wiki2rst::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> wiki2rst::Result<()> {
//!     let summary = convert_file(
//!         Path::new("export.txt"),
//!         Path::new("docs"),
//!         &ConvertOptions::default(),
//!     )?;
//!     for doc in &summary.documents {
//!         println!("{}", doc.file_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Recognized markup
//!
//! - `=== T ===`, `== T ==`, `= T =` headings, underlined with `*`, `=`, `-`
//! - `*`, `**`, `\*\*` list markers, nested three spaces per level
//! - `::` literal block markers
//! - `{| ... |}` wiki tables, rendered as RST simple tables
//! - ``\ `200px Label<image:path>`__`` inline images
//! - literal `\n` escapes, expanded to line breaks

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod sink;

// Re-export commonly used types
pub use convert::{convert_file, convert_reader, convert_str, ConvertOptions, Transducer};
pub use error::{Error, Result};
pub use model::{HeadingLevel, Table, TableCell, TableRow, Token, TokenKind, TokenMatch};
pub use parser::{Normalizer, TokenScanner};
pub use render::{render_table, ConversionStats, ConversionSummary, DocumentSummary};
pub use sink::{DirectorySink, DocumentRegistry, MemorySink, OutputSink};

use std::path::Path;

/// Builder for configuring and running a conversion.
///
/// # Example
///
/// ```no_run
/// use wiki2rst::Wiki2Rst;
///
/// let summary = Wiki2Rst::new()
///     .with_first_title("Overview")
///     .with_image_prefix("figures/")
///     .convert_file("export.txt", "docs")?;
/// # Ok::<(), wiki2rst::Error>(())
/// ```
pub struct Wiki2Rst {
    options: ConvertOptions,
}

impl Wiki2Rst {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the title of the first document.
    pub fn with_first_title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_first_title(title);
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options = self.options.with_image_prefix(prefix);
        self
    }

    /// Keep literal `\n` escapes instead of expanding them.
    pub fn keep_escaped_newlines(mut self) -> Self {
        self.options = self.options.with_newline_expansion(false);
        self
    }

    /// Fail on characters outside Latin-1.
    pub fn strict_latin1(mut self) -> Self {
        self.options = self.options.with_strict_latin1(true);
        self
    }

    /// Log every token match at debug level.
    pub fn trace(mut self) -> Self {
        self.options = self.options.with_trace(true);
        self
    }

    /// The options this builder will use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a file into `output_dir`.
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_dir: Q,
    ) -> Result<ConversionSummary> {
        convert_file(input.as_ref(), output_dir.as_ref(), &self.options)
    }

    /// Convert a string, keeping the output in memory.
    pub fn convert_str(&self, input: &str) -> Result<(MemorySink, ConversionSummary)> {
        convert_str(input, &self.options)
    }
}

impl Default for Wiki2Rst {
    fn default() -> Self {
        Self::new()
    }
}
