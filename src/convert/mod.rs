//! Conversion entry points.
//!
//! # Example
//!
//! ```no_run
//! use wiki2rst::convert::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> wiki2rst::Result<()> {
//!     let summary = convert_file(
//!         Path::new("export.txt"),
//!         Path::new("docs"),
//!         &ConvertOptions::default(),
//!     )?;
//!     println!("{} documents", summary.document_count());
//!     Ok(())
//! }
//! ```

mod options;
mod transducer;

pub use options::ConvertOptions;
pub use transducer::Transducer;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::error::{Error, Result};
use crate::render::ConversionSummary;
use crate::sink::{DirectorySink, MemorySink, OutputSink};

/// Title used for the first document when nothing better is known.
pub const DEFAULT_FIRST_TITLE: &str = "index";

/// Convert lines from `reader` into documents created through `sink`.
pub fn convert_reader<R: BufRead, S: OutputSink>(
    reader: R,
    sink: S,
    options: &ConvertOptions,
) -> Result<(S, ConversionSummary)> {
    let first_title = options
        .first_title
        .clone()
        .unwrap_or_else(|| DEFAULT_FIRST_TITLE.to_string());
    Transducer::new(reader, sink, options, &first_title)?.run()
}

/// Convert an in-memory string; the documents are kept in a [`MemorySink`].
pub fn convert_str(
    input: &str,
    options: &ConvertOptions,
) -> Result<(MemorySink, ConversionSummary)> {
    convert_reader(Cursor::new(input), MemorySink::new(), options)
}

/// Convert `input` into RST files and a build script inside `output_dir`.
///
/// Both paths must exist. Unless a first title is configured, text before
/// the first page break goes to a document named after the input file.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    let sink = DirectorySink::new(output_dir)?;

    let mut options = options.clone();
    if options.first_title.is_none() {
        options.first_title = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }

    let reader = BufReader::new(File::open(input)?);
    let (_, summary) = convert_reader(reader, sink, &options)?;
    Ok(summary)
}
