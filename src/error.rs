//! Error types for wiki2rst library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wiki2rst operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("File {} not found", .0.display())]
    InputNotFound(PathBuf),

    /// The output directory does not exist.
    #[error("Directory {} not found", .0.display())]
    OutputDirNotFound(PathBuf),

    /// A table was opened but input ended before its closing marker.
    #[error("Table never closed (opened at line {line})")]
    UnterminatedTable {
        /// Physical line on which the table started
        line: usize,
    },

    /// A character outside Latin-1 reached the output in strict mode.
    #[error("Character {ch:?} (U+{:04X}) at line {line} cannot be encoded as Latin-1", codepoint(.ch))]
    Encoding {
        /// Physical line being processed when the character was emitted
        line: usize,
        /// The offending character
        ch: char,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

fn codepoint(ch: &char) -> u32 {
    u32::from(*ch)
}
