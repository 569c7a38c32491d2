//! Input side of the converter: line normalization, token scanning and
//! wiki table parsing.

mod normalize;
pub mod scanner;
mod source;
pub mod table_parser;

pub use normalize::Normalizer;
pub use scanner::TokenScanner;
pub use source::LineSource;
pub use table_parser::{classify, parse_table, TableLine};
