//! Data model shared by the scanner, the table reconstructor and the renderers.
//!
//! Tokens describe what the scanner recognized in the logical line; tables
//! are the row/cell structure recovered from wiki table markup before they
//! are laid out as RST simple tables.

mod table;
mod token;

pub use table::{Table, TableCell, TableRow};
pub use token::{HeadingLevel, Token, TokenKind, TokenMatch};
