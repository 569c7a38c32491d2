//! Conversion summary and statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::TokenKind;

/// Summary of one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Documents in the order they were opened
    pub documents: Vec<DocumentSummary>,

    /// File name of the build script
    pub build_script: String,

    /// Token and line statistics
    pub stats: ConversionStats,
}

impl ConversionSummary {
    /// Number of documents produced.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Titles of the produced documents, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.title.as_str()).collect()
    }
}

/// One output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document title
    pub title: String,

    /// RST file name
    pub file_name: String,

    /// File name the build script renders it to
    pub rendered_name: String,

    /// Lines written, banner included
    pub line_count: usize,
}

/// Statistics collected while converting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Physical input lines read
    pub input_lines: usize,

    /// Tokens handled, by kind
    pub tokens: BTreeMap<TokenKind, usize>,

    /// Tables rendered
    pub table_count: usize,

    /// Table rows rendered
    pub table_row_count: usize,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one handled token.
    pub fn add_token(&mut self, kind: TokenKind) {
        *self.tokens.entry(kind).or_insert(0) += 1;
    }

    /// Number of tokens of `kind` handled.
    pub fn token_count(&self, kind: TokenKind) -> usize {
        self.tokens.get(&kind).copied().unwrap_or(0)
    }

    /// Record one rendered table.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.table_row_count += rows;
    }
}
