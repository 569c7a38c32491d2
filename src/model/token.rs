//! Token types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of structural token, listed in priority order.
///
/// When two kinds match at the same offset of the buffer, the one that
/// appears earlier in [`TokenKind::ALL`] wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A word followed by a date stamp; starts a new output document
    PageBreak,
    /// `=== text ===`
    Title,
    /// `== text ==`
    Subtitle,
    /// `= text =`
    MinorTitle,
    /// Leading run of (possibly escaped) asterisks
    ListItem,
    /// `::` literal block marker
    LiteralBlock,
    /// `{|` or `{\|`
    TableStart,
    /// Inline image reference
    Image,
    /// Physical newline inside the buffer
    EscapedNewline,
}

impl TokenKind {
    /// All kinds in priority order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::PageBreak,
        TokenKind::Title,
        TokenKind::Subtitle,
        TokenKind::MinorTitle,
        TokenKind::ListItem,
        TokenKind::LiteralBlock,
        TokenKind::TableStart,
        TokenKind::Image,
        TokenKind::EscapedNewline,
    ];

    /// Kinds whose pattern only matches at the start of the buffer.
    pub fn is_start_anchored(self) -> bool {
        matches!(
            self,
            TokenKind::Title | TokenKind::Subtitle | TokenKind::MinorTitle | TokenKind::ListItem
        )
    }

    /// Short lowercase name used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::PageBreak => "newpage",
            TokenKind::Title => "title",
            TokenKind::Subtitle => "subtitle",
            TokenKind::MinorTitle => "minortitle",
            TokenKind::ListItem => "list",
            TokenKind::LiteralBlock => "literal",
            TokenKind::TableStart => "table",
            TokenKind::Image => "image",
            TokenKind::EscapedNewline => "newline",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Heading levels handled by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Three `=` on each side
    Title,
    /// Two `=` on each side
    Subtitle,
    /// One `=` on each side
    MinorTitle,
}

impl HeadingLevel {
    /// RST underline character for this level.
    pub fn underline(self) -> char {
        match self {
            HeadingLevel::Title => '*',
            HeadingLevel::Subtitle => '=',
            HeadingLevel::MinorTitle => '-',
        }
    }

    /// The token kind that produces this level.
    pub fn kind(self) -> TokenKind {
        match self {
            HeadingLevel::Title => TokenKind::Title,
            HeadingLevel::Subtitle => TokenKind::Subtitle,
            HeadingLevel::MinorTitle => TokenKind::MinorTitle,
        }
    }
}

/// A recognized token together with its captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Start of a new document named `title`
    PageBreak {
        /// Word preceding the date stamp
        title: &'a str,
    },
    /// Heading of the given level
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Heading text, trimmed
        text: &'a str,
    },
    /// List item marker
    ListItem {
        /// Nesting depth, 0 for a top-level item
        depth: usize,
    },
    /// Literal block marker
    LiteralBlock,
    /// Opening of a wiki table
    TableStart,
    /// Inline image
    Image {
        /// Width hint such as `200px`
        width: &'a str,
        /// Alternative text, trimmed
        label: &'a str,
        /// Path relative to the image directory
        path: &'a str,
    },
    /// Newline inside the buffer
    EscapedNewline,
}

impl Token<'_> {
    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::PageBreak { .. } => TokenKind::PageBreak,
            Token::Heading { level, .. } => level.kind(),
            Token::ListItem { .. } => TokenKind::ListItem,
            Token::LiteralBlock => TokenKind::LiteralBlock,
            Token::TableStart => TokenKind::TableStart,
            Token::Image { .. } => TokenKind::Image,
            Token::EscapedNewline => TokenKind::EscapedNewline,
        }
    }
}

/// A token and the byte span it occupies in the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch<'a> {
    /// The recognized token
    pub token: Token<'a>,
    /// Byte offset where the match starts
    pub start: usize,
    /// Byte offset just past the match
    pub end: usize,
}

impl TokenMatch<'_> {
    /// The kind of the matched token.
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(TokenKind::ALL[0], TokenKind::PageBreak);
        assert_eq!(TokenKind::ALL[8], TokenKind::EscapedNewline);
        assert!(TokenKind::PageBreak < TokenKind::Title);
        assert!(TokenKind::Image < TokenKind::EscapedNewline);
    }

    #[test]
    fn test_heading_underlines() {
        assert_eq!(HeadingLevel::Title.underline(), '*');
        assert_eq!(HeadingLevel::Subtitle.underline(), '=');
        assert_eq!(HeadingLevel::MinorTitle.underline(), '-');
    }

    #[test]
    fn test_token_kind() {
        let token = Token::Heading {
            level: HeadingLevel::Subtitle,
            text: "Intro",
        };
        assert_eq!(token.kind(), TokenKind::Subtitle);
        assert_eq!(token.kind().to_string(), "subtitle");
    }
}
