//! Multi-pattern token scanner.
//!
//! Every token kind has its own pattern. A scan runs all of them against the
//! buffer and keeps the left-most match; when several kinds match at the
//! same offset the earlier kind in [`TokenKind::ALL`] wins.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::{HeadingLevel, Token, TokenKind, TokenMatch};

/// Date stamp accepted after a page title: YYYYMMDD for 2000-2039,
/// optionally followed by more digits.
const DATE_STAMP: &str = r"20[0-3][0-9][01][0-9][0-3][0-9]+";

struct Matcher {
    kind: TokenKind,
    regex: Regex,
}

static MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    TokenKind::ALL
        .iter()
        .map(|&kind| Matcher {
            kind,
            regex: Regex::new(&pattern(kind)).unwrap(),
        })
        .collect()
});

/// Regular expression recognizing `kind`.
pub fn pattern(kind: TokenKind) -> String {
    match kind {
        TokenKind::PageBreak => format!(r"(?P<title>\w+)\s+{}", DATE_STAMP),
        TokenKind::Title => r"^\s*===(?P<text>[^=]+?)===".to_string(),
        TokenKind::Subtitle => r"^\s*==(?P<text>[^=]+)==".to_string(),
        TokenKind::MinorTitle => r"^\s*=(?P<text>[^=]+)=".to_string(),
        TokenKind::ListItem => r"^[\\*]*\*[\\*]*\s*".to_string(),
        TokenKind::LiteralBlock => r"\s*::".to_string(),
        TokenKind::TableStart => r"\{\\?\|".to_string(),
        TokenKind::Image => {
            r"\\ `(?P<size>[0-9]+px)\s*(?:\s|\|)\s*(?P<label>[^<]+)<image:(?P<path>[^>]+)>`__"
                .to_string()
        }
        TokenKind::EscapedNewline => r"\n".to_string(),
    }
}

/// Token scanner over the logical line buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenScanner;

impl TokenScanner {
    /// Create a scanner.
    pub fn new() -> Self {
        Self
    }

    /// Find the left-most, highest-priority token in `buffer`.
    pub fn find<'a>(&self, buffer: &'a str) -> Option<TokenMatch<'a>> {
        let mut best: Option<(usize, TokenKind, Captures<'a>)> = None;

        for matcher in MATCHERS.iter() {
            let Some(caps) = matcher.regex.captures(buffer) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            // Strictly-less keeps the earlier (higher priority) kind on ties.
            if best.as_ref().map_or(true, |(start, _, _)| whole.start() < *start) {
                best = Some((whole.start(), matcher.kind, caps));
            }
        }

        best.map(|(_, kind, caps)| build_match(kind, &caps))
    }

    /// Whether `line` begins with a token that only matches at the start of
    /// the buffer (list item or heading).
    pub fn starts_block(&self, line: &str) -> bool {
        MATCHERS
            .iter()
            .filter(|m| m.kind.is_start_anchored())
            .any(|m| m.regex.is_match(line))
    }

    /// Find the table-end marker `|}` in `buffer`, returning the byte offset
    /// just past it.
    pub fn find_table_end(&self, buffer: &str) -> Option<usize> {
        buffer.find("|}").map(|pos| pos + 2)
    }
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn build_match<'a>(kind: TokenKind, caps: &Captures<'a>) -> TokenMatch<'a> {
    let (start, end, whole) = caps
        .get(0)
        .map_or((0, 0, ""), |m| (m.start(), m.end(), m.as_str()));

    let token = match kind {
        TokenKind::PageBreak => Token::PageBreak {
            title: group(caps, "title").trim(),
        },
        TokenKind::Title => Token::Heading {
            level: HeadingLevel::Title,
            text: group(caps, "text").trim(),
        },
        TokenKind::Subtitle => Token::Heading {
            level: HeadingLevel::Subtitle,
            text: group(caps, "text").trim(),
        },
        TokenKind::MinorTitle => Token::Heading {
            level: HeadingLevel::MinorTitle,
            text: group(caps, "text").trim(),
        },
        TokenKind::ListItem => Token::ListItem {
            depth: whole.matches('*').count().saturating_sub(1),
        },
        TokenKind::LiteralBlock => Token::LiteralBlock,
        TokenKind::TableStart => Token::TableStart,
        TokenKind::Image => Token::Image {
            width: group(caps, "size"),
            label: group(caps, "label").trim(),
            path: group(caps, "path"),
        },
        TokenKind::EscapedNewline => Token::EscapedNewline,
    };

    TokenMatch { token, start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(buffer: &str) -> Option<TokenMatch<'_>> {
        TokenScanner::new().find(buffer)
    }

    #[test]
    fn test_headings() {
        let m = scan("=== Big ===").unwrap();
        assert_eq!(
            m.token,
            Token::Heading {
                level: HeadingLevel::Title,
                text: "Big"
            }
        );

        let m = scan("== Intro == rest").unwrap();
        assert_eq!(m.kind(), TokenKind::Subtitle);
        assert_eq!((m.start, m.end), (0, 11));

        let m = scan("  = Small =").unwrap();
        assert_eq!(
            m.token,
            Token::Heading {
                level: HeadingLevel::MinorTitle,
                text: "Small"
            }
        );
    }

    #[test]
    fn test_headings_only_at_buffer_start() {
        assert!(scan("text == not a heading ==").is_none());
    }

    #[test]
    fn test_page_break() {
        let m = scan("see Phonons 20190412").unwrap();
        assert_eq!(m.token, Token::PageBreak { title: "Phonons" });
        assert_eq!(m.start, 4);
        assert_eq!(m.end, 20);

        // Years outside 2000-2039 are not date stamps.
        assert!(scan("Report 19991231").is_none());
        assert!(scan("Report 20501231").is_none());
    }

    #[test]
    fn test_page_break_beats_heading_at_same_offset() {
        let m = scan("Title 20200101 == x ==").unwrap();
        assert_eq!(m.kind(), TokenKind::PageBreak);
    }

    #[test]
    fn test_list_depth() {
        assert_eq!(scan("* a").unwrap().token, Token::ListItem { depth: 0 });
        assert_eq!(scan("** b").unwrap().token, Token::ListItem { depth: 1 });
        assert_eq!(scan("\\*\\*\\* c").unwrap().token, Token::ListItem { depth: 2 });
        assert!(scan("a * b").is_none());
    }

    #[test]
    fn test_literal_block_and_newline_tie() {
        // `\s*::` can start on the newline itself and outranks it.
        let m = scan("foo\n::").unwrap();
        assert_eq!(m.kind(), TokenKind::LiteralBlock);
        assert_eq!(m.start, 3);

        let m = scan("foo\nbar").unwrap();
        assert_eq!(m.kind(), TokenKind::EscapedNewline);
        assert_eq!((m.start, m.end), (3, 4));
    }

    #[test]
    fn test_table_start() {
        assert_eq!(scan("x {| y").unwrap().start, 2);
        assert_eq!(scan("{\\| y").unwrap().kind(), TokenKind::TableStart);
        assert_eq!(TokenScanner::new().find_table_end("{| a |} b"), Some(7));
        assert_eq!(TokenScanner::new().find_table_end("{| a"), None);
    }

    #[test]
    fn test_image() {
        let m = scan("\\ `200px Label<image:path/to/img.png>`__ after").unwrap();
        assert_eq!(
            m.token,
            Token::Image {
                width: "200px",
                label: "Label",
                path: "path/to/img.png"
            }
        );
        assert_eq!(m.start, 0);

        let m = scan("\\ `50px|Thumb <image:a.svg>`__").unwrap();
        assert_eq!(
            m.token,
            Token::Image {
                width: "50px",
                label: "Thumb",
                path: "a.svg"
            }
        );
    }

    #[test]
    fn test_leftmost_wins_over_priority() {
        let m = scan("a\nThing 20200101").unwrap();
        assert_eq!(m.kind(), TokenKind::EscapedNewline);
    }

    #[test]
    fn test_starts_block() {
        let scanner = TokenScanner::new();
        assert!(scanner.starts_block("** b"));
        assert!(scanner.starts_block("\\* escaped"));
        assert!(scanner.starts_block("== Intro =="));
        assert!(scanner.starts_block("  = Small ="));
        assert!(!scanner.starts_block("plain text"));
        assert!(!scanner.starts_block("{| table"));
        assert!(!scanner.starts_block("Phonons 20190412"));
    }

    #[test]
    fn test_no_token() {
        assert!(scan("plain text").is_none());
        assert!(scan("").is_none());
    }
}
