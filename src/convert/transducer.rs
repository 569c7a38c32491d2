//! The markup transducer: scan, dispatch, emit.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::model::{Token, TokenMatch};
use crate::parser::{parse_table, LineSource, Normalizer, TokenScanner};
use crate::render::{render_table, rst, ConversionStats, ConversionSummary};
use crate::sink::{DocumentRegistry, OutputSink};

use super::ConvertOptions;

/// Single-pass converter from wiki markup lines to RST documents.
///
/// The transducer owns the logical line buffer and the document registry.
/// Each scan step finds the left-most token in the buffer, emits whatever
/// precedes it, rewrites the token and keeps the remainder for the next
/// step. When the buffer holds no token the next physical line is appended.
pub struct Transducer<R, S: OutputSink> {
    scanner: TokenScanner,
    source: LineSource<R>,
    docs: DocumentRegistry<S>,
    buffer: String,
    image_prefix: String,
    strict_latin1: bool,
    trace: bool,
    stats: ConversionStats,
}

impl<R: BufRead, S: OutputSink> Transducer<R, S> {
    /// Create a transducer reading from `reader` and writing into `sink`.
    /// The first document, titled `first_title`, is opened immediately.
    pub fn new(reader: R, sink: S, options: &ConvertOptions, first_title: &str) -> Result<Self> {
        let normalizer = Normalizer::new(options.expand_escaped_newlines);
        Ok(Self {
            scanner: TokenScanner::new(),
            source: LineSource::new(reader, normalizer),
            docs: DocumentRegistry::new(sink, options, first_title)?,
            buffer: String::new(),
            image_prefix: options.image_prefix.clone(),
            strict_latin1: options.strict_latin1,
            trace: options.trace_tokens,
            stats: ConversionStats::new(),
        })
    }

    /// Run to end of input, close every document and return the sink.
    pub fn run(mut self) -> Result<(S, ConversionSummary)> {
        if let Some(first) = self.source.next_line()? {
            self.buffer = first;
        }

        loop {
            self.drain()?;
            match self.source.next_line()? {
                Some(next) => self.append(next),
                None => break,
            }
        }

        let rest = std::mem::take(&mut self.buffer);
        if !rest.is_empty() {
            self.emit(&rest)?;
        }

        self.stats.input_lines = self.source.line_number();
        let build_script = self.docs.build_script_name().to_string();
        let (sink, documents) = self.docs.finish()?;

        Ok((
            sink,
            ConversionSummary {
                documents,
                build_script,
                stats: self.stats,
            },
        ))
    }

    /// Join a new physical line onto the buffer. A blank line becomes a
    /// paragraph break; a line opening a list item or heading starts on a
    /// line of its own.
    fn append(&mut self, next: String) {
        if next.is_empty() {
            self.buffer.push_str("\n\n");
        } else if self.buffer.is_empty() {
            self.buffer = next;
        } else if self.scanner.starts_block(&next) {
            self.buffer.push('\n');
            self.buffer.push_str(&next);
        } else {
            self.buffer.push(' ');
            self.buffer.push_str(&next);
        }
    }

    /// Handle tokens until the buffer holds none.
    fn drain(&mut self) -> Result<()> {
        loop {
            let buffer = std::mem::take(&mut self.buffer);
            let Some(found) = self.scanner.find(&buffer) else {
                self.buffer = buffer;
                return Ok(());
            };
            self.buffer = self.handle(&buffer, found)?;
        }
    }

    /// Dispatch one token; returns the new buffer.
    fn handle(&mut self, buffer: &str, found: TokenMatch<'_>) -> Result<String> {
        self.stats.add_token(found.kind());
        if self.trace {
            log::debug!("{} {:?}", found.kind(), &buffer[found.start..found.end]);
        }

        let before = &buffer[..found.start];
        let after = &buffer[found.end..];

        match found.token {
            Token::PageBreak { title } => {
                self.emit_text(before)?;
                self.docs.open(title)?;
            }
            Token::Heading { level, text } => {
                self.emit_text(before)?;
                for line in rst::heading(text, level) {
                    self.emit(&line)?;
                }
            }
            Token::ListItem { depth } => {
                // The rest of the item stays in the buffer for further tokens.
                return Ok(format!("{}{}{}", before, rst::list_prefix(depth), after));
            }
            Token::LiteralBlock => {
                self.emit_text(before)?;
                self.emit("::")?;
            }
            Token::TableStart => return self.handle_table(buffer, found.start),
            Token::Image { width, label, path } => {
                if !before.trim().is_empty() {
                    self.emit(before)?;
                }
                let block = rst::image(&self.image_prefix, path, width, label);
                for line in block {
                    self.emit(&line)?;
                }
            }
            Token::EscapedNewline => {
                self.emit(&rst::finish_line(before))?;
            }
        }

        Ok(after.to_string())
    }

    /// Collect the table through its end marker, then render it.
    fn handle_table(&mut self, buffer: &str, start: usize) -> Result<String> {
        let opened_at = self.source.line_number();
        let mut span = buffer[start..].to_string();

        let end = loop {
            if let Some(end) = self.scanner.find_table_end(&span) {
                break end;
            }
            match self.source.next_line()? {
                Some(next) => {
                    span.push(' ');
                    span.push_str(&next);
                }
                None => return Err(Error::UnterminatedTable { line: opened_at }),
            }
        };

        let table = parse_table(&span[..end]);
        if self.trace {
            log::debug!(
                "table: {} rows, {} columns, merged cells: {}",
                table.row_count(),
                table.column_count(),
                table.has_merged_cells()
            );
        }
        self.stats.add_table(table.row_count());

        self.emit_text(&buffer[..start])?;
        for line in render_table(&table) {
            self.emit(&line)?;
        }

        Ok(span[end..].to_string())
    }

    fn emit_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.emit(text)
    }

    fn emit(&mut self, line: &str) -> Result<()> {
        if self.strict_latin1 {
            if let Some(ch) = line.chars().find(|c| u32::from(*c) > 0xFF) {
                return Err(Error::Encoding {
                    line: self.source.line_number(),
                    ch,
                });
            }
        }
        self.docs.write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::io::Cursor;

    fn run(input: &str) -> (MemorySink, ConversionSummary) {
        let sink = MemorySink::new();
        let transducer = Transducer::new(
            Cursor::new(input.to_string()),
            sink.clone(),
            &ConvertOptions::default(),
            "index",
        )
        .unwrap();
        let (_, summary) = transducer.run().unwrap();
        (sink, summary)
    }

    fn body(sink: &MemorySink, file: &str) -> Vec<String> {
        sink.lines(file).into_iter().skip(4).collect()
    }

    #[test]
    fn test_subtitle() {
        let (sink, _) = run("== Intro ==\n");
        assert_eq!(body(&sink, "index.rst"), vec!["Intro", "=====", ""]);
    }

    #[test]
    fn test_paragraph_lines_are_joined() {
        let (sink, _) = run("one\ntwo\n\nthree\n");
        assert_eq!(body(&sink, "index.rst"), vec!["one two", "", "three"]);
    }

    #[test]
    fn test_list_items() {
        let (sink, summary) = run("* a\n\n** b\n");
        assert_eq!(body(&sink, "index.rst"), vec!["- a", "", "   - b"]);
        assert_eq!(summary.stats.token_count(crate::model::TokenKind::ListItem), 2);
    }

    #[test]
    fn test_consecutive_list_items() {
        let (sink, _) = run("* a\n** b\n*** c\n");
        assert_eq!(body(&sink, "index.rst"), vec!["- a", "   - b", "      - c"]);
    }

    #[test]
    fn test_heading_after_paragraph_line() {
        let (sink, _) = run("Some text\n== Intro ==\nmore\n");
        assert_eq!(
            body(&sink, "index.rst"),
            vec!["Some text", "Intro", "=====", "", "more"]
        );
    }

    #[test]
    fn test_page_break_splits_documents() {
        let (sink, summary) = run("before\n\nChapter 20200101\nafter\n");

        assert_eq!(summary.titles(), vec!["index", "Chapter"]);
        assert_eq!(body(&sink, "index.rst"), vec!["before", ""]);
        assert_eq!(body(&sink, "Chapter.rst"), vec!["after"]);
    }

    #[test]
    fn test_literal_block() {
        let (sink, _) = run("Example::\n\n    code\n");
        assert_eq!(
            body(&sink, "index.rst"),
            vec!["Example", "::", "", "", "    code"]
        );
    }

    #[test]
    fn test_unterminated_table() {
        let sink = MemorySink::new();
        let transducer = Transducer::new(
            Cursor::new("intro\n{|\n| a\n"),
            sink.clone(),
            &ConvertOptions::default(),
            "index",
        )
        .unwrap();

        let err = transducer.run().unwrap_err();
        assert!(matches!(err, Error::UnterminatedTable { line: 2 }));
        assert!(!sink.contents("index.rst").unwrap().contains("| a"));
    }

    #[test]
    fn test_strict_latin1() {
        let transducer = Transducer::new(
            Cursor::new("caf\u{e9} \u{03B2}\n"),
            MemorySink::new(),
            &ConvertOptions::new().with_strict_latin1(true),
            "index",
        )
        .unwrap();

        let err = transducer.run().unwrap_err();
        assert!(matches!(err, Error::Encoding { ch: '\u{03B2}', .. }));
    }
}
