//! Physical line source.

use std::io::BufRead;

use crate::error::Result;

use super::Normalizer;

/// Reads physical lines from a buffered reader and normalizes them.
pub struct LineSource<R> {
    reader: R,
    normalizer: Normalizer,
    line_number: usize,
    exhausted: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Create a line source over `reader`.
    pub fn new(reader: R, normalizer: Normalizer) -> Self {
        Self {
            reader,
            normalizer,
            line_number: 0,
            exhausted: false,
        }
    }

    /// Read and normalize the next line. Returns `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut raw = String::new();
        if self.reader.read_line(&mut raw)? == 0 {
            self.exhausted = true;
            return Ok(None);
        }
        self.line_number += 1;

        if raw.ends_with('\n') {
            raw.pop();
            if raw.ends_with('\r') {
                raw.pop();
            }
        }

        Ok(Some(self.normalizer.process(&raw)))
    }

    /// 1-based number of the last line returned, 0 before the first read.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_and_counts_lines() {
        let mut source = LineSource::new(Cursor::new("a\r\nb\n\nc"), Normalizer::default());

        assert_eq!(source.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("c"));
        assert_eq!(source.line_number(), 4);
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.line_number(), 4);
    }

    #[test]
    fn test_lines_are_normalized() {
        let mut source = LineSource::new(Cursor::new("x \u{2014} y\\nz\n"), Normalizer::default());
        assert_eq!(source.next_line().unwrap().as_deref(), Some("x --- y\nz"));
    }
}
