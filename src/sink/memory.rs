//! In-memory output sink.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use super::OutputSink;

#[derive(Debug, Default)]
struct Files {
    order: Vec<String>,
    contents: HashMap<String, Vec<u8>>,
}

/// Sink that keeps every file in memory.
///
/// Clones share the same storage, so a clone kept by the caller can read
/// back what the converter wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Rc<RefCell<Files>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// File names in creation order.
    pub fn file_names(&self) -> Vec<String> {
        self.files.borrow().order.clone()
    }

    /// Contents of `file_name`, if it was created.
    pub fn contents(&self, file_name: &str) -> Option<String> {
        self.files
            .borrow()
            .contents
            .get(file_name)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Lines of `file_name`; empty if it was never created.
    pub fn lines(&self, file_name: &str) -> Vec<String> {
        self.contents(file_name)
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

impl OutputSink for MemorySink {
    type Writer = MemoryFile;

    fn create(&mut self, file_name: &str) -> io::Result<MemoryFile> {
        let mut files = self.files.borrow_mut();
        if !files.contents.contains_key(file_name) {
            files.order.push(file_name.to_string());
        }
        files.contents.insert(file_name.to_string(), Vec::new());

        Ok(MemoryFile {
            name: file_name.to_string(),
            files: Rc::clone(&self.files),
        })
    }
}

/// Writer for one in-memory file.
#[derive(Debug)]
pub struct MemoryFile {
    name: String,
    files: Rc<RefCell<Files>>,
}

impl Write for MemoryFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.files
            .borrow_mut()
            .contents
            .entry(self.name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
