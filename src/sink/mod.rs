//! Output sinks and the document registry.
//!
//! An [`OutputSink`] creates named writable files. The
//! [`DocumentRegistry`] sits on top of a sink and owns the lifecycle of the
//! output documents: exactly one document is open at a time, each is closed
//! before the next one is created, and every creation appends one entry to
//! the build script.

mod directory;
mod memory;

pub use directory::DirectorySink;
pub use memory::{MemoryFile, MemorySink};

use std::collections::HashSet;
use std::io::{self, Write};

use crate::convert::ConvertOptions;
use crate::error::{Error, Result};
use crate::render::{rst, DocumentSummary};

/// A destination for named output files.
pub trait OutputSink {
    /// Writer for one file.
    type Writer: Write;

    /// Create (or truncate) the file `file_name`.
    fn create(&mut self, file_name: &str) -> io::Result<Self::Writer>;

    /// Called once after the build script has been written and flushed.
    fn finish_build_script(&mut self, _file_name: &str) -> io::Result<()> {
        Ok(())
    }
}

struct OpenDocument<W> {
    summary: DocumentSummary,
    writer: W,
}

/// Registry of output documents plus the build script.
pub struct DocumentRegistry<S: OutputSink> {
    sink: S,
    source_extension: String,
    rendered_extension: String,
    render_command: String,
    script_name: String,
    script: S::Writer,
    current: Option<OpenDocument<S::Writer>>,
    closed: Vec<DocumentSummary>,
    seen_titles: HashSet<String>,
}

impl<S: OutputSink> DocumentRegistry<S> {
    /// Create the build script and open the first document.
    pub fn new(mut sink: S, options: &ConvertOptions, first_title: &str) -> Result<Self> {
        let mut script = sink.create(&options.build_script_name)?;
        if let Some(ref header) = options.build_script_header {
            writeln!(script, "{}", header)?;
        }

        let mut registry = Self {
            sink,
            source_extension: options.source_extension.clone(),
            rendered_extension: options.rendered_extension.clone(),
            render_command: options.render_command.clone(),
            script_name: options.build_script_name.clone(),
            script,
            current: None,
            closed: Vec::new(),
            seen_titles: HashSet::new(),
        };
        registry.open(first_title)?;
        Ok(registry)
    }

    /// Close the current document and open a new one titled `title`.
    pub fn open(&mut self, title: &str) -> Result<()> {
        self.close_current()?;

        let file_name = format!("{}{}", title, self.source_extension);
        let rendered_name = format!("{}{}", title, self.rendered_extension);

        if !self.seen_titles.insert(title.to_string()) {
            log::warn!("Document {} appears more than once; overwriting", file_name);
        }

        let writer = self.sink.create(&file_name)?;
        writeln!(
            self.script,
            "{}",
            rst::build_command(&self.render_command, &file_name, &rendered_name)
        )?;
        log::info!("Parsing {}", title);

        self.current = Some(OpenDocument {
            summary: DocumentSummary {
                title: title.to_string(),
                file_name,
                rendered_name,
                line_count: 0,
            },
            writer,
        });

        for line in rst::banner(title) {
            self.write_line(&line)?;
        }
        Ok(())
    }

    /// Write one line to the open document.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let doc = self
            .current
            .as_mut()
            .ok_or_else(|| Error::Other("No output document is open".into()))?;
        writeln!(doc.writer, "{}", line)?;
        doc.summary.line_count += 1;
        Ok(())
    }

    /// Name of the build script file.
    pub fn build_script_name(&self) -> &str {
        &self.script_name
    }

    fn close_current(&mut self) -> Result<()> {
        if let Some(mut doc) = self.current.take() {
            doc.writer.flush()?;
            self.closed.push(doc.summary);
        }
        Ok(())
    }

    /// Close every open file and return the sink with the document list.
    pub fn finish(mut self) -> Result<(S, Vec<DocumentSummary>)> {
        self.close_current()?;
        self.script.flush()?;
        drop(self.script);
        self.sink.finish_build_script(&self.script_name)?;
        Ok((self.sink, self.closed))
    }
}
