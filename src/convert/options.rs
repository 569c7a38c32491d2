//! Conversion options.

/// Options controlling a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Expand literal `\n` escapes into real line breaks
    pub expand_escaped_newlines: bool,

    /// Prefix for image paths in `.. image::` directives
    pub image_prefix: String,

    /// Extension of the generated RST files
    pub source_extension: String,

    /// Extension of the rendered files named in the build script
    pub rendered_extension: String,

    /// Renderer invoked by the build script
    pub render_command: String,

    /// File name of the build script
    pub build_script_name: String,

    /// First line of the build script
    pub build_script_header: Option<String>,

    /// Title of the document that receives text before the first page break
    pub first_title: Option<String>,

    /// Fail on characters that cannot be written as Latin-1
    pub strict_latin1: bool,

    /// Log every token match at debug level
    pub trace_tokens: bool,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable expansion of `\n` escapes.
    pub fn with_newline_expansion(mut self, expand: bool) -> Self {
        self.expand_escaped_newlines = expand;
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_prefix = prefix.into();
        self
    }

    /// Set the source and rendered file extensions (with leading dot).
    pub fn with_extensions(
        mut self,
        source: impl Into<String>,
        rendered: impl Into<String>,
    ) -> Self {
        self.source_extension = source.into();
        self.rendered_extension = rendered.into();
        self
    }

    /// Set the renderer command used in the build script.
    pub fn with_render_command(mut self, command: impl Into<String>) -> Self {
        self.render_command = command.into();
        self
    }

    /// Set the build script name and optional header line.
    pub fn with_build_script(mut self, name: impl Into<String>, header: Option<&str>) -> Self {
        self.build_script_name = name.into();
        self.build_script_header = header.map(str::to_string);
        self
    }

    /// Set the title of the first document.
    pub fn with_first_title(mut self, title: impl Into<String>) -> Self {
        self.first_title = Some(title.into());
        self
    }

    /// Enable or disable strict Latin-1 output.
    pub fn with_strict_latin1(mut self, strict: bool) -> Self {
        self.strict_latin1 = strict;
        self
    }

    /// Enable or disable token tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace_tokens = trace;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            expand_escaped_newlines: true,
            image_prefix: "images/".to_string(),
            source_extension: ".rst".to_string(),
            rendered_extension: ".html".to_string(),
            render_command: "rst2html.py".to_string(),
            build_script_name: "make.sh".to_string(),
            build_script_header: Some("#!/bin/bash".to_string()),
            first_title: None,
            strict_latin1: false,
            trace_tokens: false,
        }
    }
}
