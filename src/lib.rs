//! # gmi2html
//!
//! Convert gemtext documents to HTML.
//!
//! Conversion runs in three stages: the gemtext is classified into typed
//! lines, the lines are rendered to an HTML fragment in a single pass, and
//! the fragment is substituted into a document shell together with a title
//! taken from the first line.
//!
//! ## Quick Start
//!
//! ```
//! use gmi2html::{parse_str, to_document, Shell};
//!
//! fn main() -> gmi2html::Result<()> {
//!     let lines = parse_str("# Hello\n\nWelcome to my capsule.\n=> gemini://example.org/ Example");
//!     let html = to_document(&lines, &Shell::default())?;
//!     assert!(html.contains("<title>Hello</title>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Adjacency grouping**: consecutive links, list items, quotes and
//!   preformatted lines share one container
//! - **Paragraphs**: consecutive text lines join into one paragraph with
//!   soft breaks; blank lines separate paragraphs
//! - **Custom shells**: any markup with `{{ Title }}` and `{{ Content }}`
//!   placeholders

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod shell;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Line, LineType};
pub use parser::{parse_bytes, parse_file, parse_reader, parse_str, GemtextParser};
pub use render::{extract_title, RenderOptions, RenderResult, RenderStats, DEFAULT_TITLE};
pub use shell::{Shell, DEFAULT_SHELL};

use std::io::{Read, Write};
use std::path::Path;

/// Render lines to an HTML fragment with default options.
///
/// # Example
///
/// ```
/// use gmi2html::{to_html, Line};
///
/// let html = to_html(&[Line::text("a"), Line::text("b")]).unwrap();
/// assert_eq!(html, "<p>\na<br>\nb\n</p>\n");
/// ```
pub fn to_html(lines: &[Line]) -> Result<String> {
    render::to_html(lines, &RenderOptions::default())
}

/// Render lines into a complete HTML document.
///
/// # Example
///
/// ```
/// use gmi2html::{to_document, Line, Shell};
///
/// let shell = Shell::parse("<h1>{{ Title }}</h1>\n{{ Content }}").unwrap();
/// let html = to_document(&[Line::list("x")], &shell).unwrap();
/// assert_eq!(html, "<h1>Untitled document</h1>\n<ul>\n<li>x</li>\n</ul>\n");
/// ```
pub fn to_document(lines: &[Line], shell: &Shell) -> Result<String> {
    let content = to_html(lines)?;
    shell.render(extract_title(lines), &content)
}

/// Builder for converting gemtext documents.
///
/// # Example
///
/// ```no_run
/// use gmi2html::{Gmi2Html, Shell};
///
/// let html = Gmi2Html::new()
///     .with_shell(Shell::from_file("shell.html")?)
///     .with_link_list_class("links")
///     .parse_files(&["index.gmi", "about.gmi"])?
///     .to_document()?;
/// # Ok::<(), gmi2html::Error>(())
/// ```
pub struct Gmi2Html {
    render_options: RenderOptions,
    shell: Shell,
}

impl Gmi2Html {
    /// Create a new builder with the built-in shell.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
            shell: Shell::default(),
        }
    }

    /// Set the document shell.
    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the CSS class of link lists.
    pub fn with_link_list_class(mut self, class: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_link_list_class(class);
        self
    }

    /// Classify gemtext from a string.
    pub fn parse_str(self, input: &str) -> Gmi2HtmlResult {
        self.into_result(parser::parse_str(input))
    }

    /// Classify gemtext from a reader.
    pub fn parse_reader<R: Read>(self, reader: R) -> Result<Gmi2HtmlResult> {
        let lines = parser::parse_reader(reader)?;
        Ok(self.into_result(lines))
    }

    /// Classify several files and concatenate their lines in order.
    pub fn parse_files<P: AsRef<Path>>(self, paths: &[P]) -> Result<Gmi2HtmlResult> {
        let mut lines = Vec::new();
        for path in paths {
            lines.extend(parser::parse_file(path)?);
        }
        Ok(self.into_result(lines))
    }

    fn into_result(self, lines: Vec<Line>) -> Gmi2HtmlResult {
        Gmi2HtmlResult {
            lines,
            render_options: self.render_options,
            shell: self.shell,
        }
    }
}

impl Default for Gmi2Html {
    fn default() -> Self {
        Self::new()
    }
}

/// Classified lines ready for rendering.
pub struct Gmi2HtmlResult {
    lines: Vec<Line>,
    render_options: RenderOptions,
    shell: Shell,
}

impl Gmi2HtmlResult {
    /// Get the classified lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get the document title.
    pub fn title(&self) -> &str {
        extract_title(&self.lines)
    }

    /// Render to an HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.lines, &self.render_options)
    }

    /// Render to an HTML fragment with statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.lines, &self.render_options)
    }

    /// Render the complete document.
    pub fn to_document(&self) -> Result<String> {
        let result = self.to_html_with_stats()?;
        log::info!(
            "Rendered {} lines: {} paragraphs, {} links, {} headings",
            result.stats.line_count,
            result.stats.paragraph_count,
            result.stats.link_count,
            result.stats.heading_count
        );
        self.shell.render(&result.title, &result.content)
    }

    /// Render the complete document and write it out.
    ///
    /// Nothing is written unless the whole document rendered.
    pub fn write_document<W: Write>(&self, writer: W) -> Result<()> {
        let content = self.to_html()?;
        self.shell.write_to(writer, self.title(), &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = Gmi2Html::default();
        assert_eq!(builder.render_options.link_list_class, "linklist");
        assert_eq!(builder.shell.source(), DEFAULT_SHELL);
    }

    #[test]
    fn test_builder_with_link_list_class() {
        let result = Gmi2Html::new()
            .with_link_list_class("links")
            .parse_str("=> /a A");
        let html = result.to_html().unwrap();
        assert!(html.starts_with("<ul class=\"links\">"));
    }

    #[test]
    fn test_builder_parse_str() {
        let result = Gmi2Html::new().parse_str("# Capsule\nhello");
        assert_eq!(result.lines().len(), 2);
        assert_eq!(result.title(), "Capsule");
    }

    #[test]
    fn test_builder_parse_reader_invalid_utf8() {
        let result = Gmi2Html::new().parse_reader(&b"\xfe\xff"[..]);
        assert!(matches!(result, Err(Error::Encoding { line: 1 })));
    }

    #[test]
    fn test_builder_parse_files_missing() {
        let result = Gmi2Html::new().parse_files(&["no/such/file.gmi"]);
        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn test_write_document() {
        let shell = Shell::parse("{{ Title }}|{{ Content }}").unwrap();
        let result = Gmi2Html::new().with_shell(shell).parse_str("# T\nx");
        let mut out = Vec::new();
        result.write_document(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "T|<h1>T</h1>\n<p>\nx\n</p>\n"
        );
    }

    #[test]
    fn test_to_document_title_escaped_once() {
        let lines = parse_str("# a & b");
        let html = to_document(&lines, &Shell::parse("{{ Title }}").unwrap()).unwrap();
        assert_eq!(html, "a &amp; b");
    }
}
