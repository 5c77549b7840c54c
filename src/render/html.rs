//! HTML rendering for classified gemtext lines.
//!
//! Gemtext is flat, so grouping needs no tree: a line only looks at the
//! type of its immediate predecessor and successor to decide whether to
//! open or close the container it belongs to. Plain text lines accumulate
//! into paragraphs that any other line (or a blank text line) closes.

use crate::error::{Error, Result};
use crate::model::{Line, LineType};

use super::escape::escape;
use super::title::extract_title;
use super::{RenderOptions, RenderResult, RenderStats};

/// Convert lines to an HTML fragment.
pub fn to_html(lines: &[Line], options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(lines)
}

/// Convert lines to an HTML fragment with title and statistics.
pub fn to_html_with_stats(lines: &[Line], options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(lines)
}

/// Single-pass HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
    output: String,
    paragraph: bool,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        let output = String::with_capacity(options.capacity);
        Self {
            options,
            stats: RenderStats::new(),
            output,
            paragraph: false,
        }
    }

    /// Render lines to an HTML fragment.
    pub fn render(mut self, lines: &[Line]) -> Result<String> {
        self.render_internal(lines)?;
        Ok(self.output)
    }

    /// Render lines to an HTML fragment with title and statistics.
    pub fn render_with_stats(mut self, lines: &[Line]) -> Result<RenderResult> {
        self.render_internal(lines)?;
        let title = extract_title(lines).to_string();
        Ok(RenderResult::new(self.output, title, self.stats))
    }

    fn render_internal(&mut self, lines: &[Line]) -> Result<()> {
        let mut last: Option<LineType> = None;

        for (index, line) in lines.iter().enumerate() {
            line.validate().map_err(|reason| Error::Contract { index, reason })?;
            let next = lines.get(index + 1);

            if self.paragraph && !line.is_paragraph_text() {
                self.close_paragraph();
            }

            self.render_line(line, last, next);
            self.stats.line_count += 1;
            last = Some(line.kind);
        }

        if self.paragraph {
            self.close_paragraph();
        }

        log::debug!(
            "Rendered {} lines into {} bytes",
            lines.len(),
            self.output.len()
        );
        Ok(())
    }

    fn render_line(&mut self, line: &Line, last: Option<LineType>, next: Option<&Line>) {
        let opens = last != Some(line.kind);
        let closes = next.map(|n| n.kind) != Some(line.kind);

        match line.kind {
            LineType::Link => {
                if opens {
                    self.output.push_str("<ul class=\"");
                    self.output.push_str(&escape(&self.options.link_list_class));
                    self.output.push_str("\">\n");
                }
                self.stats.link_count += 1;
                let href = line.link.as_deref().unwrap_or_default();
                self.output.push_str("<li><a href=\"");
                self.output.push_str(&escape(href));
                self.output.push_str("\">");
                self.output.push_str(&escape(&line.display));
                self.output.push_str("</a></li>\n");
                if closes {
                    self.output.push_str("</ul>\n");
                }
            }
            LineType::Preformatted => {
                if opens {
                    self.stats.preformatted_block_count += 1;
                    self.output.push_str("<pre>");
                }
                let raw = line.raw.as_deref().unwrap_or_default();
                self.output.push_str(&escape(raw));
                if closes {
                    self.output.push_str("</pre>");
                }
                self.output.push('\n');
            }
            LineType::Text => self.render_text(line, next),
            LineType::List => {
                if opens {
                    self.output.push_str("<ul>\n");
                }
                self.stats.list_item_count += 1;
                self.output.push_str("<li>");
                self.output.push_str(&escape(&line.display));
                self.output.push_str("</li>\n");
                if closes {
                    self.output.push_str("</ul>\n");
                }
            }
            LineType::Heading1 => self.render_heading("h1", line),
            LineType::Heading2 => self.render_heading("h2", line),
            LineType::Heading3 => self.render_heading("h3", line),
            LineType::Quote => {
                if opens {
                    self.output.push_str("<blockquote>\n");
                }
                self.stats.quote_line_count += 1;
                self.output.push_str(&escape(&line.display));
                self.output.push_str("<br>\n");
                if closes {
                    self.output.push_str("</blockquote>\n");
                }
            }
        }
    }

    fn render_text(&mut self, line: &Line, next: Option<&Line>) {
        // Blank lines only separate paragraphs
        if line.display.is_empty() {
            return;
        }

        if !self.paragraph {
            self.stats.paragraph_count += 1;
            self.output.push_str("<p>\n");
            self.paragraph = true;
        }
        self.output.push_str(&escape(&line.display));
        if next.is_some_and(Line::is_paragraph_text) {
            self.output.push_str("<br>");
        }
        self.output.push('\n');
    }

    fn render_heading(&mut self, tag: &str, line: &Line) {
        self.stats.heading_count += 1;
        self.output
            .push_str(&format!("<{tag}>{}</{tag}>\n", escape(&line.display)));
    }

    fn close_paragraph(&mut self) {
        self.paragraph = false;
        self.output.push_str("</p>\n");
    }
}
