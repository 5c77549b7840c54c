//! Gemtext line classifier.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Line;

const PREFORMAT_TOGGLE: &str = "```";
const LINK_PREFIX: &str = "=>";
const LIST_PREFIX: &str = "* ";
const QUOTE_PREFIX: &str = ">";

/// Gemtext classifier.
///
/// Classification is line-local except for preformatted mode, which is
/// toggled by lines starting with three backticks. The toggle lines
/// themselves produce no output.
#[derive(Debug, Default)]
pub struct GemtextParser {
    preformatted: bool,
    lines: Vec<Line>,
}

impl GemtextParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a whole string.
    pub fn parse_str(mut self, input: &str) -> Vec<Line> {
        for line in input.lines() {
            self.push_line(line);
        }
        self.finish()
    }

    /// Classify raw bytes, which must be UTF-8.
    pub fn parse_bytes(self, data: &[u8]) -> Result<Vec<Line>> {
        self.parse_reader(data)
    }

    /// Classify everything a reader yields.
    pub fn parse_reader<R: Read>(mut self, reader: R) -> Result<Vec<Line>> {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            let line = std::str::from_utf8(&buf).map_err(|_| Error::Encoding { line: number })?;
            self.push_line(strip_terminator(line));
        }

        Ok(self.finish())
    }

    /// Classify a single source line (without its terminator).
    pub fn push_line(&mut self, line: &str) {
        if line.starts_with(PREFORMAT_TOGGLE) {
            self.preformatted = !self.preformatted;
            return;
        }

        let classified = if self.preformatted {
            Line::preformatted(line)
        } else {
            classify(line)
        };
        self.lines.push(classified);
    }

    /// Finish classification and return the lines.
    pub fn finish(self) -> Vec<Line> {
        if self.preformatted {
            log::debug!("Input ended inside a preformatted block");
        }
        log::debug!("Classified {} lines", self.lines.len());
        self.lines
    }
}

/// Classify one line outside preformatted mode.
fn classify(line: &str) -> Line {
    if let Some(rest) = line.strip_prefix(LINK_PREFIX) {
        return classify_link(line, rest);
    }

    // Longest heading prefix first
    for level in (1..=3u8).rev() {
        let marker = &"###"[..level as usize];
        if let Some(rest) = line.strip_prefix(marker) {
            return Line::heading(level, rest.trim_start());
        }
    }

    if let Some(rest) = line.strip_prefix(LIST_PREFIX) {
        return Line::list(rest.trim_start());
    }

    if let Some(rest) = line.strip_prefix(QUOTE_PREFIX) {
        return Line::quote(rest.trim_start());
    }

    Line::text(line)
}

fn classify_link(line: &str, rest: &str) -> Line {
    let rest = rest.trim_start();
    let (link, label) = match rest.find(char::is_whitespace) {
        Some(pos) => (&rest[..pos], rest[pos..].trim()),
        None => (rest, ""),
    };

    if link.is_empty() {
        return Line::text(line);
    }

    let display = if label.is_empty() { link } else { label };
    Line::link(link, display)
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Classify a gemtext file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Line>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    GemtextParser::new().parse_reader(file).map_err(|e| match e {
        Error::Io(source) => Error::Read {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Classify gemtext from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Line>> {
    GemtextParser::new().parse_reader(reader)
}

/// Classify gemtext from a string.
pub fn parse_str(input: &str) -> Vec<Line> {
    GemtextParser::new().parse_str(input)
}

/// Classify gemtext from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Vec<Line>> {
    GemtextParser::new().parse_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineType;

    #[test]
    fn test_classify_headings() {
        assert_eq!(classify("# Title"), Line::heading(1, "Title"));
        assert_eq!(classify("## Section"), Line::heading(2, "Section"));
        assert_eq!(classify("###Sub"), Line::heading(3, "Sub"));
        // Four hashes is still a level-3 heading
        assert_eq!(classify("#### Deep"), Line::heading(3, "# Deep"));
    }

    #[test]
    fn test_classify_link() {
        assert_eq!(
            classify("=> gemini://example.org/ Example site"),
            Line::link("gemini://example.org/", "Example site")
        );
        assert_eq!(
            classify("=>/docs\tDocs  "),
            Line::link("/docs", "Docs")
        );
        assert_eq!(
            classify("=> https://x"),
            Line::link("https://x", "https://x")
        );
    }

    #[test]
    fn test_classify_empty_link_is_text() {
        assert_eq!(classify("=>"), Line::text("=>"));
        assert_eq!(classify("=>   "), Line::text("=>   "));
    }

    #[test]
    fn test_classify_list_and_quote() {
        assert_eq!(classify("* item"), Line::list("item"));
        assert_eq!(classify("*item"), Line::text("*item"));
        assert_eq!(classify("> wise words"), Line::quote("wise words"));
        assert_eq!(classify(">"), Line::quote(""));
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify("plain"), Line::text("plain"));
        assert_eq!(classify(""), Line::blank());
        assert_eq!(classify("  spaced"), Line::text("  spaced"));
    }

    #[test]
    fn test_preformatted_toggle() {
        let lines = parse_str("before\n```rust\n# not a heading\n  x < y\n```\nafter");
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineType::Text,
                LineType::Preformatted,
                LineType::Preformatted,
                LineType::Text
            ]
        );
        assert_eq!(lines[1].raw.as_deref(), Some("# not a heading"));
        assert_eq!(lines[2].raw.as_deref(), Some("  x < y"));
    }

    #[test]
    fn test_unterminated_preformatted() {
        let lines = parse_str("```\ncode");
        assert_eq!(lines, vec![Line::preformatted("code")]);
    }

    #[test]
    fn test_parse_reader_strips_crlf() {
        let lines = parse_reader("# Title\r\ntext\r\n".as_bytes()).unwrap();
        assert_eq!(lines, vec![Line::heading(1, "Title"), Line::text("text")]);
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let data = b"fine\nalso fine\nbad \xff\n";
        let result = parse_bytes(data);
        assert!(matches!(result, Err(Error::Encoding { line: 3 })));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_bytes(b"").unwrap().is_empty());
        assert!(parse_str("").is_empty());
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("definitely/not/here.gmi");
        assert!(matches!(result, Err(Error::Read { .. })));
    }
}
