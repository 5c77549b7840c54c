//! Classified gemtext lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kind of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    /// A `=>` link line
    Link,
    /// A line inside a preformatted block
    Preformatted,
    /// Plain text, possibly blank
    Text,
    /// A `* ` list item
    List,
    /// A `#` heading
    Heading1,
    /// A `##` heading
    Heading2,
    /// A `###` heading
    Heading3,
    /// A `>` quote line
    Quote,
}

impl LineType {
    /// Every line type, in declaration order.
    pub const ALL: [LineType; 8] = [
        LineType::Link,
        LineType::Preformatted,
        LineType::Text,
        LineType::List,
        LineType::Heading1,
        LineType::Heading2,
        LineType::Heading3,
        LineType::Quote,
    ];

    /// Stable textual tag, as used by serde.
    pub fn tag(self) -> &'static str {
        match self {
            LineType::Link => "link",
            LineType::Preformatted => "preformatted",
            LineType::Text => "text",
            LineType::List => "list",
            LineType::Heading1 => "heading1",
            LineType::Heading2 => "heading2",
            LineType::Heading3 => "heading3",
            LineType::Quote => "quote",
        }
    }

    /// Heading level (1-3) or None.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            LineType::Heading1 => Some(1),
            LineType::Heading2 => Some(2),
            LineType::Heading3 => Some(3),
            _ => None,
        }
    }

    /// Heading type for a level, clamped to 1-3.
    pub fn heading(level: u8) -> Self {
        match level.clamp(1, 3) {
            1 => LineType::Heading1,
            2 => LineType::Heading2,
            _ => LineType::Heading3,
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LineType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| Error::UnknownLineType(s.to_string()))
    }
}

/// One classified source line.
///
/// `link` is set only on [`LineType::Link`] lines and `raw` only on
/// [`LineType::Preformatted`] lines. The constructors uphold this; lines
/// built by hand or deserialized can be checked with [`Line::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line kind
    #[serde(rename = "type")]
    pub kind: LineType,

    /// Visible text with format markers stripped
    #[serde(default)]
    pub display: String,

    /// Link destination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Unmodified source text of a preformatted line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl Line {
    fn new(kind: LineType, display: impl Into<String>) -> Self {
        Self {
            kind,
            display: display.into(),
            link: None,
            raw: None,
        }
    }

    /// Create a text line. An empty string makes a blank separator line.
    pub fn text(display: impl Into<String>) -> Self {
        Self::new(LineType::Text, display)
    }

    /// Create a blank text line.
    pub fn blank() -> Self {
        Self::text(String::new())
    }

    /// Create a link line.
    pub fn link(link: impl Into<String>, display: impl Into<String>) -> Self {
        let mut line = Self::new(LineType::Link, display);
        line.link = Some(link.into());
        line
    }

    /// Create a preformatted line.
    pub fn preformatted(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let mut line = Self::new(LineType::Preformatted, raw.clone());
        line.raw = Some(raw);
        line
    }

    /// Create a list item.
    pub fn list(display: impl Into<String>) -> Self {
        Self::new(LineType::List, display)
    }

    /// Create a heading (level clamped to 1-3).
    pub fn heading(level: u8, display: impl Into<String>) -> Self {
        Self::new(LineType::heading(level), display)
    }

    /// Create a quote line.
    pub fn quote(display: impl Into<String>) -> Self {
        Self::new(LineType::Quote, display)
    }

    /// Check if this is a text line with no content.
    pub fn is_blank(&self) -> bool {
        self.kind == LineType::Text && self.display.is_empty()
    }

    /// Check if this line contributes to a paragraph.
    pub fn is_paragraph_text(&self) -> bool {
        self.kind == LineType::Text && !self.display.is_empty()
    }

    /// Check the field population rules for this line's type.
    pub fn validate(&self) -> std::result::Result<(), String> {
        match (self.kind, &self.link) {
            (LineType::Link, None) => return Err("link line without destination".to_string()),
            (LineType::Link, Some(_)) | (_, None) => {}
            (kind, Some(_)) => return Err(format!("{} line carries a link destination", kind)),
        }
        match (self.kind, &self.raw) {
            (LineType::Preformatted, None) => {
                Err("preformatted line without raw text".to_string())
            }
            (LineType::Preformatted, Some(_)) | (_, None) => Ok(()),
            (kind, Some(_)) => Err(format!("{} line carries raw text", kind)),
        }
    }
}
