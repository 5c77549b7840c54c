//! Document title extraction.

use crate::model::{Line, LineType};

/// Title used when the document does not open with a level-1 heading.
pub const DEFAULT_TITLE: &str = "Untitled document";

/// Derive the document title.
///
/// Only a level-1 heading on the very first line qualifies. The text is
/// returned unescaped.
pub fn extract_title(lines: &[Line]) -> &str {
    match lines.first() {
        Some(line) if line.kind == LineType::Heading1 => line.display.as_str(),
        _ => DEFAULT_TITLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_first_heading() {
        let lines = vec![Line::heading(1, "Hello"), Line::text("body")];
        assert_eq!(extract_title(&lines), "Hello");
    }

    #[test]
    fn test_title_default_when_empty() {
        assert_eq!(extract_title(&[]), DEFAULT_TITLE);
    }

    #[test]
    fn test_title_ignores_other_levels_and_positions() {
        let lines = vec![Line::heading(2, "Section")];
        assert_eq!(extract_title(&lines), DEFAULT_TITLE);

        let lines = vec![Line::text("intro"), Line::heading(1, "Late")];
        assert_eq!(extract_title(&lines), DEFAULT_TITLE);
    }

    #[test]
    fn test_title_not_escaped() {
        let lines = vec![Line::heading(1, "Fish & <Chips>")];
        assert_eq!(extract_title(&lines), "Fish & <Chips>");
    }
}
