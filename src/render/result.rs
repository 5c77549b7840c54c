//! Rendering result with title and statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a line sequence, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML fragment
    pub content: String,

    /// Document title derived from the lines
    pub title: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, title: String, stats: RenderStats) -> Self {
        Self {
            content,
            title,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of lines rendered
    pub line_count: u32,

    /// Number of paragraphs opened
    pub paragraph_count: u32,

    /// Number of link entries
    pub link_count: u32,

    /// Number of list entries
    pub list_item_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of quote lines
    pub quote_line_count: u32,

    /// Number of preformatted blocks
    pub preformatted_block_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}
