//! Rendering module for converting classified lines to HTML.

pub mod escape;
mod html;
mod options;
mod result;
mod title;

pub use escape::escape;
pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use options::{RenderOptions, DEFAULT_CAPACITY, DEFAULT_LINK_LIST_CLASS};
pub use result::{RenderResult, RenderStats};
pub use title::{extract_title, DEFAULT_TITLE};
