//! Line model shared by the classifier and the renderer.
//!
//! A gemtext document is flat: an ordered sequence of typed lines with no
//! nesting. Lines are built once and never mutated.

mod line;

pub use line::{Line, LineType};
