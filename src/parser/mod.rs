//! Gemtext parsing into classified lines.

mod gemtext;

pub use gemtext::{parse_bytes, parse_file, parse_reader, parse_str, GemtextParser};
