//! Error types for gmi2html library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gmi2html operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting gemtext to HTML.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A named file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Input is not valid UTF-8.
    #[error("Invalid UTF-8 on line {line}")]
    Encoding {
        /// 1-indexed source line number
        line: usize,
    },

    /// A line-type tag outside the known set.
    #[error("Unknown line type: {0:?}")]
    UnknownLineType(String),

    /// A line that breaks the classifier contract.
    #[error("Invalid line {index}: {reason}")]
    Contract {
        /// 0-indexed position in the line sequence
        index: usize,
        /// What is wrong with the line
        reason: String,
    },

    /// The document shell does not parse.
    #[error("Parsing shell template: {0}")]
    ShellParse(#[source] minijinja::Error),

    /// The document shell failed during substitution.
    #[error("Executing shell template: {0}")]
    ShellRender(#[source] minijinja::Error),
}
