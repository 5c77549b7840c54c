//! Document shell wrapping the rendered HTML.
//!
//! A shell is free-form markup with exactly two substitution points,
//! `{{ Title }}` and `{{ Content }}`. The title is HTML-escaped on
//! substitution; the content is already-rendered markup and is inserted
//! verbatim.
//!
//! # Example
//!
//! ```
//! use gmi2html::Shell;
//!
//! let shell = Shell::parse("<title>{{ Title }}</title>{{ Content }}")?;
//! let html = shell.render("Fish & Chips", "<p>\nhi\n</p>\n")?;
//! assert_eq!(html, "<title>Fish &amp; Chips</title><p>\nhi\n</p>\n");
//! # Ok::<(), gmi2html::Error>(())
//! ```

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use minijinja::{context, AutoEscape, Environment, UndefinedBehavior, Value};

use crate::error::{Error, Result};

/// Built-in shell used when none is supplied.
pub const DEFAULT_SHELL: &str = include_str!("default.html");

const SHELL_NAME: &str = "shell";

/// A parsed document shell.
#[derive(Debug, Clone)]
pub struct Shell {
    source: Cow<'static, str>,
}

impl Shell {
    /// Parse a shell from its source text.
    pub fn parse(source: impl Into<Cow<'static, str>>) -> Result<Self> {
        let shell = Self {
            source: source.into(),
        };
        shell.environment()?;
        Ok(shell)
    }

    /// Read and parse a shell file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded shell from {}", path.display());
        Self::parse(source)
    }

    /// The shell source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute title and content into the shell.
    pub fn render(&self, title: &str, content: &str) -> Result<String> {
        let env = self.environment()?;
        let template = env.get_template(SHELL_NAME).map_err(Error::ShellRender)?;
        template
            .render(context! {
                Title => title,
                Content => Value::from_safe_string(content.to_string()),
            })
            .map_err(Error::ShellRender)
    }

    /// Render the complete document, then write it out.
    ///
    /// Nothing is written when substitution fails.
    pub fn write_to<W: Write>(&self, mut writer: W, title: &str, content: &str) -> Result<()> {
        let document = self.render(title, content)?;
        writer.write_all(document.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn environment(&self) -> Result<Environment<'_>> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template(SHELL_NAME, &self.source)
            .map_err(Error::ShellParse)?;
        Ok(env)
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            source: Cow::Borrowed(DEFAULT_SHELL),
        }
    }
}
