//! Rich error reports for problems a clerk can fix without a developer:
//! a config file that does not parse, and a database that cannot be opened.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A config file problem, reported with the offending text underlined.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(pizza_shop::config))]
pub struct ConfigError {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Report `message` against `len` bytes of `source` starting at `offset`.
    #[must_use]
    pub fn at(
        message: impl Into<String>,
        source: NamedSource<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: source,
            span: SourceSpan::new(offset.into(), len),
            help: None,
        }
    }

    /// Report a TOML deserialization failure in the file `name` holding `content`.
    #[must_use]
    pub fn from_toml(name: impl AsRef<str>, content: &str, err: &toml::de::Error) -> Self {
        let (offset, len) = err
            .span()
            .map_or((0, 0), |range| (range.start, range.end.saturating_sub(range.start)));
        Self::at(
            err.message(),
            NamedSource::new(name, content.to_string()),
            offset,
            len,
        )
        .hint("run `pizza-shop config init --force` to start from a documented template")
    }

    #[must_use]
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }
}

/// The order database could not be opened or migrated.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot reach the order database: {reason}")]
#[diagnostic(
    code(pizza_shop::connection),
    help("check `database.path` in config.toml, or pass --db <PATH>")
)]
pub struct ConnectionError {
    pub reason: String,
}

impl From<String> for ConnectionError {
    fn from(reason: String) -> Self {
        Self { reason }
    }
}
