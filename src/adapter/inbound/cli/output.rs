//! Terminal output for the shop CLI.
//!
//! Every handler prints through these helpers so that `--json`, `--quiet` and
//! `--color` behave the same across commands. Human-readable lines go to
//! stdout, errors to stderr.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// One JSON document per command instead of text.
    pub json: bool,
    /// Only essential text output.
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }

    /// Whether decorative text lines should be printed.
    const fn shows_text(self) -> bool {
        !self.json && !self.quiet
    }
}

static SETTINGS: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn settings() -> OutputConfig {
    let lock = SETTINGS.get_or_init(|| RwLock::new(OutputConfig::default()));
    match lock.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn shows_text() -> bool {
    settings().shows_text()
}

/// Install the settings for this process. Call once, before any output.
pub fn configure(config: OutputConfig) {
    let lock = SETTINGS.get_or_init(|| RwLock::new(config));
    match lock.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    settings().json
}

#[must_use]
pub fn is_quiet() -> bool {
    settings().quiet
}

/// Program name and version banner.
pub fn header(version: &str) {
    if !shows_text() {
        return;
    }
    println!(
        "{} {}\n",
        "pizza-shop".if_supports_color(Stream::Stdout, |t| t.bold()),
        version.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Bold title preceded by a blank line.
pub fn section(title: &str) {
    if !shows_text() {
        return;
    }
    println!("\n{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Indented `label  value` pair with a dimmed, aligned label.
pub fn field(label: &str, value: impl Display) {
    if !shows_text() {
        return;
    }
    let label = format!("{label:<12}");
    println!(
        "  {} {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

pub fn success(message: &str) {
    if !shows_text() {
        return;
    }
    println!(
        "  {} {message}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green())
    );
}

/// Warnings are shown even in quiet mode.
pub fn warning(message: &str) {
    if is_json() {
        return;
    }
    println!(
        "  {} {message}",
        "⚠".if_supports_color(Stream::Stdout, |t| t.yellow())
    );
}

/// Error line on stderr; a JSON object in JSON mode.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "error": { "message": message } }));
        return;
    }
    eprintln!(
        "  {} {message}",
        "×".if_supports_color(Stream::Stderr, |t| t.red())
    );
}

pub fn note(message: &str) {
    if !shows_text() {
        return;
    }
    println!(
        "  {}",
        message.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

pub fn hint(message: &str) {
    if !shows_text() {
        return;
    }
    println!(
        "  {}: {}",
        "hint".if_supports_color(Stream::Stdout, |t| t.cyan()),
        message.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Value rendered in cyan for use inside a message.
pub fn highlight(value: impl Display) -> String {
    let text = value.to_string();
    if is_json() {
        return text;
    }
    text.if_supports_color(Stream::Stdout, |t| t.cyan())
        .to_string()
}

/// Multi-line block (e.g. a table), indented two spaces. Shown in quiet mode.
pub fn lines(block: &str) {
    if is_json() {
        return;
    }
    for line in block.lines() {
        println!("  {line}");
    }
}

/// Print a command's JSON document.
pub fn json_output(value: serde_json::Value) {
    println!("{value}");
}
