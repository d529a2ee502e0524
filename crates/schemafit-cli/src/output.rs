//! Terminal output for the command handlers.
//!
//! Every human-facing line goes through [`OutputManager`]. JSON report
//! output deliberately does not: handlers print serialized reports with a
//! plain `println!` so machine output stays parseable in non-TTY pipes,
//! and use [`OutputManager::is_json`] to keep the human lines out of it.
//!
//! Quiet mode silences everything here. Error rendering lives in
//! `handle_error`, which writes to stderr and never goes quiet.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// What kind of line is being written; decides glyph and color.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Warning,
    Info,
    Header,
}

/// Writes human-facing lines to stdout, honoring quiet/color/format flags.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `Auto` resolves against the real stdout: Human on a terminal, Plain
    /// when piped or redirected. Explicit formats pass through untouched.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        // Color only makes sense for the Human format; Plain and Json must
        // stay free of ANSI codes whatever the flags say.
        let color =
            format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    /// `true` when the run asked for machine-readable output.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Generic message line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Plain, msg)
    }

    /// Success line: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Success, msg)
    }

    /// Warning line: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Warning, msg)
    }

    /// Informational line: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Info, msg)
    }

    /// Section header line.
    pub fn header(&self, msg: &str) -> io::Result<()> {
        self.write(Tone::Header, msg)
    }

    fn write(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match (tone, self.color) {
            (Tone::Plain, _) => msg.to_owned(),
            (Tone::Header, false) => msg.to_owned(),
            (Tone::Header, true) => msg.cyan().bold().to_string(),
            (Tone::Success, false) => format!("\u{2713} {msg}"), // ✓
            (Tone::Success, true) => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
            (Tone::Warning, false) => format!("\u{26a0} {msg}"), // ⚠
            (Tone::Warning, true) => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
            (Tone::Info, false) => format!("\u{2139} {msg}"), // ℹ
            (Tone::Info, true) => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
