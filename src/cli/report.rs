//! Output formatting for CLI commands.
//!
//! Results go to stdout; status lines and failures go to stderr so that
//! `ubersetz translate` output can be piped.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::Pattern;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(message: &str) {
    print_success_to(message, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_failure(message: &str) {
    print_failure_to(message, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}

/// Print one line per pattern: its extensions, then the regex source.
pub fn print_patterns_to<W: Write>(patterns: &[Pattern], function_name: &str, writer: &mut W) {
    let width = patterns
        .iter()
        .map(|pattern| pattern.extensions.join(", ").len())
        .max()
        .unwrap_or(0);

    for pattern in patterns {
        let extensions = format!("{:<width$}", pattern.extensions.join(", "), width = width);
        let _ = writeln!(
            writer,
            "{}  {}",
            extensions.bold(),
            pattern.source(function_name)
        );
    }
}
