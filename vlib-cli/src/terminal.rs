// ============================================================================
// vlib-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Result and error printing
//
// Command results go to stdout undecorated so they can be captured by
// scripts. Errors go to stderr with a red label when stderr is a color
// terminal.
//
// AI-ASSISTANT-INFO: Terminal output helpers for the CLI

// ---- External crate imports ----
use owo_colors::OwoColorize;
use supports_color::Stream;

// ---- Standard library imports ----
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static USE_COLOR: AtomicBool = AtomicBool::new(false);

/// Enables color when stderr supports it.
pub fn init_color() {
    set_color(supports_color::on(Stream::Stderr).is_some());
}

/// Set whether to use color in terminal output
pub fn set_color(enable: bool) {
    USE_COLOR.store(enable, Ordering::Relaxed);
}

fn should_use_color() -> bool {
    USE_COLOR.load(Ordering::Relaxed)
}

/// Writes a command result as a single line.
pub fn print_result<W: Write>(out: &mut W, value: &str) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

/// Formats an error block: the message, then an optional suggestion.
pub fn format_error(message: &str, suggestion: Option<&str>, color: bool) -> String {
    let label = if color {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    };
    let mut text = format!("{} {}", label, message);
    if let Some(suggestion) = suggestion {
        text.push_str("\n  Suggestion: ");
        text.push_str(suggestion);
    }
    text
}

/// Prints an error block to stderr.
pub fn print_error(message: &str, suggestion: Option<&str>) {
    eprintln!("{}", format_error(message, suggestion, should_use_color()));
}
