//! Console output for hook runs.
//!
//! Every line is prefixed with `[fist-bump]` so it stands out in the output of
//! `git commit`. The `format_*` functions build the text, `display_*` print it.

use console::{style, Emoji};

/// Prefix put in front of every message
pub const PREFIX: &str = "[fist-bump]";

static SUCCESS: Emoji<'_, '_> = Emoji("👊 ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static ERROR: Emoji<'_, '_> = Emoji("❗️ ", "");

/// Build a success line
pub fn format_success(message: &str) -> String {
    format!("{} {}{}", style(PREFIX).green(), SUCCESS, message)
}

/// Build a warning line
pub fn format_warning(message: &str) -> String {
    format!("{} {}{}", style(PREFIX).yellow(), WARNING, message)
}

/// Build an error line
pub fn format_error(message: &str) -> String {
    format!("{} {}{}", style(PREFIX).red(), ERROR, style(message).red())
}

/// Build a neutral status line
pub fn format_status(message: &str) -> String {
    format!("{} {}", style(PREFIX).dim(), message)
}

/// Format and print a success message
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Format and print a warning message
pub fn display_warning(message: &str) {
    println!("{}", format_warning(message));
}

/// Format and print an error message to stderr
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a status message
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}
